//! # Text Sanitization
//!
//! Two deliberately different text treatments live here:
//!
//! 1. **Ellipsis truncation + field padding** for the single and dual
//!    text layouts: cap the visible length, append `"..."` when content
//!    was dropped, and pad to fixed field widths so the second column of
//!    a dual label lands at a predictable offset on a fixed-pitch font.
//! 2. **ASCII folding** for the horizontal raster layout: strip accents
//!    down to base letters and replace anything else non-ASCII with `?`,
//!    preserving spacing. Lossier than ellipsis truncation; the two must
//!    not be merged.
//!
//! The fold table covers Vietnamese fully (the product catalogs this
//! library was built for) plus the common Latin-1 accents. Characters
//! outside the table become `?` rather than vanishing, so the printed
//! width never drifts from the input width.

/// Fixed field width for each slot of the dual layout, in characters.
pub const FIELD_WIDTH: usize = 20;

/// Truncate to at most `max` visible characters, appending `"..."` if
/// anything was cut.
///
/// Counts characters, not bytes: a multi-byte name must not be sliced
/// mid-code-point.
///
/// ## Example
///
/// ```
/// use etiqueta::label::sanitize::truncate_visible;
///
/// assert_eq!(truncate_visible("exactly eighteen c", 18), "exactly eighteen c");
/// assert_eq!(truncate_visible("exactly nineteen ch", 18), "exactly nineteen c...");
/// ```
pub fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push_str("...");
        out
    }
}

/// Clip to at most `max` characters, with no ellipsis marker.
///
/// Used by the horizontal raster layout, whose sanitization path is
/// intentionally lossier than [`truncate_visible`].
pub fn clip_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Pad (or clip) to exactly [`FIELD_WIDTH`] characters.
///
/// The dual layout positions its second column purely by character
/// count, so the field width is invariant regardless of input length.
/// Inputs are expected to be pre-truncated; anything longer is clipped
/// rather than allowed to shift the next column.
pub fn pad_field(s: &str) -> String {
    let mut out: String = s.chars().take(FIELD_WIDTH).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', FIELD_WIDTH - len));
    out
}

/// An empty dual-layout slot: exactly [`FIELD_WIDTH`] spaces.
pub fn empty_field() -> String {
    " ".repeat(FIELD_WIDTH)
}

/// Fold a string to printable ASCII.
///
/// - ASCII passes through unchanged (spacing preserved)
/// - Combining diacritical marks are stripped entirely
/// - Accented Latin letters fold to their base letter
/// - Anything else becomes `?`
pub fn fold_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else if let Some(folded) = fold_char(ch) {
            out.push(folded);
        }
        // Combining marks stripped; fold_char returned None
    }
    out
}

/// Map an accented character to its ASCII base letter.
///
/// Returns `None` for combining diacritical marks (stripped) and
/// `Some('?')` for characters with no mapping.
fn fold_char(ch: char) -> Option<char> {
    // Combining diacritical marks: strip without replacement
    if ('\u{0300}'..='\u{036F}').contains(&ch) {
        return None;
    }

    let folded = match ch {
        // Vietnamese a-family (and Latin-1 a)
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ'
        | 'ấ' | 'ẩ' | 'ẫ' | 'ậ' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Ả' | 'Ã' | 'Ạ' | 'Ă' | 'Ằ' | 'Ắ' | 'Ẳ' | 'Ẵ' | 'Ặ' | 'Â' | 'Ầ'
        | 'Ấ' | 'Ẩ' | 'Ẫ' | 'Ậ' | 'Ä' | 'Å' => 'A',

        // e-family
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' | 'ë' => 'e',
        'È' | 'É' | 'Ẻ' | 'Ẽ' | 'Ẹ' | 'Ê' | 'Ề' | 'Ế' | 'Ể' | 'Ễ' | 'Ệ' | 'Ë' => 'E',

        // i-family
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Ỉ' | 'Ĩ' | 'Ị' | 'Î' | 'Ï' => 'I',

        // o-family
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ'
        | 'ớ' | 'ở' | 'ỡ' | 'ợ' | 'ö' => 'o',
        'Ò' | 'Ó' | 'Ỏ' | 'Õ' | 'Ọ' | 'Ô' | 'Ồ' | 'Ố' | 'Ổ' | 'Ỗ' | 'Ộ' | 'Ơ' | 'Ờ'
        | 'Ớ' | 'Ở' | 'Ỡ' | 'Ợ' | 'Ö' => 'O',

        // u-family
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Ủ' | 'Ũ' | 'Ụ' | 'Ư' | 'Ừ' | 'Ứ' | 'Ử' | 'Ữ' | 'Ự' | 'Û' | 'Ü' => 'U',

        // y-family
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'Ỳ' | 'Ý' | 'Ỷ' | 'Ỹ' | 'Ỵ' => 'Y',

        // d with stroke
        'đ' => 'd',
        'Đ' => 'D',

        // Other common Latin-1
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',

        _ => '?',
    };
    Some(folded)
}
