//! # Retry Loop
//!
//! The bounded retry-with-backoff loop shared by transport sends. The
//! loop owns nothing but the attempt counter: each attempt is a fresh
//! call into the supplied closure, and the per-class backoff comes from
//! the [`RetryPolicy`].

use std::thread;

use crate::error::PrintError;
use crate::printer::RetryPolicy;

/// Run `op` up to `policy.max_attempts` times.
///
/// Non-retryable errors are returned immediately. Retryable failures
/// sleep the class-specific backoff before the next attempt (never
/// after the last); exhausting the policy wraps the final error in
/// [`PrintError::RetriesExhausted`] with the total attempt count.
///
/// On success returns `(attempts_used, value)`, counting the successful
/// attempt.
pub(crate) fn retry<T, F>(policy: &RetryPolicy, addr: &str, mut op: F) -> Result<(u32, T), PrintError>
where
    F: FnMut() -> Result<T, PrintError>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut last_error: Option<PrintError> = None;

    for attempt in 1..=max_attempts {
        match op() {
            Ok(val) => return Ok((attempt, val)),
            Err(e) => {
                if !e.is_retryable() {
                    return Err(e);
                }
                log::warn!("attempt {attempt}/{max_attempts} to {addr} failed: {e}");

                // Don't sleep after the last attempt.
                if attempt < max_attempts {
                    thread::sleep(policy.backoff_for(&e));
                }
                last_error = Some(e);
            }
        }
    }

    // Only reachable when every attempt failed with a retryable error.
    Err(PrintError::RetriesExhausted {
        addr: addr.to_string(),
        attempts: max_attempts,
        last_error: Box::new(last_error.unwrap_or_else(|| {
            unreachable!("at least one attempt was made (max_attempts >= 1)")
        })),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            connect_timeout_backoff_ms: 1,
            error_backoff_ms: 1,
        }
    }

    fn refused() -> PrintError {
        PrintError::Refused {
            addr: "10.0.0.1:9100".into(),
            source: io::Error::new(io::ErrorKind::ConnectionRefused, "mock"),
        }
    }

    #[test]
    fn test_success_on_first_attempt() {
        let calls = Cell::new(0u32);
        let result = retry(&fast_policy(4), "10.0.0.1:9100", || {
            calls.set(calls.get() + 1);
            Ok::<_, PrintError>(42)
        });
        assert_eq!(result.unwrap(), (1, 42));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_succeeds_after_transient_failures() {
        let calls = Cell::new(0u32);
        let result = retry(&fast_policy(5), "10.0.0.1:9100", || {
            calls.set(calls.get() + 1);
            if calls.get() < 3 { Err(refused()) } else { Ok("sent") }
        });
        assert_eq!(result.unwrap(), (3, "sent"));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_non_retryable_returned_immediately() {
        let calls = Cell::new(0u32);
        let result: Result<(u32, ()), _> = retry(&fast_policy(4), "10.0.0.1:9100", || {
            calls.set(calls.get() + 1);
            Err(PrintError::Compose("missing code".into()))
        });
        assert!(matches!(result.unwrap_err(), PrintError::Compose(_)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_exhaustion_names_attempts_and_endpoint() {
        let calls = Cell::new(0u32);
        let result: Result<(u32, ()), _> = retry(&fast_policy(4), "10.0.0.1:9100", || {
            calls.set(calls.get() + 1);
            Err(refused())
        });
        assert_eq!(calls.get(), 4);
        match result.unwrap_err() {
            PrintError::RetriesExhausted {
                addr,
                attempts,
                last_error,
            } => {
                assert_eq!(addr, "10.0.0.1:9100");
                assert_eq!(attempts, 4);
                assert!(matches!(*last_error, PrintError::Refused { .. }));
            }
            other => panic!("expected RetriesExhausted, got: {other:?}"),
        }
    }

    #[test]
    fn test_zero_max_attempts_still_runs_once() {
        let calls = Cell::new(0u32);
        let result = retry(&fast_policy(0), "10.0.0.1:9100", || {
            calls.set(calls.get() + 1);
            Ok::<_, PrintError>(())
        });
        assert_eq!(result.unwrap().0, 1);
        assert_eq!(calls.get(), 1);
    }
}
