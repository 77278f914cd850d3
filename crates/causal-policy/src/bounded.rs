//! Collaborator calls with an optional deadline.

use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::Duration;

use causal_core::errors::CollaboratorError;
use crossbeam_channel::{bounded, RecvTimeoutError};

/// Run `call`, giving up after `timeout`. A panicking call is reported as a
/// `Failed` collaborator error on either path.
///
/// Without a timeout the call runs on the current thread. With one, it runs on
/// a named worker thread; on expiry the worker is abandoned and finishes on its
/// own. Nothing cancels it, so its lifetime is bounded only by the
/// collaborator's own deadline. For the LLM collaborators that is the client's
/// `request_timeout` times `max_retries + 1`, plus the retry backoff.
pub(crate) fn call_bounded<T, F>(
    collaborator: &'static str,
    timeout: Option<Duration>,
    call: F,
) -> Result<T, CollaboratorError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, CollaboratorError> + Send + 'static,
{
    let Some(limit) = timeout else {
        return guarded(collaborator, call);
    };

    let (tx, rx) = bounded(1);
    thread::Builder::new()
        .name(format!("causal-{collaborator}"))
        .spawn(move || {
            // The receiver may be gone after a timeout.
            let _ = tx.send(guarded(collaborator, call));
        })
        .map_err(|e| CollaboratorError::failed(collaborator, format!("spawn worker: {e}")))?;

    match rx.recv_timeout(limit) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(CollaboratorError::TimedOut {
            collaborator: collaborator.to_string(),
            timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }),
        Err(RecvTimeoutError::Disconnected) => Err(CollaboratorError::failed(
            collaborator,
            "worker exited without a result",
        )),
    }
}

fn guarded<T, F>(collaborator: &'static str, call: F) -> Result<T, CollaboratorError>
where
    F: FnOnce() -> Result<T, CollaboratorError>,
{
    panic::catch_unwind(AssertUnwindSafe(call))
        .unwrap_or_else(|_| Err(CollaboratorError::failed(collaborator, "panicked")))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn unbounded_call_runs_inline() {
        let result = call_bounded("test", None, || Ok::<_, CollaboratorError>(7));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn fast_call_beats_the_deadline() {
        let result = call_bounded("test", Some(Duration::from_secs(5)), || Ok(7));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn slow_call_times_out() {
        let result: Result<u8, _> = call_bounded("slow", Some(Duration::from_millis(20)), || {
            thread::sleep(Duration::from_millis(500));
            Ok(1)
        });
        assert_eq!(
            result,
            Err(CollaboratorError::TimedOut {
                collaborator: "slow".to_string(),
                timeout_ms: 20,
            })
        );
    }

    #[test]
    fn abandoned_worker_still_runs_to_completion() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);
        let result: Result<u8, _> = call_bounded("slow", Some(Duration::from_millis(10)), move || {
            thread::sleep(Duration::from_millis(50));
            flag.store(true, Ordering::SeqCst);
            Ok(1)
        });
        assert!(matches!(result, Err(CollaboratorError::TimedOut { .. })));

        for _ in 0..100 {
            if finished.load(Ordering::SeqCst) {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("abandoned worker never finished");
    }

    #[test]
    fn panicking_call_is_a_failure() {
        let result: Result<u8, _> =
            call_bounded("panicky", Some(Duration::from_secs(5)), || panic!("boom"));
        assert_eq!(result, Err(CollaboratorError::failed("panicky", "panicked")));
    }

    #[test]
    fn panicking_inline_call_is_a_failure() {
        let result: Result<u8, _> = call_bounded("panicky", None, || panic!("boom"));
        assert_eq!(result, Err(CollaboratorError::failed("panicky", "panicked")));
    }

    #[test]
    fn errors_pass_through() {
        let result: Result<u8, _> = call_bounded("broken", Some(Duration::from_secs(5)), || {
            Err(CollaboratorError::failed("broken", "offline"))
        });
        assert_eq!(result, Err(CollaboratorError::failed("broken", "offline")));
    }
}
