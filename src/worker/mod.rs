//! Background computations with single-shot result hand-off.
//!
//! Long-running numeric work (like the pi series estimate) runs on a
//! dedicated thread so it never blocks the caller's owning thread. The
//! result comes back over a oneshot channel, so it is delivered exactly
//! once. Cancellation is not supported; a handle that is dropped simply
//! never observes the result.

use tokio::sync::oneshot;
use tracing::debug;

/// Handle to a computation running on a background thread.
///
/// Consume it with [`result`](Self::result) from async code or
/// [`wait`](Self::wait) from blocking code. Either way the result is
/// observed at most once.
pub struct ComputationHandle<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> ComputationHandle<T> {
    /// Await the result. Returns `None` if the worker died before sending.
    pub async fn result(self) -> Option<T> {
        self.rx.await.ok()
    }

    /// Block the current thread until the result arrives. Returns `None`
    /// if the worker died before sending.
    pub fn wait(self) -> Option<T> {
        self.rx.blocking_recv().ok()
    }
}

/// Run `f` on a dedicated thread and hand its result back through the
/// returned handle.
///
/// # Example
///
/// ```rust
/// use reckon::worker;
///
/// let handle = worker::spawn(|| worker::estimate_pi(10_000));
/// let estimate = handle.wait().unwrap();
/// assert!((estimate - std::f64::consts::PI).abs() < 1e-3);
/// ```
pub fn spawn<T, F>(f: F) -> ComputationHandle<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let value = f();
        // The receiver may have been dropped; nothing to do then.
        if tx.send(value).is_err() {
            debug!("computation finished but the handle was dropped");
        }
    });
    ComputationHandle { rx }
}

/// Estimate pi with a partial sum of the Leibniz series.
///
/// Converges slowly (error on the order of `1 / terms`), which is the point:
/// it is a stand-in for any computation too slow to run on the UI thread.
pub fn estimate_pi(terms: usize) -> f64 {
    let mut sum = 0.0;
    for k in 0..terms {
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign / (2 * k + 1) as f64;
    }
    4.0 * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leibniz_series_converges() {
        let estimate = estimate_pi(100_000);
        assert!((estimate - std::f64::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn zero_terms_estimates_zero() {
        assert_eq!(estimate_pi(0), 0.0);
    }

    #[test]
    fn wait_delivers_result_from_blocking_code() {
        let handle = spawn(|| 2 + 2);
        assert_eq!(handle.wait(), Some(4));
    }

    #[tokio::test]
    async fn result_delivers_exactly_once_to_async_code() {
        let handle = spawn(|| estimate_pi(1_000));
        let estimate = handle.result().await.unwrap();
        assert!((estimate - std::f64::consts::PI).abs() < 1e-2);
    }

    #[tokio::test]
    async fn dead_worker_yields_none() {
        let handle: ComputationHandle<u32> = spawn(|| panic!("worker died"));
        assert_eq!(handle.result().await, None);
    }
}
