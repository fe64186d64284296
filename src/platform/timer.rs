//! Timers for periodic refresh.

use std::future::Future;
use std::time::Duration;

/// Suspend the current task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    tokio::time::sleep(duration).await;

    // No timer source: never wake, so pollers simply stop after one round
    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    {
        let _ = duration;
        futures::future::pending::<()>().await;
    }
}

/// Run `tick` now and then once per `period`, forever.
///
/// The period is measured from the start of one tick to the start of the
/// next, so time spent fetching does not push later ticks back. Ticks never
/// overlap: one that outlasts `period` starts the next as soon as it ends.
///
/// There is no internal cancellation: the loop ends when the future is
/// dropped, which is how a component's `use_future` tears it down on
/// unmount.
pub async fn run_every<S, SF, T, TF>(period: Duration, mut sleep: S, mut tick: T)
where
    S: FnMut(Duration) -> SF,
    SF: Future<Output = ()>,
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
{
    loop {
        futures::join!(tick(), sleep(period));
    }
}
