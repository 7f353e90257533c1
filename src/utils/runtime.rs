/// Global Tokio runtime for deferred work.
///
/// The egui main thread is not a tokio context, so timers cannot be awaited
/// there. This static runtime hosts the simulated booking-confirmation delay;
/// completed tasks report back to the main thread over the app's event
/// channel, which is drained every frame.
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     tokio::time::sleep(delay).await;
///     let _ = event_tx.send(event).await;
/// });
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for deferred tasks")
});
