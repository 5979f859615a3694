//! Tokio-driven debouncing for callers that already run an async event loop.

use std::time::Duration;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use super::Debouncer;

/// A background task that owns a [`Debouncer`] and forwards released values.
///
/// ## Example
///
/// ```ignore
/// let (driver, mut committed) = DebounceDriver::spawn(Duration::from_millis(500));
/// driver.send("мат".to_string());
/// driver.send("матр".to_string());
///
/// // Resolves half a second after the last send.
/// assert_eq!(committed.recv().await.as_deref(), Some("матр"));
/// ```
pub struct DebounceDriver<T> {
    input: UnboundedSender<T>,
    handle: JoinHandle<()>,
}

impl<T: Send + 'static> DebounceDriver<T> {
    /// Spawn the debouncing task on the current tokio runtime.
    ///
    /// Returns the driver and the receiver of committed values.
    pub fn spawn(quiet: Duration) -> (Self, UnboundedReceiver<T>) {
        let (input, mut input_rx) = unbounded_channel::<T>();
        let (output, output_rx) = unbounded_channel::<T>();

        let handle = tokio::spawn(async move {
            let mut debouncer = Debouncer::new(quiet);

            loop {
                let deadline = debouncer.deadline();
                let wake = deadline
                    .map(Instant::from_std)
                    .unwrap_or_else(Instant::now);

                tokio::select! {
                    received = input_rx.recv() => match received {
                        Some(value) => debouncer.push(value, Instant::now().into_std()),
                        None => break,
                    },
                    _ = sleep_until(wake), if deadline.is_some() => {
                        if let Some(value) = debouncer.poll(Instant::now().into_std()) {
                            if output.send(value).is_err() {
                                break;
                            }
                        }
                    }
                }
            }

            if debouncer.cancel().is_some() {
                tracing::debug!("debounce driver stopped with a pending value");
            }
        });

        (DebounceDriver { input, handle }, output_rx)
    }

    /// Feed a new input. Returns `false` once the task has stopped.
    pub fn send(&self, value: T) -> bool {
        self.input.send(value).is_ok()
    }

    /// Stop the task and wait for it. A pending value is dropped.
    pub async fn shutdown(self) {
        let DebounceDriver { input, handle } = self;
        drop(input);
        let _ = handle.await;
    }
}
