//! Declarative delayed-message scheduling.
//!
//! Timed UI choreography (dialog activation, exit transitions) is expressed
//! as a list of `(delay, message)` steps instead of ad-hoc nested timers.
//! Each produced message goes through the normal update path, which decides
//! whether it still applies; a step that arrives after the state moved on is
//! simply ignored there.

use std::time::Duration;

use iced::Task;

/// Produce `message` after `duration`.
pub fn delay<M>(duration: Duration, message: M) -> Task<M>
where
    M: Clone + Send + 'static,
{
    // The sleep is constructed inside the future so the timer is created on
    // the runtime that polls it, not on the UI thread.
    Task::perform(
        async move { tokio::time::sleep(duration).await },
        move |()| message.clone(),
    )
}

/// Run a list of `(delay, message)` steps in order.
///
/// Each delay is relative to the previous step's message.
pub fn sequence<M>(steps: Vec<(Duration, M)>) -> Task<M>
where
    M: Clone + Send + 'static,
{
    steps
        .into_iter()
        .fold(Task::none(), |acc, (duration, message)| {
            acc.chain(delay(duration, message))
        })
}
