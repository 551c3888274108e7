use std::time::Duration;

use chrono::NaiveTime;

/// Handle to a timer created through a [`Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Handle to a key-listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Everything the clock widget needs from its host: wall-clock time, a timer
/// facility, a global key stream and a random source.
///
/// Timers and listeners are only *registered* here; the host delivers their
/// firings back to the widget by calling [`super::DigitalClock::on_timer`] and
/// [`super::DigitalClock::on_key`]. Every id handed out is released exactly
/// once by the widget, including one-shot timers after they fire.
pub trait Platform {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveTime;

    /// Start a repeating timer.
    fn set_interval(&mut self, period: Duration) -> TimerId;

    /// Start a one-shot timer.
    fn set_timeout(&mut self, delay: Duration) -> TimerId;

    /// Release a timer. Releasing an unknown or already-fired id is a no-op.
    fn clear_timer(&mut self, id: TimerId);

    /// Subscribe to the global key-press stream.
    fn add_key_listener(&mut self) -> ListenerId;

    fn remove_key_listener(&mut self, id: ListenerId);

    /// Uniform draw from `0..len`. `len` is never zero.
    fn random_index(&mut self, len: usize) -> usize;
}
