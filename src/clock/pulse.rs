use std::time::Duration;

use chrono::NaiveTime;

use super::platform::{Platform, TimerId};

pub const PULSE_LIFETIME: Duration = Duration::from_millis(300);

/// One-shot flash acknowledging a toggle.
///
/// Re-firing while active cancels the pending expiry and schedules a new one,
/// so at most one expiry timer is ever pending.
#[derive(Debug, Default)]
pub struct Pulse {
    started_at: Option<NaiveTime>,
    timer: Option<TimerId>,
}

impl Pulse {
    pub fn fire<P: Platform>(&mut self, platform: &mut P) {
        if let Some(old) = self.timer.take() {
            platform.clear_timer(old);
        }
        self.started_at = Some(platform.now());
        self.timer = Some(platform.set_timeout(PULSE_LIFETIME));
    }

    /// Handle an expiry. Returns `true` if `id` belonged to this pulse.
    pub fn on_timer<P: Platform>(&mut self, id: TimerId, platform: &mut P) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        platform.clear_timer(id);
        self.timer = None;
        if let Some(started) = self.started_at.take() {
            log::trace!("pulse from {started} expired");
        }
        true
    }

    pub fn is_firing(&self) -> bool {
        self.timer.is_some()
    }

    pub(crate) fn release<P: Platform>(&mut self, platform: &mut P) {
        if let Some(id) = self.timer.take() {
            platform.clear_timer(id);
        }
        self.started_at = None;
    }
}
