//! The interactive clock widget.
//!
//! A [`DigitalClock`] owns its [`Platform`] and every timer and listener it
//! acquires through it. Mounting acquires the clock tick and the key
//! listener; the palette timer follows the activation flag; the pulse holds at
//! most one pending expiry. Dropping the widget releases all of them.

pub mod cycle;
pub mod face;
pub mod platform;
pub mod pulse;
pub mod reading;
pub mod secret;
pub mod tooltip;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use cycle::ColorCycler;
use face::{ClockFace, Link, TooltipFace};
use platform::{ListenerId, Platform, TimerId};
use pulse::Pulse;
use reading::ClockReading;
use secret::{Key, SecretSequence};
use tooltip::Tooltip;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct DigitalClock<P: Platform> {
    platform: P,
    link: Link,
    reading: ClockReading,
    tick: Option<TimerId>,
    keys: Option<ListenerId>,
    secret: SecretSequence,
    activated: bool,
    cycler: ColorCycler,
    pulse: Pulse,
    tooltip: Tooltip,
}

impl<P: Platform> DigitalClock<P> {
    /// Publish the initial reading, then start the tick and the key listener.
    pub fn mount(platform: P, link: Link) -> Self {
        let reading = ClockReading::from_time(&platform.now());
        let mut clock = Self {
            platform,
            link,
            reading,
            tick: None,
            keys: None,
            secret: SecretSequence::default(),
            activated: false,
            cycler: ColorCycler::default(),
            pulse: Pulse::default(),
            tooltip: Tooltip::new(),
        };
        // Handles are stored as soon as they exist so Drop sees them.
        clock.tick = Some(clock.platform.set_interval(TICK_PERIOD));
        clock.keys = Some(clock.platform.add_key_listener());
        log::debug!("clock mounted at {}", clock.reading);
        clock
    }

    /// Dispatch a timer firing to whichever sub-behavior owns `id`.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.tick == Some(id) {
            self.reading = ClockReading::from_time(&self.platform.now());
        } else if !self.cycler.on_timer(id) && !self.pulse.on_timer(id, &mut self.platform) {
            log::trace!("ignoring stale timer {id:?}");
        }
    }

    pub fn on_key(&mut self, key: Key) {
        let completed = self.secret.feed(key);
        log::trace!("key {key:?}, secret progress {}", self.secret.progress());
        if completed {
            self.set_activated(!self.activated);
            self.pulse.fire(&mut self.platform);
        }
    }

    pub fn hover_start(&mut self) {
        self.tooltip.hover_start(&mut self.platform);
    }

    pub fn hover_end(&mut self) {
        self.tooltip.hover_end();
    }

    fn set_activated(&mut self, activated: bool) {
        self.activated = activated;
        self.cycler.sync(activated, &mut self.platform);
        log::info!(
            "secret code: color cycling {}",
            if activated { "on" } else { "off" }
        );
    }

    pub fn reading(&self) -> ClockReading {
        self.reading
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_firing()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn face(&self) -> ClockFace {
        let [hh, mm, ss] = self.reading.digits();
        let tooltip = self.tooltip.current().map(|text| TooltipFace {
            id: self.tooltip.id(),
            role: "tooltip",
            text,
        });
        ClockFace {
            hh,
            mm,
            ss,
            colons_visible: self.reading.colons_visible,
            color: self.cycler.color(),
            pulse: self.pulse.is_firing(),
            described_by: tooltip.as_ref().map(|t| t.id),
            tooltip,
            link: self.link.clone(),
        }
    }
}

impl<P: Platform> Drop for DigitalClock<P> {
    fn drop(&mut self) {
        if let Some(id) = self.tick.take() {
            self.platform.clear_timer(id);
        }
        self.cycler.release(&mut self.platform);
        self.pulse.release(&mut self.platform);
        if let Some(id) = self.keys.take() {
            self.platform.remove_key_listener(id);
        }
        log::debug!("clock unmounted");
    }
}
