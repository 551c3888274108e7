use std::time::Duration;

use super::platform::{Platform, TimerId};

pub const CYCLE_PERIOD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const NEON_PALETTE: [Rgb; 5] = [
    Rgb(0xff, 0x00, 0x00), // red
    Rgb(0x00, 0xff, 0x00), // green
    Rgb(0xff, 0xaa, 0x00), // amber
    Rgb(0x00, 0xff, 0xff), // cyan
    Rgb(0xff, 0x00, 0xff), // magenta
];

/// Palette cycler whose timer lives exactly as long as the mode is active.
///
/// Callers never start or stop the timer directly; they report the current
/// activation state through [`ColorCycler::sync`].
#[derive(Debug, Default)]
pub struct ColorCycler {
    index: usize,
    timer: Option<TimerId>,
}

impl ColorCycler {
    pub fn sync<P: Platform>(&mut self, activated: bool, platform: &mut P) {
        match (activated, self.timer) {
            (true, None) => {
                let id = platform.set_interval(CYCLE_PERIOD);
                log::debug!("color cycle started ({id:?})");
                self.timer = Some(id);
            }
            (false, Some(id)) => {
                platform.clear_timer(id);
                log::debug!("color cycle stopped ({id:?})");
                self.timer = None;
                self.index = 0;
            }
            _ => {}
        }
    }

    /// Advance one step if `id` is this cycler's timer.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        self.index = (self.index + 1) % NEON_PALETTE.len();
        log::trace!("palette -> {}", NEON_PALETTE[self.index].to_hex());
        true
    }

    pub fn color(&self) -> Rgb {
        if self.timer.is_some() {
            NEON_PALETTE[self.index]
        } else {
            NEON_PALETTE[0]
        }
    }

    pub(crate) fn release<P: Platform>(&mut self, platform: &mut P) {
        self.sync(false, platform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(NEON_PALETTE[0].to_hex(), "#ff0000");
        assert_eq!(NEON_PALETTE[2].to_hex(), "#ffaa00");
    }

    #[test]
    fn palette_has_five_distinct_colors() {
        for (i, a) in NEON_PALETTE.iter().enumerate() {
            for b in &NEON_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn foreign_timer_is_ignored() {
        let mut cycler = ColorCycler::default();
        assert!(!cycler.on_timer(TimerId(99)));
        assert_eq!(cycler.color(), NEON_PALETTE[0]);
    }
}
