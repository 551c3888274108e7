use chrono::Timelike;

/// One snapshot of the displayed time.
///
/// Digits and colon visibility always come from the same timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub colons_visible: bool,
}

impl ClockReading {
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        let seconds = t.second();
        Self {
            hours: t.hour(),
            minutes: t.minute(),
            seconds,
            colons_visible: seconds % 2 == 0,
        }
    }

    /// Zero-padded `[HH, MM, SS]`.
    pub fn digits(&self) -> [String; 3] {
        [
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

impl std::fmt::Display for ClockReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
