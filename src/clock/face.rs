use super::cycle::Rgb;
use super::tooltip::TooltipId;

pub const MARKER_ROOT: &str = "digital-clock";
pub const MARKER_COLON: &str = "clock-colon";
pub const MARKER_PULSE: &str = "konami-flash";

pub const DEFAULT_LINK_URL: &str = "https://www.nba.com";
pub const DEFAULT_LINK_LABEL: &str = "Visit NBA.com";

/// Where activating the clock goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub label: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl Link {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
            target: "_blank",
            rel: "noopener noreferrer",
        }
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_URL, DEFAULT_LINK_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipFace {
    pub id: TooltipId,
    pub role: &'static str,
    pub text: &'static str,
}

/// Everything a renderer needs for one frame of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub hh: String,
    pub mm: String,
    pub ss: String,
    pub colons_visible: bool,
    pub color: Rgb,
    pub pulse: bool,
    pub tooltip: Option<TooltipFace>,
    /// Tooltip reference, present only while hovered.
    pub described_by: Option<TooltipId>,
    pub link: Link,
}

impl ClockFace {
    /// Text content with colons in place, e.g. `"09:05:07"`.
    pub fn text(&self) -> String {
        format!("{}:{}:{}", self.hh, self.mm, self.ss)
    }

    /// Test markers present in this frame, in document order.
    pub fn markers(&self) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(4);
        if self.pulse {
            out.push(MARKER_PULSE);
        }
        out.extend([MARKER_ROOT, MARKER_COLON, MARKER_COLON]);
        out
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers().iter().any(|m| *m == marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::cycle::NEON_PALETTE;

    fn face(pulse: bool) -> ClockFace {
        ClockFace {
            hh: "07".into(),
            mm: "08".into(),
            ss: "09".into(),
            colons_visible: false,
            color: NEON_PALETTE[0],
            pulse,
            tooltip: None,
            described_by: None,
            link: Link::default(),
        }
    }

    #[test]
    fn text_keeps_colons_even_when_hidden() {
        assert_eq!(face(false).text(), "07:08:09");
    }

    #[test]
    fn pulse_marker_only_while_pulsing() {
        assert_eq!(
            face(false).markers(),
            vec![MARKER_ROOT, MARKER_COLON, MARKER_COLON]
        );
        assert!(face(true).has_marker(MARKER_PULSE));
        assert!(!face(false).has_marker(MARKER_PULSE));
    }
}
