use std::sync::atomic::{AtomicU64, Ordering};

use super::platform::Platform;

pub const MOTIVATIONAL_QUOTES: &[&str] = &[
    "The best time to start is now.",
    "Stay focused, stay sharp.",
    "One task at a time.",
    "You are making progress.",
    "Tick tock, time to rock.",
    "Small steps lead to big wins.",
    "Every second counts.",
];

static NEXT_TOOLTIP_ID: AtomicU64 = AtomicU64::new(1);

/// Identity linking the hovered clock to its tooltip. Unique per widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooltipId(u64);

impl TooltipId {
    fn next() -> Self {
        Self(NEXT_TOOLTIP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for TooltipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "clock-tooltip-{}", self.0)
    }
}

#[derive(Debug)]
pub struct Tooltip {
    id: TooltipId,
    visible: bool,
    quote: Option<&'static str>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self {
            id: TooltipId::next(),
            visible: false,
            quote: None,
        }
    }

    /// Draw a fresh quote on every hover start.
    pub fn hover_start<P: Platform>(&mut self, platform: &mut P) {
        let idx = platform.random_index(MOTIVATIONAL_QUOTES.len());
        self.quote = MOTIVATIONAL_QUOTES.get(idx).copied();
        self.visible = true;
    }

    pub fn hover_end(&mut self) {
        self.visible = false;
    }

    pub fn id(&self) -> TooltipId {
        self.id
    }

    /// The quote to show, only while hovered.
    pub fn current(&self) -> Option<&'static str> {
        if self.visible { self.quote } else { None }
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}
