use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::NaiveTime;
use iced::keyboard::key::Named;
use iced::{event, keyboard, Event, Subscription};
use rand::Rng;

use crate::app::Message;
use crate::clock::platform::{ListenerId, Platform, TimerId};
use crate::clock::secret::Key;
use crate::ipc;

// Shared by every platform so ids (and subscription identities) never repeat
// across widget instances.
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

fn next_handle() -> u64 {
    NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
}

/// A registered timer. Hashing the whole spec gives each timer its own
/// subscription identity, so a cancelled timer's stream is dropped by iced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TimerSpec {
    pub(crate) id: TimerId,
    pub(crate) period: Duration,
    pub(crate) repeat: bool,
}

/// [`Platform`] backed by iced subscriptions.
///
/// Nothing runs here directly: the registry is turned into subscriptions on
/// every `Host::subscription` call, and firings come back as messages.
#[derive(Debug, Default)]
pub(crate) struct IcedPlatform {
    timers: BTreeMap<TimerId, TimerSpec>,
    listeners: BTreeSet<ListenerId>,
}

impl IcedPlatform {
    fn insert(&mut self, period: Duration, repeat: bool) -> TimerId {
        let id = TimerId(next_handle());
        self.timers.insert(id, TimerSpec { id, period, repeat });
        log::debug!("timer {id:?} registered ({period:?}, repeat={repeat})");
        id
    }

    /// Ids of the live timers, oldest first.
    pub(crate) fn timer_ids(&self) -> Vec<TimerId> {
        self.timers.keys().copied().collect()
    }

    pub(crate) fn subscriptions(&self) -> Vec<Subscription<Message>> {
        let mut subs: Vec<Subscription<Message>> = self
            .timers
            .values()
            .map(|spec| Subscription::run_with(*spec, ipc::timer_stream))
            .collect();
        if !self.listeners.is_empty() {
            subs.push(event::listen_with(key_press));
        }
        subs
    }
}

impl Platform for IcedPlatform {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }

    fn set_interval(&mut self, period: Duration) -> TimerId {
        self.insert(period, true)
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.insert(delay, false)
    }

    fn clear_timer(&mut self, id: TimerId) {
        if self.timers.remove(&id).is_some() {
            log::debug!("timer {id:?} released");
        }
    }

    fn add_key_listener(&mut self) -> ListenerId {
        let id = ListenerId(next_handle());
        self.listeners.insert(id);
        id
    }

    fn remove_key_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn random_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

fn key_press(event: Event, _status: event::Status, _window: iced::window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Some(Message::KeyPressed(map_key(&key)))
        }
        _ => None,
    }
}

pub(crate) fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::ArrowUp) => Key::ArrowUp,
        keyboard::Key::Named(Named::ArrowDown) => Key::ArrowDown,
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Character(c) => Key::from_name(c.as_str()),
        _ => Key::Other,
    }
}
