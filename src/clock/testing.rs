use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use chrono::{NaiveTime, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::face::Link;
use super::platform::{ListenerId, Platform, TimerId};
use super::secret::Key;
use super::DigitalClock;

#[derive(Debug, Clone, Copy)]
struct FakeTimer {
    period: Duration,
    repeat: bool,
    /// `None` once a one-shot has fired but not yet been released.
    due_ms: Option<u64>,
}

/// Bookkeeping shared between a [`FakePlatform`] and the test driving it.
#[derive(Debug)]
pub(crate) struct Ledger {
    base: NaiveTime,
    elapsed_ms: u64,
    next_id: u64,
    timers: BTreeMap<TimerId, FakeTimer>,
    listeners: BTreeSet<ListenerId>,
    pub timers_created: usize,
    pub timers_cleared: usize,
    pub intervals: Vec<Duration>,
    pub listeners_added: usize,
    pub listeners_removed: usize,
}

impl Ledger {
    pub(crate) fn new(base: NaiveTime) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            base,
            elapsed_ms: 0,
            next_id: 1,
            timers: BTreeMap::new(),
            listeners: BTreeSet::new(),
            timers_created: 0,
            timers_cleared: 0,
            intervals: Vec::new(),
            listeners_added: 0,
            listeners_removed: 0,
        }))
    }

    fn now(&self) -> NaiveTime {
        self.base + TimeDelta::milliseconds(self.elapsed_ms as i64)
    }

    fn insert(&mut self, period: Duration, repeat: bool) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers_created += 1;
        let due_ms = Some(self.elapsed_ms + period.as_millis() as u64);
        self.timers.insert(
            id,
            FakeTimer {
                period,
                repeat,
                due_ms,
            },
        );
        id
    }

    fn next_due(&self, limit: u64) -> Option<(TimerId, u64)> {
        self.timers
            .iter()
            .filter_map(|(&id, t)| t.due_ms.map(|d| (d, id)))
            .filter(|&(d, _)| d <= limit)
            .min()
            .map(|(d, id)| (id, d))
    }

    fn fire(&mut self, id: TimerId, at: u64) {
        self.elapsed_ms = at;
        if let Some(t) = self.timers.get_mut(&id) {
            t.due_ms = if t.repeat {
                Some(at + t.period.as_millis() as u64)
            } else {
                None
            };
        }
    }

    pub(crate) fn live_timers(&self) -> usize {
        self.timers.len()
    }

    pub(crate) fn live_intervals(&self, period: Duration) -> usize {
        self.timers
            .values()
            .filter(|t| t.repeat && t.period == period)
            .count()
    }

    pub(crate) fn live_listeners(&self) -> usize {
        self.listeners.len()
    }
}

pub(crate) struct FakePlatform {
    ledger: Rc<RefCell<Ledger>>,
    rng: StdRng,
    scripted: VecDeque<usize>,
}

impl FakePlatform {
    pub(crate) fn new(ledger: Rc<RefCell<Ledger>>, seed: u64) -> Self {
        Self {
            ledger,
            rng: StdRng::seed_from_u64(seed),
            scripted: VecDeque::new(),
        }
    }

    /// Queue exact indices to return from `random_index` before falling
    /// back to the seeded generator.
    pub(crate) fn with_draws(mut self, draws: impl IntoIterator<Item = usize>) -> Self {
        self.scripted.extend(draws);
        self
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> NaiveTime {
        self.ledger.borrow().now()
    }

    fn set_interval(&mut self, period: Duration) -> TimerId {
        let mut ledger = self.ledger.borrow_mut();
        ledger.intervals.push(period);
        ledger.insert(period, true)
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.ledger.borrow_mut().insert(delay, false)
    }

    fn clear_timer(&mut self, id: TimerId) {
        let mut ledger = self.ledger.borrow_mut();
        if ledger.timers.remove(&id).is_some() {
            ledger.timers_cleared += 1;
        }
    }

    fn add_key_listener(&mut self) -> ListenerId {
        let mut ledger = self.ledger.borrow_mut();
        let id = ListenerId(ledger.next_id);
        ledger.next_id += 1;
        ledger.listeners.insert(id);
        ledger.listeners_added += 1;
        id
    }

    fn remove_key_listener(&mut self, id: ListenerId) {
        let mut ledger = self.ledger.borrow_mut();
        if ledger.listeners.remove(&id) {
            ledger.listeners_removed += 1;
        }
    }

    fn random_index(&mut self, len: usize) -> usize {
        match self.scripted.pop_front() {
            Some(i) => i % len,
            None => self.rng.random_range(0..len),
        }
    }
}

/// A mounted clock on a simulated clock and event loop.
pub(crate) struct Harness {
    pub clock: DigitalClock<FakePlatform>,
    pub ledger: Rc<RefCell<Ledger>>,
}

impl Harness {
    pub(crate) fn at(h: u32, m: u32, s: u32) -> Self {
        let base = NaiveTime::from_hms_opt(h, m, s).unwrap();
        let ledger = Ledger::new(base);
        Self::mount(FakePlatform::new(Rc::clone(&ledger), 7), ledger)
    }

    pub(crate) fn mount(platform: FakePlatform, ledger: Rc<RefCell<Ledger>>) -> Self {
        Self {
            clock: DigitalClock::mount(platform, Link::default()),
            ledger,
        }
    }

    /// Mount a fresh widget on the same simulated platform.
    pub(crate) fn remount(self) -> Self {
        let ledger = Rc::clone(&self.ledger);
        drop(self);
        Self::mount(FakePlatform::new(Rc::clone(&ledger), 11), ledger)
    }

    /// Run simulated time forward, firing due timers in deadline order.
    pub(crate) fn advance(&mut self, ms: u64) {
        let target = self.ledger.borrow().elapsed_ms + ms;
        loop {
            let next = self.ledger.borrow().next_due(target);
            let Some((id, due)) = next else { break };
            self.ledger.borrow_mut().fire(id, due);
            self.clock.on_timer(id);
        }
        self.ledger.borrow_mut().elapsed_ms = target;
    }

    /// Deliver key presses through the global stream.
    pub(crate) fn press(&mut self, keys: &[Key]) {
        for &key in keys {
            if self.ledger.borrow().live_listeners() > 0 {
                self.clock.on_key(key);
            }
        }
    }
}
