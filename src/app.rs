use crate::clock::platform::TimerId;
use crate::clock::secret::Key;
use crate::clock::DigitalClock;
use crate::config::{self, Config};
use crate::host::IcedPlatform;
use crate::ipc;
use crate::surface::*;
use crate::theme::ClockColors;

use iced::{Color, Element, Subscription, Task};
use iced_layershell::build_pattern::daemon;
use iced_layershell::settings::{LayerShellSettings, StartMode};
use iced_layershell::to_layer_message;

pub(crate) type IcedId = iced_layershell::reexport::IcedId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostMode {
    Hidden,
    Visible,
    Focused,
}

/// The page that embeds the clock. Owns at most one mounted widget.
pub(crate) struct Host {
    pub(crate) mode: HostMode,
    pub(crate) surface_id: Option<IcedId>,
    pub(crate) clock: Option<DigitalClock<IcedPlatform>>,
    pub(crate) colors: ClockColors,
    config: Config,
    target_output: Option<String>,
}

#[to_layer_message(multi)]
#[derive(Debug, Clone)]
pub(crate) enum Message {
    ToggleVisibility,
    ToggleFocus,
    Remount,
    Timer(TimerId),
    KeyPressed(Key),
    HoverStart,
    HoverEnd,
    Activate,
}

pub(crate) fn run() -> Result<(), iced_layershell::Error> {
    log::info!(
        "v{} ({}) starting in background mode",
        env!("NEON_CLOCK_VERSION"),
        env!("NEON_CLOCK_COMMIT")
    );

    let settings = LayerShellSettings {
        start_mode: StartMode::Background,
        ..Default::default()
    };

    daemon(Host::new, Host::namespace, Host::update, Host::view)
        .style(Host::style)
        .subscription(Host::subscription)
        .layer_settings(settings)
        .run()
}

impl Host {
    fn new() -> (Self, Task<Message>) {
        let config = config::load();
        let mut host = Self::detached(config);
        if let Some(ref name) = host.target_output {
            log::info!("target screen: {name}");
        }
        let task = host.switch_to(HostMode::Visible);
        if let Some(clock) = &host.clock {
            log::info!("booted at {}", clock.reading());
        }
        (host, task)
    }

    /// A hidden host with no surface and no widget.
    pub(crate) fn detached(config: Config) -> Self {
        let target_output = config.screen();
        Self {
            mode: HostMode::Hidden,
            surface_id: None,
            clock: None,
            colors: ClockColors::neon(),
            config,
            target_output,
        }
    }

    fn namespace() -> String {
        String::from("neon-clock")
    }

    fn mount_clock(&mut self) {
        self.clock = Some(DigitalClock::mount(IcedPlatform::default(), self.config.link()));
    }

    /// Widget lifecycle for a mode change: leaving `Hidden` mounts a fresh
    /// clock, entering it drops the current one. Visible and Focused share
    /// the same widget.
    pub(crate) fn enter_mode(&mut self, next: HostMode) {
        let prev = self.mode;
        if prev == next {
            return;
        }
        match (prev, next) {
            (HostMode::Hidden, _) => self.mount_clock(),
            (_, HostMode::Hidden) => self.clock = None,
            _ => {}
        }
        self.mode = next;
        log::info!("{prev:?} -> {next:?}");
    }

    /// Replace the mounted widget. Does nothing while hidden.
    pub(crate) fn remount(&mut self) {
        if self.mode == HostMode::Hidden {
            return;
        }
        // Drop the old widget before the new one acquires anything.
        self.clock = None;
        self.mount_clock();
        log::info!("clock remounted");
    }

    /// Enter `next` and bring the layer surface in line with it.
    fn switch_to(&mut self, next: HostMode) -> Task<Message> {
        let prev = self.mode;
        self.enter_mode(next);
        let output = self.target_output.clone();
        match (prev, next) {
            _ if prev == next => Task::none(),
            (_, HostMode::Hidden) => self.close_surface_task(),
            (HostMode::Hidden, HostMode::Visible) => self.open_surface(visible_settings(output.as_deref())),
            (HostMode::Hidden, HostMode::Focused) => self.open_surface(focused_settings(output.as_deref())),
            (_, HostMode::Visible) => self.reopen(visible_settings(output.as_deref())),
            (_, HostMode::Focused) => self.reopen(focused_settings(output.as_deref())),
        }
    }

    fn open_surface(&mut self, settings: iced_layershell::reexport::NewLayerShellSettings) -> Task<Message> {
        let (id, task) = Message::layershell_open(settings);
        log::debug!("surface {id} opened");
        self.surface_id = Some(id);
        task
    }

    /// Swap the surface for one with new settings, keeping the widget.
    fn reopen(&mut self, settings: iced_layershell::reexport::NewLayerShellSettings) -> Task<Message> {
        let remove_task = self.close_surface_task();
        let open_task = self.open_surface(settings);
        Task::batch([remove_task, open_task])
    }

    fn close_surface_task(&mut self) -> Task<Message> {
        if let Some(id) = self.surface_id.take() {
            Task::done(Message::RemoveWindow(id))
        } else {
            Task::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleVisibility => {
                let next = match self.mode {
                    HostMode::Hidden => HostMode::Visible,
                    HostMode::Visible | HostMode::Focused => HostMode::Hidden,
                };
                self.switch_to(next)
            }
            Message::ToggleFocus => {
                let next = match self.mode {
                    HostMode::Hidden | HostMode::Visible => HostMode::Focused,
                    HostMode::Focused => HostMode::Visible,
                };
                self.switch_to(next)
            }
            Message::Remount => {
                self.remount();
                Task::none()
            }
            Message::Timer(id) => {
                if let Some(clock) = &mut self.clock {
                    clock.on_timer(id);
                }
                Task::none()
            }
            Message::KeyPressed(key) => {
                if let Some(clock) = &mut self.clock {
                    clock.on_key(key);
                }
                Task::none()
            }
            Message::HoverStart => {
                if let Some(clock) = &mut self.clock {
                    clock.hover_start();
                }
                Task::none()
            }
            Message::HoverEnd => {
                if let Some(clock) = &mut self.clock {
                    clock.hover_end();
                }
                Task::none()
            }
            Message::Activate => {
                if let Some(clock) = &self.clock {
                    open_link(clock.link().url.clone());
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn view(&self, _window_id: IcedId) -> Element<'_, Message> {
        self.view_clock()
    }

    fn subscription(state: &Self) -> Subscription<Message> {
        let mut subs = vec![Subscription::run(ipc::socket_listener)];
        if let Some(clock) = &state.clock {
            subs.extend(clock.platform().subscriptions());
        }
        Subscription::batch(subs)
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: self.colors.accent,
        }
    }
}

/// Open `url` in the user's browser. Runs off the UI thread; failures are
/// only logged.
fn open_link(url: String) {
    std::thread::spawn(move || {
        match std::process::Command::new("xdg-open").arg(&url).status() {
            Ok(s) if s.success() => log::info!("opened {url}"),
            Ok(s) => log::warn!("xdg-open exited: {s}"),
            Err(e) => log::warn!("xdg-open failed: {e}"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::secret::SECRET_CODE;

    fn activate(host: &mut Host) {
        let clock = host.clock.as_mut().unwrap();
        for &key in SECRET_CODE.iter() {
            clock.on_key(key);
        }
        assert!(clock.is_activated());
    }

    fn tick_timer(host: &Host) -> TimerId {
        *host.clock.as_ref().unwrap().platform().timer_ids().first().unwrap()
    }

    #[test]
    fn detached_host_is_hidden_and_empty() {
        let host = Host::detached(Config::default());
        assert_eq!(host.mode, HostMode::Hidden);
        assert!(host.clock.is_none());
        assert!(host.surface_id.is_none());
    }

    #[test]
    fn showing_mounts_a_clock() {
        let mut host = Host::detached(Config::default());
        host.enter_mode(HostMode::Visible);
        assert_eq!(host.mode, HostMode::Visible);
        let clock = host.clock.as_ref().unwrap();
        assert!(!clock.is_activated());
        assert_eq!(clock.platform().timer_ids().len(), 1);
    }

    #[test]
    fn hide_then_show_yields_fresh_widget() {
        let mut host = Host::detached(Config::default());
        host.enter_mode(HostMode::Visible);
        activate(&mut host);
        let old_tick = tick_timer(&host);

        host.enter_mode(HostMode::Hidden);
        assert!(host.clock.is_none());

        host.enter_mode(HostMode::Visible);
        assert!(!host.clock.as_ref().unwrap().is_activated());
        assert_ne!(tick_timer(&host), old_tick);
    }

    #[test]
    fn focus_toggle_keeps_the_same_widget() {
        let mut host = Host::detached(Config::default());
        host.enter_mode(HostMode::Visible);
        activate(&mut host);
        let tick = tick_timer(&host);

        host.enter_mode(HostMode::Focused);
        assert!(host.clock.as_ref().unwrap().is_activated());
        assert_eq!(tick_timer(&host), tick);

        host.enter_mode(HostMode::Visible);
        assert!(host.clock.as_ref().unwrap().is_activated());
        assert_eq!(tick_timer(&host), tick);
    }

    #[test]
    fn remount_replaces_widget() {
        let mut host = Host::detached(Config::default());
        host.enter_mode(HostMode::Focused);
        activate(&mut host);
        let old_tick = tick_timer(&host);

        host.remount();
        assert_eq!(host.mode, HostMode::Focused);
        let clock = host.clock.as_ref().unwrap();
        assert!(!clock.is_activated());
        assert_eq!(clock.platform().timer_ids().len(), 1);
        assert_ne!(tick_timer(&host), old_tick);
    }

    #[test]
    fn remount_while_hidden_does_nothing() {
        let mut host = Host::detached(Config::default());
        host.remount();
        assert_eq!(host.mode, HostMode::Hidden);
        assert!(host.clock.is_none());
    }
}
