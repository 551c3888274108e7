mod app;
mod clock;
mod config;
mod host;
mod ipc;
mod surface;
mod theme;
mod views;

fn main() -> Result<(), iced_layershell::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();
    app::run()
}
