use dioxus::desktop::{Config, WindowBuilder};
use jarvis::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jarvis=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Jarvis v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::new().with_window(WindowBuilder::new().with_title("TechNova"));
    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}
