use dioxus::prelude::*;
use errorview_config::DisplayConfig;
use errorview_ui::ui::App;

fn main() {
    // Initialize logging
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("ErrorView"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("errorview starting up!");
    log::info!("Config path: {}", DisplayConfig::config_path().display());

    #[cfg(not(target_os = "android"))]
    {
        log::info!("About to launch Dioxus app for desktop");
        dioxus::LaunchBuilder::desktop()
            .with_cfg(make_window_config())
            .launch(app_root);
    }

    #[cfg(target_os = "android")]
    {
        log::info!("Launching Dioxus app for Android");
        dioxus::launch(app_root);
    }
}

/// Missing or unreadable config falls back to defaults so the app always opens.
fn load_display_config() -> DisplayConfig {
    match DisplayConfig::load() {
        Ok(Some(config)) => {
            log::info!("Loaded display config: {config:?}");
            config
        }
        Ok(None) => {
            log::info!("No config file found, using default display settings");
            DisplayConfig::default()
        }
        Err(e) => {
            log::error!("DisplayConfig::load() failed with error: {e}");
            eprintln!("Warning: {e}; using default display settings");
            DisplayConfig::default()
        }
    }
}

fn app_root() -> Element {
    let config = use_hook(load_display_config);

    rsx! {
        App { config }
    }
}

#[cfg(not(target_os = "android"))]
fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("errorview")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
