use clap::Parser;
use color_eyre::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::AppConfig;
use crate::theme::Theme;

mod app;
mod cli;
mod config;
mod mvi;
mod screen;
mod theme;
mod tui;
mod ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting lastbutton");

    let args = cli::Args::parse();

    let mut config = config::load(args.config.as_deref())?;
    apply_cli_args(&mut config, &args);
    let theme = resolve_theme(&config);

    let mut app = App::new(&config, theme);
    app.run().await?;

    info!("Exiting lastbutton");
    Ok(())
}

fn apply_cli_args(config: &mut AppConfig, args: &cli::Args) {
    if let Some(theme) = &args.theme {
        config.theme.name.clone_from(theme);
    }
    if let Some(tick_rate) = args.tick_rate {
        config.terminal.tick_rate = tick_rate;
    }
    if let Some(frame_rate) = args.frame_rate {
        config.terminal.frame_rate = frame_rate;
    }
}

fn resolve_theme(config: &AppConfig) -> Theme {
    theme::theme_from_name(&config.theme.name).unwrap_or_else(|| {
        warn!(name = %config.theme.name, "unknown theme, using default");
        Theme::default()
    })
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("lastbutton").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "lastbutton.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let mut config = AppConfig::default();
        let args = cli::Args {
            config: None::<PathBuf>,
            theme: Some("Catppuccin Frappé".into()),
            tick_rate: None,
            frame_rate: Some(60.0),
        };
        apply_cli_args(&mut config, &args);
        assert_eq!(config.theme.name, "Catppuccin Frappé");
        assert_eq!(config.terminal.frame_rate, 60.0);
        assert_eq!(config.terminal.tick_rate, 10.0);
        assert_eq!(resolve_theme(&config), Theme::catppuccin_frappe());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let mut config = AppConfig::default();
        config.theme.name = "Nope".into();
        assert_eq!(resolve_theme(&config), Theme::default());
    }
}
