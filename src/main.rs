use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use linefmt::app::AppState;
use linefmt::cli::{Cli, Commands};
use linefmt::clipboard::copy_to_clipboard;
use linefmt::config::Config;
use linefmt::format::{ArrayFormat, convert_named};
use linefmt::keybindings::KeybindingCache;
use linefmt::ui;
use linefmt::ui::theme::Theme;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Convert { text, format, copy }) => {
            init_tracing();
            handle_convert(text, &format, copy)?;
        }
        Some(Commands::Formats) => {
            handle_formats();
        }
        None => {
            // No command - launch TUI
            let theme = Theme::from_config(&config);
            let keybindings = KeybindingCache::from_config(&config.keybindings);
            let state = AppState::new(config.default_format, theme, keybindings);

            ui::run_tui(state)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn handle_convert(text: Option<String>, format: &str, copy: bool) -> Result<()> {
    let input = match text {
        Some(text) => text,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    if format.parse::<ArrayFormat>().is_err() {
        tracing::warn!("Unknown format '{}', emitting an empty array", format);
    }
    let output = convert_named(&input, format);

    if copy {
        copy_to_clipboard(&output)?;
        println!("✓ Copied to clipboard");
    } else {
        println!("{output}");
    }

    Ok(())
}

fn handle_formats() {
    for format in ArrayFormat::ALL {
        println!("{:<10} {}", format.name(), format.label());
    }
}
