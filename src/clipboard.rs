use anyhow::{Context, Result, anyhow};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Copy text to the system clipboard.
///
/// Tries arboard first and falls back to the platform's clipboard command
/// when it is unavailable (common over SSH or on headless setups). On Linux,
/// arboard contents persist only while the application is running.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    debug!("Copying {} bytes to clipboard", text.len());

    match copy_with_arboard(text) {
        Ok(()) => return Ok(()),
        Err(err) => debug!("arboard unavailable ({err:#}), trying platform command"),
    }

    copy_with_platform_command(text)
}

fn copy_with_arboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("Failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy text to clipboard")?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_with_platform_command(text: &str) -> Result<()> {
    let wayland = std::env::var("WAYLAND_DISPLAY").is_ok()
        || std::env::var("XDG_SESSION_TYPE").is_ok_and(|s| s == "wayland");

    if wayland {
        pipe_to_command(Command::new("wl-copy"), text)
    } else {
        let mut command = Command::new("xclip");
        command.args(["-selection", "clipboard"]);
        pipe_to_command(command, text)
    }
}

#[cfg(target_os = "macos")]
fn copy_with_platform_command(text: &str) -> Result<()> {
    pipe_to_command(Command::new("pbcopy"), text)
}

#[cfg(target_os = "windows")]
fn copy_with_platform_command(text: &str) -> Result<()> {
    pipe_to_command(Command::new("clip"), text)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn copy_with_platform_command(_text: &str) -> Result<()> {
    Err(anyhow!("Clipboard not supported on this platform"))
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
fn pipe_to_command(mut command: Command, text: &str) -> Result<()> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!("Copying via {program}");

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {program}"))?;
    }

    let output = child
        .wait_with_output()
        .with_context(|| format!("Failed to wait for {program}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("{program} failed: {}", stderr.trim()));
    }

    Ok(())
}
