/*!
 * Clipboard support for treescribe
 *
 * Copies text to the system clipboard by piping it into whichever
 * clipboard command is available on this machine.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("no suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Available clipboard providers
#[derive(Debug, Clone, Copy)]
enum Provider {
    Tmux,
    Wayland,
    Xsel,
    Xclip,
    MacOs,
    Wsl,
    Termux,
}

impl Provider {
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::Wayland => ("wl-copy", &[]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::MacOs => ("pbcopy", &[]),
            Self::Wsl => ("clip.exe", &[]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }
}

/// Copy text to the system clipboard, using the first available mechanism
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = detect_provider().ok_or(ClipboardError::NoClipboardFound)?;
    let (cmd, args) = provider.command();
    pipe_to_command(cmd, args, text)
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Ok(paths) = env::var("PATH") {
        for path in paths.split(':') {
            if Path::new(path).join(command).exists() {
                return true;
            }
        }
    }

    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Pick the first clipboard provider that is usable on this system.
/// A running tmux session takes precedence over the platform clipboards.
fn detect_provider() -> Option<Provider> {
    if command_exists("tmux") && in_tmux_session() {
        return Some(Provider::Tmux);
    }

    let candidates: &[Provider] = if cfg!(target_os = "macos") {
        &[Provider::MacOs]
    } else if cfg!(target_os = "windows") {
        &[Provider::Wsl]
    } else if cfg!(target_os = "android") {
        &[Provider::Termux]
    } else if env::var("WSL_DISTRO_NAME").is_ok() {
        &[Provider::Wsl]
    } else {
        &[Provider::Wayland, Provider::Xsel, Provider::Xclip]
    };

    candidates
        .iter()
        .copied()
        .find(|provider| command_exists(provider.command().0))
}

fn in_tmux_session() -> bool {
    if env::var("TMUX").is_ok() {
        return true;
    }

    Command::new("tmux")
        .args(["list-buffers"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Spawn the clipboard command and write the text to its stdin
fn pipe_to_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("failed to spawn {cmd}")))?;

    let stdin = child
        .stdin
        .as_mut()
        .ok_or_else(|| ClipboardError::CommandFailed(format!("failed to open stdin for {cmd}")))?;

    stdin
        .write_all(text.as_bytes())
        .map_err(|_| ClipboardError::CommandFailed(format!("failed to write to {cmd}")))?;

    let status = child
        .wait()
        .map_err(|_| ClipboardError::CommandFailed(format!("failed to wait for {cmd}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{cmd} exited with status: {status}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("ls"));
        assert!(command_exists("echo"));
        assert!(!command_exists("nonexistentcommandxyz"));
    }
}
