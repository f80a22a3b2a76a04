use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("nothing to copy yet")]
    Empty,
    #[error("no clipboard command available (tried {tried})")]
    Unavailable { tried: String },
}

const MACOS_TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];
const WINDOWS_TOOLS: &[(&str, &[&str])] = &[("clip", &[])];
const UNIX_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

fn platform_tools() -> &'static [(&'static str, &'static [&'static str])] {
    if cfg!(target_os = "macos") {
        MACOS_TOOLS
    } else if cfg!(target_os = "windows") {
        WINDOWS_TOOLS
    } else {
        UNIX_TOOLS
    }
}

/// Copies `text` with the first platform copy tool that succeeds.
pub fn copy_text(text: &str) -> Result<&'static str, ClipboardError> {
    if text.trim().is_empty() {
        return Err(ClipboardError::Empty);
    }
    let tools = platform_tools();
    for &(cmd, args) in tools {
        match pipe_into(cmd, args, text) {
            Ok(()) => return Ok(cmd),
            Err(err) => debug!(tool = cmd, error = %err, "clipboard tool failed"),
        }
    }
    Err(ClipboardError::Unavailable {
        tried: tools
            .iter()
            .map(|(cmd, _)| *cmd)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Copies and reports the result; a failed copy is only a warning.
pub fn copy_with_notice(text: &str) {
    match copy_text(text) {
        Ok(tool) => println!("Copied to clipboard ({tool})."),
        Err(err) => warn!(error = %err, "failed to copy draft"),
    }
}

fn pipe_into(cmd: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("'{cmd}' exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_blank_text() {
        assert!(matches!(copy_text("  \n"), Err(ClipboardError::Empty)));
    }

    #[test]
    fn every_platform_has_a_tool() {
        assert!(!platform_tools().is_empty());
    }
}
