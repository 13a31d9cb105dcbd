use crate::error::{Result, TidyError};
use std::io::Write;
use std::process::{Command, Stdio};

/// A clipboard helper program and its arguments.
type Tool = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const COPY_TOOLS: &[Tool] = &[("pbcopy", &[])];
#[cfg(target_os = "macos")]
const PASTE_TOOLS: &[Tool] = &[("pbpaste", &[])];

#[cfg(target_os = "linux")]
const COPY_TOOLS: &[Tool] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];
#[cfg(target_os = "linux")]
const PASTE_TOOLS: &[Tool] = &[
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
];

#[cfg(target_os = "windows")]
const COPY_TOOLS: &[Tool] = &[("clip", &[])];
#[cfg(target_os = "windows")]
const PASTE_TOOLS: &[Tool] = &[("powershell", &["-NoProfile", "-Command", "Get-Clipboard"])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const COPY_TOOLS: &[Tool] = &[];
#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const PASTE_TOOLS: &[Tool] = &[];

/// Copies text to the system clipboard by piping it into the first helper
/// that can be spawned:
/// - macOS: pbcopy
/// - Linux: wl-copy, xclip or xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_err = None;
    for (program, args) in COPY_TOOLS {
        let mut child = match Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                log::debug!("clipboard helper {} unavailable: {}", program, e);
                last_err = Some(e);
                continue;
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| {
                TidyError::Clipboard(format!("Failed to write to {}: {}", program, e))
            })?;
        }

        let status = child
            .wait()
            .map_err(|e| TidyError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;
        return if status.success() {
            Ok(())
        } else {
            Err(TidyError::Clipboard(format!("{} exited with error", program)))
        };
    }

    Err(unavailable("copy", last_err))
}

/// Reads the current clipboard text using the platform helper.
pub fn get_from_clipboard() -> Result<String> {
    let mut last_err = None;
    for (program, args) in PASTE_TOOLS {
        let output = match Command::new(program)
            .args(*args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                log::debug!("clipboard helper {} unavailable: {}", program, e);
                last_err = Some(e);
                continue;
            }
        };

        if !output.status.success() {
            return Err(TidyError::Clipboard(format!("{} exited with error", program)));
        }
        return String::from_utf8(output.stdout)
            .map(|text| strip_paste_newline(text, program))
            .map_err(|_| TidyError::Clipboard("Clipboard does not hold UTF-8 text".to_string()));
    }

    Err(unavailable("paste", last_err))
}

// PowerShell's Get-Clipboard always appends a line ending.
fn strip_paste_newline(mut text: String, program: &str) -> String {
    if program == "powershell" {
        if text.ends_with("\r\n") {
            text.truncate(text.len() - 2);
        } else if text.ends_with('\n') {
            text.pop();
        }
    }
    text
}

fn unavailable(action: &str, err: Option<std::io::Error>) -> TidyError {
    match err {
        Some(e) => TidyError::Clipboard(format!(
            "No clipboard helper could {} ({}). Install one of: {}",
            action,
            e,
            tool_names().join(", ")
        )),
        None => TidyError::Clipboard("Clipboard not supported on this platform".to_string()),
    }
}

fn tool_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for (program, _) in COPY_TOOLS.iter().chain(PASTE_TOOLS.iter()) {
        if !names.contains(program) {
            names.push(*program);
        }
    }
    names
}
