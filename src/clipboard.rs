// src/clipboard.rs
//
// Clipboard sink. The system implementation pipes UTF-8 text into the first
// platform copy tool that exists. A failed copy is turned into a notice for the
// user; it never becomes an error for the caller.

use crate::labels::Labels;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool found (tried {tried})")]
    Unavailable { tried: String },

    #[error("failed to run `{program}`: {source}")]
    Io {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {status}")]
    Failed {
        program: &'static str,
        status: ExitStatus,
    },
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/* ============================ System clipboard =========================== */

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(windows)]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", windows)))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        for &(program, args) in CANDIDATES {
            let spawned = Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            let mut child = match spawned {
                Ok(child) => child,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(program, "clipboard tool not found");
                    continue;
                }
                Err(source) => return Err(ClipboardError::Io { program, source }),
            };

            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(text.as_bytes())
                    .map_err(|source| ClipboardError::Io { program, source })?;
            }
            let status = child
                .wait()
                .map_err(|source| ClipboardError::Io { program, source })?;
            if !status.success() {
                return Err(ClipboardError::Failed { program, status });
            }
            return Ok(());
        }

        let tried = CANDIDATES
            .iter()
            .map(|(program, _)| *program)
            .collect::<Vec<_>>()
            .join(", ");
        Err(ClipboardError::Unavailable { tried })
    }
}

/* ================================= Notice ================================ */

/// Outcome of a copy, shown transiently to the user.
#[derive(Debug)]
pub enum Notice {
    Copied,
    Failed(ClipboardError),
}

impl Notice {
    pub fn is_copied(&self) -> bool {
        matches!(self, Notice::Copied)
    }

    pub fn message(&self, labels: &Labels) -> String {
        match self {
            Notice::Copied => labels.copy_success.to_string(),
            Notice::Failed(err) => format!("{}: {err}", labels.copy_failure),
        }
    }
}

/// Copy `text` verbatim; failures are logged and reported, not propagated.
pub fn copy(clipboard: &mut impl Clipboard, text: &str) -> Notice {
    match clipboard.write_text(text) {
        Ok(()) => Notice::Copied,
        Err(err) => {
            tracing::warn!(error = %err, "clipboard write failed");
            Notice::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{EN, ZH};

    #[derive(Default)]
    struct Recording(Vec<String>);

    impl Clipboard for Recording {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    struct Denied;

    impl Clipboard for Denied {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Io {
                program: "test",
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    #[test]
    fn copies_verbatim() {
        let mut clip = Recording::default();
        let notice = copy(&mut clip, "<p>中</p>\n<p>b</p>");
        assert!(notice.is_copied());
        assert_eq!(notice.message(&EN), "Copied successfully!");
        assert_eq!(clip.0, vec!["<p>中</p>\n<p>b</p>".to_string()]);
    }

    #[test]
    fn failure_becomes_notice() {
        let notice = copy(&mut Denied, "x");
        assert!(!notice.is_copied());
        assert_eq!(notice.message(&ZH), "复制失败: failed to run `test`: denied");
    }

    #[test]
    fn unavailable_lists_tools() {
        let err = ClipboardError::Unavailable {
            tried: "a, b".into(),
        };
        assert_eq!(err.to_string(), "no clipboard tool found (tried a, b)");
    }
}
