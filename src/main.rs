// src/main.rs
//
// paraforma — text/HTML to canonical <p> paragraphs
//
// Reads a document, normalizes it, and writes the pane for the chosen view.
//
// CLI flags:
//   --view <code|preview|editor> : pane to write (default: code)
//   --html                       : treat input as a pasted HTML clipboard payload
//   --no-html                    : treat input as typed text
//   --copy                       : also copy the normalized output to the clipboard
//   --stats                      : print the counters line to stderr
//   --lang <en|zh>               : chrome language (env PARAFORMA_LANG)
//   --no-escape                  : emit plain-text lines verbatim
// Default: HTML paste mode is enabled iff the input file extension is ".html" or ".htm".

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use paraforma::clipboard::{self, SystemClipboard};
use paraforma::render::{render_stats, render_view};
use paraforma::{Language, Options, PastePayload, Session, ViewMode};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Pane to write
    #[arg(long, value_enum, default_value_t = ViewMode::Code)]
    view: ViewMode,

    /// Treat the input as a pasted HTML clipboard payload
    #[arg(long, action = ArgAction::SetTrue)]
    html: bool,

    /// Treat the input as typed text
    #[arg(long = "no-html", action = ArgAction::SetTrue)]
    no_html: bool,

    /// Also copy the normalized output to the system clipboard
    #[arg(long, action = ArgAction::SetTrue)]
    copy: bool,

    /// Print character, paragraph and HTML-length counters to stderr
    #[arg(long, action = ArgAction::SetTrue)]
    stats: bool,

    /// Language of labels and placeholders
    #[arg(long, value_enum, env = "PARAFORMA_LANG", default_value_t = Language::En)]
    lang: Language,

    /// Do not HTML-escape plain-text lines
    #[arg(long = "no-escape", action = ArgAction::SetTrue)]
    no_escape: bool,

    /// Input file (default: stdin; "-" also reads stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("paraforma=warn")),
        )
        .init();

    let cli = Cli::parse();
    let input = cli.input.as_ref().filter(|p| p.as_os_str() != "-");

    let src = match input {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            buf
        }
    };
    let src = String::from_utf8_lossy(&src);

    // Default: HTML paste mode if input ends with ".html" or ".htm"
    let default_html = input.and_then(|p| p.extension()).map_or(false, |e| {
        let e = e.to_string_lossy();
        e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm")
    });

    // Precedence: explicit flags override default; --no-html wins if both are present.
    let use_html = if cli.no_html {
        false
    } else if cli.html {
        true
    } else {
        default_html
    };

    let mut session = Session::new(Options {
        escape_text: !cli.no_escape,
    });
    session.set_view(cli.view);
    session.set_language(cli.lang);

    let payload = if use_html {
        PastePayload::html(&*src)
    } else {
        PastePayload::text(&*src)
    };
    session.paste(&payload);
    tracing::debug!(html = use_html, bytes = session.document().as_str().len(), "document loaded");

    let mut pane = render_view(&session);
    if !pane.ends_with('\n') {
        pane.push('\n');
    }
    match &cli.output {
        Some(path) => fs::write(path, &pane).with_context(|| format!("writing {}", path.display()))?,
        None => io::stdout().write_all(pane.as_bytes()).context("writing stdout")?,
    }

    if cli.stats {
        eprintln!("{}", render_stats(&session));
    }

    if cli.copy {
        let notice = clipboard::copy(&mut SystemClipboard, &session.output());
        eprintln!("{}", notice.message(session.labels()));
    }

    Ok(())
}
