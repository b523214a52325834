//! Console sink and CSV rendering.
//!
//! `ConsoleSink` implements the core `Sink` trait over stdout with
//! owo-colors styling; `render_csv` turns the named-link table into the
//! final CSV text. Rendering is separated from printing so tests can check
//! the CSV without capturing stdout.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;

use nmslink_core::{NamedLink, Sink};

use crate::error::CliError;

const RULE_WIDTH: usize = 60;

/// Sink writing styled lines to stdout.
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    pub fn stdout() -> Self {
        Self {
            color: io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
        }
    }

    fn print(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{text}");
    }
}

impl Sink for ConsoleSink {
    fn rule(&mut self, title: &str) {
        let dashes = RULE_WIDTH.saturating_sub(title.len() + 2);
        let left = "─".repeat(dashes / 2);
        let right = "─".repeat(dashes - dashes / 2);
        let text = format!("{left} {title} {right}");
        if self.color {
            self.print(&text.bold().to_string());
        } else {
            self.print(&text);
        }
    }

    fn line(&mut self, text: &str) {
        self.print(text);
    }

    fn success(&mut self, text: &str) {
        if self.color {
            self.print(&text.green().to_string());
        } else {
            self.print(text);
        }
    }
}

// ── CSV rendering ────────────────────────────────────────────────────

/// Render the named-link table as CSV with a leading row-index column.
///
/// Unresolved endpoint fields render as empty cells. The returned string
/// ends with a newline after the last record.
pub fn render_csv(links: &[NamedLink]) -> Result<String, CliError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "",
        "local_hostname",
        "local_ifname",
        "remote_hostname",
        "remote_ifname",
        "protocol",
    ])?;

    for (index, link) in links.iter().enumerate() {
        wtr.write_record([
            index.to_string().as_str(),
            link.local_hostname.as_deref().unwrap_or(""),
            link.local_ifname.as_deref().unwrap_or(""),
            link.remote_hostname.as_deref().unwrap_or(""),
            link.remote_ifname.as_deref().unwrap_or(""),
            link.protocol.as_str(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(csv::IntoInnerError::into_error)?;
    String::from_utf8(bytes)
        .map_err(|e| CliError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
