//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.
//! Page feedback goes to stderr so piped output stays clean.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use lifeline_core::{Feedback, FeedbackKind};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Whether color output should be enabled for a stream.
pub fn should_color(mode: &ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the normalized records via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single item in the chosen format.
///
/// Table rendering uses `detail_fn`, since single-item views are
/// key/value listings rather than rows.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Aligned `key: value` lines; empty values are skipped.
pub fn detail_lines(pairs: &[(&str, &str)]) -> String {
    let present: Vec<_> = pairs.iter().filter(|(_, v)| !v.is_empty()).collect();
    let width = present.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    present
        .iter()
        .map(|(k, v)| format!("{k:<width$}  {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print a page's feedback message to stderr.
///
/// Success messages respect `--quiet`; errors are returned to the caller
/// and reported by `main`, so they are not echoed here.
pub fn print_feedback(feedback: Option<&Feedback>, global: &GlobalOpts) {
    let Some(feedback) = feedback else {
        return;
    };
    if global.quiet || feedback.kind == FeedbackKind::Error {
        return;
    }
    let mut stderr = io::stderr().lock();
    if should_color(&global.color, io::stderr().is_terminal()) {
        let _ = writeln!(stderr, "{} {}", "✓".green(), feedback.message.green());
    } else {
        let _ = writeln!(stderr, "✓ {}", feedback.message);
    }
}

/// Dimmed hint on stderr (e.g. "No videos found").
pub fn print_hint(message: &str, global: &GlobalOpts) {
    if global.quiet {
        return;
    }
    let mut stderr = io::stderr().lock();
    if should_color(&global.color, io::stderr().is_terminal()) {
        let _ = writeln!(stderr, "{}", message.dimmed());
    } else {
        let _ = writeln!(stderr, "{message}");
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    if compact {
        serde_json::to_string(data).expect("serialization should not fail")
    } else {
        serde_json::to_string_pretty(data).expect("serialization should not fail")
    }
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
