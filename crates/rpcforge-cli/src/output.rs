//! Output management and formatting.

use std::{
    io::{self, IsTerminal},
    time::Duration,
};

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use rpcforge_core::application::{ArtifactOutcome, RunReport};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `[output].format`; `auto` picks human on
    /// a terminal and plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON on stdout. Printed even in quiet mode so pipes always
    /// get a document.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
            message: format!("failed to serialise output: {e}"),
            source: Some(Box::new(e)),
        })?;
        self.term.write_line(&text)?;
        Ok(())
    }

    /// Print a run report in the resolved format.
    pub fn report(&self, report: &RunReport) -> CliResult<()> {
        match self.resolved_format {
            OutputFormat::Json => self.json(report),
            _ if self.quiet => Ok(()),
            _ => {
                let text = if self.no_color {
                    render_report_plain(report)
                } else {
                    render_report_human(report)
                };
                self.term.write_str(&text)?;
                Ok(())
            }
        }
    }

    /// A spinner on stderr, only for interactive human output.
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.quiet || self.resolved_format != OutputFormat::Human || !io::stderr().is_terminal() {
            return None;
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_owned());
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Messages are dropped in quiet mode and when stdout carries JSON.
    fn silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── Report rendering ──────────────────────────────────────────────────────────

fn summary_line(report: &RunReport) -> String {
    format!(
        "{} created, {} patched, {} skipped, {} failed",
        report.created(),
        report.patched(),
        report.skipped(),
        report.failed()
    )
}

fn heading(report: &RunReport) -> String {
    let mode = if report.dry_run { " (dry run)" } else { "" };
    let interface = if report.interface_matched {
        format!("{} (existing)", report.interface_name)
    } else {
        format!("{} (new)", report.interface_name)
    };
    format!("{}{mode}\n  interface: {interface}", report.spec)
}

/// One artifact per line, no colours. Stable for scripts and tests.
pub fn render_report_plain(report: &RunReport) -> String {
    let mut out = heading(report);
    out.push('\n');
    for artifact in &report.artifacts {
        out.push_str(&format!(
            "  {:<8} {:<21} {}",
            artifact.outcome.label(),
            artifact.kind.as_str(),
            artifact.path.display()
        ));
        if let Some(reason) = artifact.outcome.reason() {
            out.push_str(&format!(" ({reason})"));
        }
        out.push('\n');
    }
    out.push_str(&summary_line(report));
    out.push('\n');
    out
}

fn render_report_human(report: &RunReport) -> String {
    let mut out = heading(report).cyan().bold().to_string();
    out.push('\n');
    for artifact in &report.artifacts {
        let label = format!("{:<8}", artifact.outcome.label());
        let label = match artifact.outcome {
            ArtifactOutcome::Created => label.green().to_string(),
            ArtifactOutcome::Patched => label.blue().to_string(),
            ArtifactOutcome::Skipped(_) => label.dimmed().to_string(),
            ArtifactOutcome::Failed(_) => label.red().bold().to_string(),
        };
        out.push_str(&format!(
            "  {label} {:<21} {}",
            artifact.kind.as_str(),
            artifact.path.display()
        ));
        if let Some(reason) = artifact.outcome.reason() {
            out.push_str(&format!(" {}", format!("({reason})").dimmed()));
        }
        out.push('\n');
    }
    out.push_str(&summary_line(report).bold().to_string());
    out.push('\n');
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────
