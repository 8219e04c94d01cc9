//! Output formatting for analysis results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::analyzer::{Analyzer, Derivation};
use crate::chars::{render_listing, CharEntry};
use crate::mode::Dialect;
use crate::tree::Node;

/// Result of analyzing one input.
#[derive(Debug, Clone, Serialize)]
pub struct InputReport {
    /// File path, `<stdin>`, or `<text>`.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    /// True when the input was empty.
    pub empty: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
    /// Rendered tree text, or the empty-input message.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<CharEntry>>,
    /// Rendered character listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InputReport {
    /// Run the structural (and optionally the character) analysis of `text`
    /// on `analyzer`.
    pub fn build(analyzer: &mut Analyzer, source: &str, text: &str, with_chars: bool) -> Self {
        let mut report = InputReport {
            source: source.to_string(),
            dialect: None,
            empty: text.is_empty(),
            nodes: Vec::new(),
            tree: String::new(),
            characters: None,
            listing: None,
            error: None,
        };

        match analyzer.analyze(text) {
            Ok(Some(derivation)) => {
                report.tree = analyzer.render(&derivation);
                let Derivation { dialect, nodes } = derivation;
                report.dialect = Some(dialect);
                report.nodes = nodes;
            }
            Ok(None) => {
                report.tree = analyzer.labels().empty_source.to_string();
            }
            Err(e) => {
                tracing::warn!(source, error = %e, "analysis failed");
                report.error = Some(e.to_string());
            }
        }

        if with_chars {
            if text.is_empty() {
                report.listing = Some(analyzer.labels().empty_source.to_string());
            } else {
                let entries = analyzer.characters(text);
                report.listing = Some(render_listing(&entries, analyzer.labels()));
                report.characters = Some(entries);
            }
        }

        report
    }

    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

// =============================================================================
// JSON Format
// =============================================================================

/// Top-level JSON document.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub inputs: &'a [InputReport],
}

/// Write results in JSON format.
pub fn write_json(reports: &[InputReport]) -> anyhow::Result<()> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        inputs: reports,
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty format with colors.
pub fn write_pretty(reports: &[InputReport], indent: &str) {
    let show_headers = reports.len() > 1;

    for (i, report) in reports.iter().enumerate() {
        if show_headers {
            if i > 0 {
                println!();
            }
            println!("{}", format!("==> {} <==", report.source).blue());
        }

        if let Some(error) = &report.error {
            println!("{} {}", "error:".red().bold(), error);
        } else if report.empty || report.nodes.is_empty() {
            println!("{}", report.tree.yellow());
        } else {
            write_tree(&report.tree, &report.nodes, indent);
        }

        if let Some(listing) = &report.listing {
            println!();
            print!("{}", listing);
        }
    }
}

fn write_tree(rendered: &str, nodes: &[Node], indent: &str) {
    // The title is the first rendered line; nodes follow one per line.
    if let Some(title) = rendered.lines().next() {
        println!("{}", title.bold());
    }

    for node in nodes {
        print!("{}", indent.repeat(node.depth));
        println!("{}", colorize_label(&node.label));
    }
}

fn colorize_label(label: &str) -> String {
    if label.starts_with("Error") {
        return label.red().to_string();
    }
    match label.split_once(": ") {
        Some((key, value)) => format!("{} {}", format!("{}:", key).dimmed(), value),
        None => label.bold().to_string(),
    }
}
