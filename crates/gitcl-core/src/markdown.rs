//! Markdown rendering of release buckets.
//!
//! Pure functions: every input, including the rendering options, is passed
//! explicitly.

use std::fmt::Write;

use crate::{CategorizedEntries, ReleaseBucket};

/// Options controlling bucket rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Wrap release labels in brackets so they resolve to link references.
    pub link_refs: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self { link_refs: true }
    }
}

/// Capitalizes each word: first letter upper case, the rest lower case.
#[must_use]
pub fn capitalize(category: &str) -> String {
    category
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the `## ...` heading of a bucket.
#[must_use]
pub fn render_heading(bucket: &ReleaseBucket, options: MarkdownOptions) -> String {
    let label = if options.link_refs {
        format!("[{}]", bucket.label)
    } else {
        bucket.label.to_string()
    };
    let date = bucket
        .date
        .map_or_else(|| "now".to_string(), |d| d.format("%Y-%m-%d").to_string());
    format!("## {label} - {date}")
}

/// Renders one `### Category` section per category, in category order.
#[must_use]
pub fn render_entries(entries: &CategorizedEntries) -> String {
    let mut output = String::new();
    for (category, messages) in entries.iter() {
        _ = writeln!(output, "\n### {}", capitalize(category));
        for message in messages {
            _ = writeln!(output, "- {message}");
        }
    }
    output
}

/// Renders a full bucket section.
#[must_use]
pub fn render_bucket(bucket: &ReleaseBucket, options: MarkdownOptions) -> String {
    let mut output = render_heading(bucket, options);
    output.push('\n');
    output.push_str(&render_entries(&bucket.entries));
    output
}

/// Renders a link reference definition line.
#[must_use]
pub fn render_link(label: &str, url: &str) -> String {
    format!("[{label}]: {url}")
}

const ATTRIBUTION: &str = "Generated by [Git Changelog](https://github.com/uptech/git-cl), \
an open source project brought to you by [UpTech Works, LLC](https://upte.ch). \
A consultancy that partners with companies to help **build**, **launch**, and **refine** \
their products.";

/// Renders the document preamble, optionally closed by the attribution paragraph.
#[must_use]
pub fn render_preamble(title: &str, attribution: bool) -> String {
    let mut output = String::new();
    _ = writeln!(output, "# {title}\n");
    _ = writeln!(
        output,
        "All notable changes to this project will be documented in this file.\n"
    );
    _ = writeln!(
        output,
        "The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/).\n"
    );
    if attribution {
        _ = writeln!(output, "{ATTRIBUTION}\n");
    }
    output
}
