//! Report rendering and export.
//!
//! Plain text mirrors the key/value display of a single analysis. Markdown
//! adds the recommendations table and to-do checklist. CSV dumps the
//! extracted field set as a two-column spreadsheet, and JSON serializes the
//! whole report.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::result::{CheckStatus, SeoReport};

const NOT_FOUND: &str = "not found";

fn or_not_found(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_FOUND)
}

/// Render the report as plain key/value lines.
#[must_use]
pub fn render_text(report: &SeoReport) -> String {
    TextReport(report).to_string()
}

/// Render the report as Markdown with tables and a to-do checklist.
#[must_use]
pub fn render_markdown(report: &SeoReport) -> String {
    MarkdownReport(report).to_string()
}

struct TextReport<'a>(&'a SeoReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let data = &report.data;

        if let Some(url) = report.url.as_deref() {
            writeln!(f, "URL: {url}")?;
        }
        writeln!(f, "SEO Score: {} / 100", report.score.total)?;
        writeln!(f)?;
        writeln!(f, "Title: {}", or_not_found(data.title.as_deref()))?;
        writeln!(
            f,
            "Meta Description: {}",
            or_not_found(data.meta_description.as_deref())
        )?;
        writeln!(f, "H1: {}", or_not_found(data.h1.as_deref()))?;
        writeln!(f, "Word Count: {}", data.word_count)?;
        writeln!(
            f,
            "Images Missing ALT: {} of {}",
            data.images.missing_alt, data.images.total
        )?;
        writeln!(f, "Canonical: {}", or_not_found(data.canonical.as_deref()))?;
        writeln!(
            f,
            "Robots: {}",
            data.robots.content.as_deref().unwrap_or("not set")
        )?;
        let h = &data.headings;
        writeln!(
            f,
            "Headings: H1 {} / H2 {} / H3 {} / H4 {} / H5 {} / H6 {}",
            h.h1, h.h2, h.h3, h.h4, h.h5, h.h6
        )?;
        writeln!(
            f,
            "Links: {} internal, {} external, {} nofollow",
            data.links.internal, data.links.external, data.links.nofollow
        )?;

        if !data.keywords.is_empty() {
            let top: Vec<String> = data
                .keywords
                .iter()
                .map(|k| format!("{} ({}, {:.2}%)", k.word, k.count, k.density))
                .collect();
            writeln!(f, "Top Keywords: {}", top.join(", "))?;
        }

        if let Some(focus) = &data.focus_keyword {
            writeln!(
                f,
                "Focus Keyword: \"{}\" x{} ({:.2}%)",
                focus.keyword, focus.occurrences, focus.density
            )?;
        }

        let recommendations: Vec<_> = report.score.recommendations().collect();
        if !recommendations.is_empty() {
            writeln!(f)?;
            writeln!(f, "Recommendations:")?;
            for check in recommendations {
                if let Some(rec) = &check.recommendation {
                    writeln!(f, "  - {}: {rec}", check.id.label())?;
                }
            }
        }

        let broken: Vec<_> = report.broken_links().collect();
        if !report.link_checks.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "Broken Links: {} of {} checked",
                broken.len(),
                report.link_checks.len()
            )?;
            for link in broken {
                writeln!(
                    f,
                    "  - {} ({})",
                    link.url,
                    link_reason(link.status, link.error.as_deref())
                )?;
            }
        }

        for warning in &report.warnings {
            writeln!(f, "Warning: {warning}")?;
        }

        Ok(())
    }
}

struct MarkdownReport<'a>(&'a SeoReport);

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let data = &report.data;

        writeln!(f, "# SEO Report")?;
        if let Some(url) = report.url.as_deref() {
            writeln!(f)?;
            writeln!(f, "<{url}>")?;
        }
        writeln!(f)?;
        writeln!(f, "### {} / 100", report.score.total)?;
        writeln!(f)?;

        writeln!(f, "| Field | Value |")?;
        writeln!(f, "|---|---|")?;
        for (field, value) in field_rows(report) {
            writeln!(f, "| {field} | {} |", escape_cell(&value))?;
        }

        if !data.keywords.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Keywords")?;
            writeln!(f)?;
            writeln!(f, "| Keyword | Count | Density |")?;
            writeln!(f, "|---|---:|---:|")?;
            for k in &data.keywords {
                writeln!(
                    f,
                    "| {} | {} | {:.2}% |",
                    escape_cell(&k.word),
                    k.count,
                    k.density
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "## Checks")?;
        writeln!(f)?;
        writeln!(f, "| Check | Status | Points | Details | Recommendation |")?;
        writeln!(f, "|---|---|---:|---|---|")?;
        for check in &report.score.checks {
            let status = match check.status {
                CheckStatus::Pass => "✅ pass",
                CheckStatus::Partial => "⚠️ partial",
                CheckStatus::Fail => "❌ fail",
            };
            writeln!(
                f,
                "| {} | {status} | {}/{} | {} | {} |",
                check.id.label(),
                check.earned,
                check.max,
                escape_cell(&check.message),
                escape_cell(check.recommendation.as_deref().unwrap_or("")),
            )?;
        }

        let todo = report.todo_list();
        writeln!(f)?;
        writeln!(f, "## To-do")?;
        writeln!(f)?;
        if todo.is_empty() {
            writeln!(f, "Nothing to fix.")?;
        } else {
            for item in todo {
                writeln!(f, "- [ ] {item}")?;
            }
        }

        if !report.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Warnings")?;
            writeln!(f)?;
            for warning in &report.warnings {
                writeln!(f, "- {warning}")?;
            }
        }

        Ok(())
    }
}

/// Serialize the report as pretty-printed JSON.
pub fn to_json(report: &SeoReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the report as JSON to `path`.
pub fn export_json(path: &Path, report: &SeoReport) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write the extracted field set as `field,value` CSV rows.
pub fn write_csv<W: Write>(mut w: W, report: &SeoReport) -> io::Result<()> {
    write_row(&mut w, &["field", "value"])?;
    for (field, value) in field_rows(report) {
        write_row(&mut w, &[field, value.as_str()])?;
    }
    Ok(())
}

/// Write the CSV dump to `path`.
pub fn export_csv(path: &Path, report: &SeoReport) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

/// The extracted field set as label/value pairs, in display order.
#[must_use]
pub fn field_rows(report: &SeoReport) -> Vec<(&'static str, String)> {
    let data = &report.data;
    let opt = |v: Option<&str>| v.unwrap_or_default().to_string();

    let mut rows = vec![
        ("URL", opt(report.url.as_deref())),
        ("SEO Score", report.score.total.to_string()),
        ("Title", opt(data.title.as_deref())),
        ("Title Length", data.title_length().to_string()),
        ("Meta Description", opt(data.meta_description.as_deref())),
        ("Meta Description Length", data.description_length().to_string()),
        ("H1", opt(data.h1.as_deref())),
        ("H1 Count", data.headings.h1.to_string()),
        ("H2 Count", data.headings.h2.to_string()),
        ("H3 Count", data.headings.h3.to_string()),
        ("Word Count", data.word_count.to_string()),
        ("Images", data.images.total.to_string()),
        ("Images Missing ALT", data.images.missing_alt.to_string()),
        ("Canonical", opt(data.canonical.as_deref())),
        ("Robots", opt(data.robots.content.as_deref())),
        ("Indexable", data.robots.is_indexable().to_string()),
        ("Language", opt(data.language.as_deref())),
        ("Viewport", opt(data.viewport.as_deref())),
        ("Open Graph", data.open_graph.is_present().to_string()),
        ("Structured Data Blocks", data.structured_data_blocks.to_string()),
        ("Internal Links", data.links.internal.to_string()),
        ("External Links", data.links.external.to_string()),
        ("Nofollow Links", data.links.nofollow.to_string()),
    ];

    if !data.keywords.is_empty() {
        let top: Vec<String> = data
            .keywords
            .iter()
            .map(|k| format!("{} ({})", k.word, k.count))
            .collect();
        rows.push(("Top Keywords", top.join(", ")));
    }

    if let Some(focus) = &data.focus_keyword {
        rows.push(("Focus Keyword", focus.keyword.clone()));
        rows.push(("Focus Keyword Density", format!("{:.2}%", focus.density)));
    }

    if !report.link_checks.is_empty() {
        rows.push(("Links Checked", report.link_checks.len().to_string()));
        rows.push(("Broken Links", report.broken_links().count().to_string()));
    }

    rows
}

fn link_reason(status: Option<u16>, error: Option<&str>) -> String {
    match (status, error) {
        (Some(status), _) => format!("HTTP {status}"),
        (None, Some(err)) => err.to_string(),
        (None, None) => "unreachable".to_string(),
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace(['\n', '\r'], " ")
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row, quoting fields per RFC 4180.
fn write_row<W: Write>(w: &mut W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if first {
            first = false;
        } else {
            w.write_all(b",")?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    w.write_all(b"\r\n")
}
