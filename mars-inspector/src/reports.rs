use anyhow::Result;
use colored::Colorize;
use mars_game::{AuditReport, Field, GameConstants, Severity};
use serde_json::{Map, Value};
use std::io::Write;

pub fn table_console<W: Write>(out: &mut W, table: &GameConstants) -> Result<()> {
    writeln!(out, "{}", "🪐 Terraforming Mars Constants".bright_cyan().bold())?;
    writeln!(out, "{}", "==============================".cyan())?;
    for (field, value) in table.counts() {
        writeln!(out, "{}: {value}", field.as_str().bold())?;
    }
    for (field, entries) in table.lists() {
        writeln!(out)?;
        list_console(out, field.as_str(), entries)?;
    }
    Ok(())
}

pub fn field_console<W: Write>(out: &mut W, table: &GameConstants, field: Field) -> Result<()> {
    match field {
        Field::Count(count) => writeln!(out, "{}: {}", count.as_str().bold(), table.count(count))?,
        Field::List(list) => list_console(out, list.as_str(), table.list(list))?,
    }
    Ok(())
}

fn list_console<W: Write>(out: &mut W, key: &str, entries: &[&str]) -> Result<()> {
    writeln!(out, "{} ({})", key.bold(), entries.len())?;
    for entry in entries {
        writeln!(out, "  • {entry}")?;
    }
    Ok(())
}

pub fn table_json<W: Write>(out: &mut W, table: &GameConstants) -> Result<()> {
    writeln!(out, "{}", table.to_json_pretty()?)?;
    Ok(())
}

pub fn field_json<W: Write>(out: &mut W, table: &GameConstants, field: Field) -> Result<()> {
    let value = match field {
        Field::Count(count) => Value::from(table.count(count)),
        Field::List(list) => Value::from(table.list(list).to_vec()),
    };
    let mut object = Map::new();
    object.insert(field.as_str().to_string(), value);
    writeln!(out, "{}", serde_json::to_string_pretty(&object)?)?;
    Ok(())
}

pub fn table_markdown<W: Write>(out: &mut W, table: &GameConstants) -> Result<()> {
    writeln!(out, "# Terraforming Mars Constants\n")?;
    writeln!(out, "| Field | Value |")?;
    writeln!(out, "|-------|-------|")?;
    for (field, value) in table.counts() {
        writeln!(out, "| {field} | {value} |")?;
    }
    for (field, entries) in table.lists() {
        writeln!(out, "| {field} | {} |", markdown_labels(entries))?;
    }
    Ok(())
}

pub fn field_markdown<W: Write>(out: &mut W, table: &GameConstants, field: Field) -> Result<()> {
    writeln!(out, "## {field}\n")?;
    match field {
        Field::Count(count) => writeln!(out, "{}", table.count(count))?,
        Field::List(list) => {
            for entry in table.list(list) {
                writeln!(out, "- `{entry}`")?;
            }
        }
    }
    Ok(())
}

// Labels may carry stray punctuation, so each one is code-quoted.
fn markdown_labels(entries: &[&str]) -> String {
    entries
        .iter()
        .map(|entry| format!("`{entry}`"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn audit_console<W: Write>(out: &mut W, report: &AuditReport, verbose: bool) -> Result<()> {
    writeln!(out, "{}", "🔎 Constants Audit".bright_cyan().bold())?;
    writeln!(out, "{}", "==================".cyan())?;
    writeln!(
        out,
        "Errors: {}",
        report.count(Severity::Error).to_string().red()
    )?;
    writeln!(
        out,
        "Warnings: {}",
        report.count(Severity::Warning).to_string().yellow()
    )?;
    writeln!(out, "Notices: {}", report.count(Severity::Notice))?;
    writeln!(out)?;

    for finding in report.findings() {
        let marker = match finding.severity {
            Severity::Error => "❌ ERROR".red(),
            Severity::Warning => "⚠️ WARN".yellow(),
            Severity::Notice if verbose => "ℹ️ NOTE".normal(),
            Severity::Notice => continue,
        };
        writeln!(
            out,
            "{marker} {}: {}",
            finding.location().bold(),
            finding.issue
        )?;
    }

    let verdict = if report.is_clean() {
        "✅ CLEAN".green()
    } else {
        "❌ NEEDS REVIEW".red()
    };
    writeln!(out, "{verdict}")?;
    Ok(())
}

pub fn audit_json<W: Write>(out: &mut W, report: &AuditReport) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}

pub fn audit_markdown<W: Write>(out: &mut W, report: &AuditReport) -> Result<()> {
    writeln!(out, "# Constants Audit\n")?;
    if report.findings().is_empty() {
        writeln!(out, "_No findings._")?;
        return Ok(());
    }
    writeln!(out, "| Severity | Location | Issue |")?;
    writeln!(out, "|----------|----------|-------|")?;
    for finding in report.findings() {
        writeln!(
            out,
            "| {} | {} | {} |",
            finding.severity,
            finding.location(),
            finding.issue
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars_game::{CountField, ListField, audit, game_constants};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn console_table_lists_every_field() {
        let text = render(|out| table_console(out, game_constants()));
        for field in ListField::ALL {
            assert!(text.contains(field.as_str()), "missing {field}");
        }
        assert!(text.contains("cardCount: 137"));
        assert!(text.contains("  • Science,"));
    }

    #[test]
    fn json_field_wraps_value_in_its_key() {
        let text = render(|out| field_json(out, game_constants(), Field::List(ListField::Awards)));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["awards"].as_array().map(Vec::len), Some(5));

        let text = render(|out| {
            field_json(
                out,
                game_constants(),
                Field::Count(CountField::CorporationCount),
            )
        });
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["corporationCount"], 10);
    }

    #[test]
    fn markdown_quotes_labels() {
        let text = render(|out| table_markdown(out, game_constants()));
        assert!(text.starts_with("# Terraforming Mars Constants"));
        assert!(text.contains("| tags | `Science,` `Building`"));
        assert!(text.contains("| tilesCount | 61 |"));
    }

    #[test]
    fn console_audit_hides_notices_unless_verbose() {
        let report = audit(game_constants());
        let quiet = render(|out| audit_console(out, &report, false));
        assert!(quiet.contains("tags[0]"));
        assert!(!quiet.contains("specialTiles[0]"));
        assert!(quiet.contains("Notices: 2"));

        let verbose = render(|out| audit_console(out, &report, true));
        assert!(verbose.contains("specialTiles[1]"));
        assert!(verbose.contains("NEEDS REVIEW"));
    }

    #[test]
    fn markdown_audit_lists_findings() {
        let report = audit(game_constants());
        let text = render(|out| audit_markdown(out, &report));
        assert!(text.contains("| warning | tags[0] | `Science,` has stray punctuation |"));
    }
}
