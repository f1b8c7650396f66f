//! Check command implementation.

use flatmatter_core::config::types::ResolvedConfig;
use flatmatter_core::document::{DropReason, LineOutcome, LineReport};
use flatmatter_core::pipeline::StepOutcome;
use flatmatter_core::FlatMatter;
use tabled::{settings::Style, Table, Tabled};

use super::{fail, read_input};
use crate::{functions, CheckArgs};

/// Row for the line report table.
#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
    #[tabled(rename = "Detail")]
    detail: String,
}

impl From<&LineReport> for LineRow {
    fn from(report: &LineReport) -> Self {
        let (outcome, detail) = match &report.outcome {
            LineOutcome::Recorded { key, steps } => ("recorded", describe_steps(key, steps)),
            LineOutcome::Dropped { reason } => ("dropped", describe_reason(*reason).to_string()),
            LineOutcome::Blank => ("blank", String::new()),
            LineOutcome::Boundary => ("boundary", String::new()),
        };
        Self { index: report.index, outcome, detail }
    }
}

pub fn run(rc: &ResolvedConfig, args: CheckArgs) {
    let content = read_input(args.path.as_deref())
        .unwrap_or_else(|e| fail(format!("failed to read document: {e}")));

    // Dropped lines are reported below rather than raised.
    let mut options = rc.parse;
    options.strict = false;

    let registry = functions::registry();
    let doc = match FlatMatter::parse_with(&content, &registry, options) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("FAIL flatmatter check: {e}");
            crate::logging::flush();
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(doc.lines()) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(e),
        }
    } else {
        let rows: Vec<LineRow> = doc.lines().iter().map(LineRow::from).collect();
        println!("{}", Table::new(&rows).with(Style::rounded()));
    }

    let dropped = doc
        .lines()
        .iter()
        .filter(|line| matches!(line.outcome, LineOutcome::Dropped { .. }))
        .count();

    if dropped > 0 {
        eprintln!("FAIL flatmatter check: {dropped} line(s) dropped");
        crate::logging::flush();
        std::process::exit(1);
    }
    eprintln!("OK   flatmatter check: {} key(s)", doc.matter().len());
}

fn describe_steps(key: &str, steps: &[StepOutcome]) -> String {
    let skipped: Vec<&str> =
        steps.iter().filter(|s| s.is_skipped()).map(StepOutcome::identifier).collect();

    if skipped.is_empty() {
        key.to_string()
    } else {
        format!("{key} (skipped: {})", skipped.join(", "))
    }
}

fn describe_reason(reason: DropReason) -> &'static str {
    match reason {
        DropReason::MissingSeparator => "no value separator",
        DropReason::InvalidKey => "invalid key",
        DropReason::UnresolvedValue => "unresolvable value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_skipped_steps() {
        let steps = vec![
            StepOutcome::Skipped { identifier: "asd".into() },
            StepOutcome::Resolved { identifier: "trim".into(), value: serde_json::json!("x") },
        ];
        assert_eq!(describe_steps("a.b", &steps), "a.b (skipped: asd)");
        assert_eq!(describe_steps("a.b", &[]), "a.b");
    }

    #[test]
    fn row_from_dropped_line() {
        let report = LineReport {
            index: 4,
            outcome: LineOutcome::Dropped { reason: DropReason::InvalidKey },
        };
        let row = LineRow::from(&report);
        assert_eq!(row.index, 4);
        assert_eq!(row.outcome, "dropped");
        assert_eq!(row.detail, "invalid key");
    }
}
