use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::scenario::{Preset, SweepPoint};
use crate::scoring::{Category, Direction, FactorScore, FactorValues, ScenarioResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal place: "68.8"
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Format a signed change with one decimal place: "+6.3", "-0.4", "0.0"
pub fn format_delta(delta: f64) -> String {
    if delta == 0.0 {
        "0.0".to_string()
    } else {
        format!("{:+.1}", delta)
    }
}

fn color_category(category: Category, use_colors: bool) -> String {
    if !use_colors {
        return category.to_string();
    }
    match category {
        Category::High => category.green().bold().to_string(),
        Category::Medium => category.yellow().bold().to_string(),
        Category::Low => category.red().bold().to_string(),
    }
}

fn color_direction(direction: Direction, text: String, use_colors: bool) -> String {
    if !use_colors {
        return text;
    }
    match direction {
        Direction::Positive => text.green().to_string(),
        Direction::Negative => text.red().to_string(),
        Direction::Neutral => text.dimmed().to_string(),
    }
}

/// Per-factor breakdown of one state's overall score.
/// Columns: factor, raw value, normalized score, weight, weighted points
pub fn format_score_breakdown(scores: &[FactorScore], overall: f64, use_colors: bool) -> String {
    let mut lines: Vec<String> = scores
        .iter()
        .map(|s| {
            format!(
                "{:<13}{:>8}{:>9}{:>7.2}{:>9.2}",
                s.factor.label(),
                format!("{}", s.raw),
                format!("{:.2}", s.score),
                s.weight,
                s.weighted
            )
        })
        .collect();

    let total = format!("Overall score: {}", format_score(overall));
    lines.push(String::new());
    lines.push(if use_colors {
        total.bold().to_string()
    } else {
        total
    });
    lines.join("\n")
}

/// Human-readable comparison report.
pub fn format_result(result: &ScenarioResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Baseline: {}  New: {}  Change: {} ({}%)  Category: {}",
        format_score(result.baseline_score),
        format_score(result.new_score),
        format_delta(result.delta),
        format_delta(result.percent_change),
        color_category(result.category, use_colors)
    ));
    lines.push(String::new());

    for entry in &result.impact_breakdown {
        let row = format!(
            "  {:<13}{:>7}  {}",
            entry.factor.label(),
            format_delta(entry.impact),
            entry.direction
        );
        lines.push(color_direction(entry.direction, row, use_colors));
    }

    lines.join("\n")
}

/// Tab-separated comparison for scripting (no headers, no colors)
/// Line 1: baseline, new, delta, percent, category
/// Lines 2-6: factor, impact, direction
pub fn format_tsv(result: &ScenarioResult) -> String {
    let mut lines = vec![format!(
        "{}\t{}\t{}\t{}\t{}",
        format_score(result.baseline_score),
        format_score(result.new_score),
        format_score(result.delta),
        format_score(result.percent_change),
        result.category
    )];
    lines.extend(result.impact_breakdown.iter().map(|e| {
        format!("{}\t{}\t{}", e.factor, format_score(e.impact), e.direction)
    }));
    lines.join("\n")
}

/// Pretty JSON for any serializable result.
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize result to JSON")
}

/// Raw values of a state, one `name: value` per line.
pub fn format_values(values: &FactorValues) -> String {
    crate::scoring::Factor::ALL
        .iter()
        .map(|f| format!("  {:<13}{}", f.label(), values.get(*f)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Preset listing: name, then the deltas it applies.
pub fn format_presets(presets: &[Preset], use_colors: bool) -> String {
    if presets.is_empty() {
        return "No presets defined.".to_string();
    }
    let width = presets.iter().map(|p| p.name.chars().count()).max().unwrap_or(0);

    presets
        .iter()
        .map(|p| {
            let name = format!("{:<width$}", p.name, width = width);
            let name = if use_colors { name.bold().to_string() } else { name };
            match &p.description {
                Some(desc) => format!("{}  {}  ({})", name, p.deltas.describe(), desc),
                None => format!("{}  {}", name, p.deltas.describe()),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sweep table: delta, adjusted raw value, new score, change, category
pub fn format_sweep(points: &[SweepPoint], use_colors: bool) -> String {
    if points.is_empty() {
        return "Empty sweep: check --from, --to and --step.".to_string();
    }
    points
        .iter()
        .map(|p| {
            format!(
                "{:>8}{:>10}{:>8}{:>7}  {}",
                format_delta(p.delta),
                format!("{}", p.adjusted_value),
                format_score(p.result.new_score),
                format_delta(p.result.delta),
                color_category(p.result.category, use_colors)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sweep as TSV: delta, adjusted value, new score, delta, category
pub fn format_sweep_tsv(points: &[SweepPoint]) -> String {
    points
        .iter()
        .map(|p| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                p.delta,
                p.adjusted_value,
                format_score(p.result.new_score),
                format_score(p.result.delta),
                p.result.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
