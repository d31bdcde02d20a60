//! Match reports for display.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use propmatch_map::{MatchingConfig, flatten_tokens, match_tokens};
use propmatch_model::{MatchStrength, Property};

/// Flattened tokens of both sides together with their classification.
///
/// `strengths[..source_tokens.len()]` aligns with `source_tokens`; every later
/// entry is a `NONE` standing for one unmatched destination token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub source_tokens: Vec<String>,
    pub destination_tokens: Vec<String>,
    pub strengths: Vec<MatchStrength>,
}

impl MatchReport {
    pub fn build(config: &MatchingConfig, source: &[Property], destination: &[Property]) -> Self {
        let source_tokens = flatten_tokens(source, config.source_tokenizer());
        let destination_tokens = flatten_tokens(destination, config.destination_tokenizer());
        let strengths = match_tokens(&source_tokens, &destination_tokens);
        Self {
            source_tokens,
            destination_tokens,
            strengths,
        }
    }

    /// Classifications aligned with the source tokens.
    pub fn classified(&self) -> impl Iterator<Item = (&str, MatchStrength)> {
        self.source_tokens
            .iter()
            .map(String::as_str)
            .zip(self.strengths.iter().copied())
    }

    /// Number of destination tokens no source token consumed.
    pub fn unmatched_destination(&self) -> usize {
        self.strengths.len() - self.source_tokens.len()
    }

    /// Occurrences of each strength, including destination padding.
    pub fn counts(&self) -> BTreeMap<MatchStrength, usize> {
        let mut counts = BTreeMap::new();
        for strength in &self.strengths {
            *counts.entry(*strength).or_insert(0) += 1;
        }
        counts
    }

    pub fn render_text(&self) -> String {
        let width = self
            .source_tokens
            .iter()
            .map(|token| token.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);

        let mut lines = vec![
            format!("source:      {}", join_tokens(&self.source_tokens)),
            format!("destination: {}", join_tokens(&self.destination_tokens)),
        ];
        for (index, (token, strength)) in self.classified().enumerate() {
            lines.push(format!(
                "{:>3}  {token:<width$}  {strength} ({})",
                index + 1,
                strength.priority()
            ));
        }
        for _ in 0..self.unmatched_destination() {
            let none = MatchStrength::None;
            lines.push(format!("  +  {:<width$}  {none} ({})", "-", none.priority()));
        }
        lines.join("\n")
    }

    pub fn render_table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("#"),
            header_cell("Source token"),
            header_cell("Strength"),
            header_cell("Priority"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);

        for (index, (token, strength)) in self.classified().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(token),
                strength_cell(strength),
                Cell::new(strength.priority()),
            ]);
        }
        for _ in 0..self.unmatched_destination() {
            table.add_row(vec![
                dim_cell("+"),
                dim_cell("unmatched destination token"),
                strength_cell(MatchStrength::None),
                Cell::new(MatchStrength::None.priority()),
            ]);
        }
        table
    }
}

/// Table describing every strength, best first.
pub fn strengths_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Strength"),
        header_cell("Priority"),
        header_cell("Meaning"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for strength in MatchStrength::ALL {
        table.add_row(vec![
            strength_cell(strength),
            Cell::new(strength.priority()),
            Cell::new(strength.description()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn join_tokens(tokens: &[String]) -> String {
    if tokens.is_empty() {
        "(none)".to_string()
    } else {
        tokens.join(" ")
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}

fn strength_cell(strength: MatchStrength) -> Cell {
    let color = match strength {
        MatchStrength::Exact => Color::Green,
        MatchStrength::IgnoringCase => Color::DarkGreen,
        MatchStrength::IgnoringTokenPosition => Color::Yellow,
        MatchStrength::IgnoringCaseAndTokenPosition => Color::DarkYellow,
        MatchStrength::None => Color::Red,
    };
    Cell::new(strength).fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_include_padding() {
        let report = MatchReport {
            source_tokens: vec!["value".to_string()],
            destination_tokens: vec!["some".to_string(), "value".to_string()],
            strengths: vec![MatchStrength::IgnoringTokenPosition, MatchStrength::None],
        };
        assert_eq!(report.unmatched_destination(), 1);
        let counts = report.counts();
        assert_eq!(counts.get(&MatchStrength::IgnoringTokenPosition), Some(&1));
        assert_eq!(counts.get(&MatchStrength::None), Some(&1));
        assert_eq!(counts.get(&MatchStrength::Exact), None);
    }

    #[test]
    fn strengths_table_lists_every_strength() {
        let rendered = strengths_table().to_string();
        for strength in MatchStrength::ALL {
            assert!(rendered.contains(strength.as_str()));
        }
    }
}
