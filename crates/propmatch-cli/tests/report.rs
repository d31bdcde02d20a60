//! Tests for match report rendering.

use std::sync::Arc;

use propmatch_cli::report::MatchReport;
use propmatch_map::{MatchingConfig, UnderscoreTokenizer};
use propmatch_model::{MatchStrength, Property};
use serde_json::json;

fn fields(names: &[&str]) -> Vec<Property> {
    names.iter().copied().map(Property::field).collect()
}

fn prefix_shift_report() -> MatchReport {
    MatchReport::build(
        &MatchingConfig::default(),
        &fields(&["defaultValue", "value"]),
        &fields(&["someDefaultValue", "value"]),
    )
}

#[test]
fn text_report_pairs_tokens_with_strengths() {
    insta::assert_snapshot!(prefix_shift_report().render_text(), @r"
source:      default Value value
destination: some Default Value value
  1  default  IGNORING_CASE_AND_TOKEN_POSITION (3)
  2  Value    IGNORING_TOKEN_POSITION (2)
  3  value    IGNORING_TOKEN_POSITION (2)
  +  -        NONE (100)
");
}

#[test]
fn text_report_with_no_source_tokens() {
    let report = MatchReport::build(&MatchingConfig::default(), &[], &fields(&["value"]));
    assert_eq!(
        report.render_text(),
        "source:      (none)\ndestination: value\n  +  -  NONE (100)"
    );
}

#[test]
fn json_report_shape() {
    let value = serde_json::to_value(prefix_shift_report()).expect("serialize report");
    assert_eq!(
        value,
        json!({
            "source_tokens": ["default", "Value", "value"],
            "destination_tokens": ["some", "Default", "Value", "value"],
            "strengths": [
                "IGNORING_CASE_AND_TOKEN_POSITION",
                "IGNORING_TOKEN_POSITION",
                "IGNORING_TOKEN_POSITION",
                "NONE"
            ]
        })
    );
}

#[test]
fn report_uses_destination_tokenizer() {
    let config =
        MatchingConfig::default().with_destination_tokenizer(Arc::new(UnderscoreTokenizer));
    let report = MatchReport::build(
        &config,
        &fields(&["firstName", "lastName"]),
        &fields(&["first_name", "last_name", "middle_name"]),
    );
    assert_eq!(
        report.destination_tokens,
        vec!["first", "name", "last", "name", "middle", "name"]
    );
    assert_eq!(
        report.strengths,
        vec![
            MatchStrength::Exact,
            MatchStrength::IgnoringCase,
            MatchStrength::Exact,
            MatchStrength::IgnoringCase,
            MatchStrength::None,
            MatchStrength::None,
        ]
    );
    assert_eq!(report.unmatched_destination(), 2);
    assert_eq!(report.counts().get(&MatchStrength::None), Some(&2));
}

#[test]
fn table_report_lists_padding_rows() {
    let rendered = prefix_shift_report().render_table().to_string();
    assert!(rendered.contains("IGNORING_CASE_AND_TOKEN_POSITION"));
    assert!(rendered.contains("unmatched destination token"));
    assert_eq!(rendered.matches("NONE").count(), 1);
}
