//! Flattening property lists into one token sequence.

use propmatch_model::Property;

use crate::tokenizer::NameTokenizer;

/// Concatenates the tokens of every property, in list order.
///
/// Each name is tokenized with the rule set its property kind selects. No
/// deduplication, sorting, or filtering happens here; a property whose name
/// yields no tokens simply contributes nothing.
pub fn flatten_tokens(properties: &[Property], tokenizer: &dyn NameTokenizer) -> Vec<String> {
    properties
        .iter()
        .flat_map(|property| tokenizer.tokenize(property.name(), property.kind().nameable_type()))
        .collect()
}
