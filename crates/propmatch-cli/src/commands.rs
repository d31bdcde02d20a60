use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use propmatch_cli::report::{MatchReport, strengths_table};
use propmatch_map::{MatcherSettings, MatchingConfig, TokenizerKind};
use propmatch_model::PropertyKind;

use crate::cli::{MatchArgs, ReportFormatArg, TokenizeArgs};

pub fn run_match(args: &MatchArgs) -> Result<()> {
    let settings = resolve_settings(args)?;
    let config = MatchingConfig::from(&settings);

    let span = info_span!(
        "match",
        source_properties = args.source.len(),
        destination_properties = args.destination.len()
    );
    let _guard = span.enter();

    let report = MatchReport::build(&config, &args.source, &args.destination);
    info!(
        source_tokens = report.source_tokens.len(),
        destination_tokens = report.destination_tokens.len(),
        unmatched_destination = report.unmatched_destination(),
        "matched properties"
    );

    match args.format {
        ReportFormatArg::Table => println!("{}", report.render_table()),
        ReportFormatArg::Text => println!("{}", report.render_text()),
        ReportFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize match report")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_tokenize(args: &TokenizeArgs) {
    let tokenizer = TokenizerKind::from(args.tokenizer).tokenizer();
    let kind = PropertyKind::from(args.kind);
    let tokens = tokenizer.tokenize(&args.name, kind.nameable_type());
    debug!(name = %args.name, %kind, tokens = tokens.len(), "tokenized name");
    for token in tokens {
        println!("{token}");
    }
}

pub fn run_strengths() {
    println!("{}", strengths_table());
}

/// Settings file first, then explicit tokenizer flags.
fn resolve_settings(args: &MatchArgs) -> Result<MatcherSettings> {
    let mut settings = match &args.config {
        Some(path) => MatcherSettings::load(path).context("load matcher settings")?,
        None => MatcherSettings::default(),
    };
    if let Some(tokenizer) = args.source_tokenizer {
        settings.source_tokenizer = tokenizer.into();
    }
    if let Some(tokenizer) = args.destination_tokenizer {
        settings.destination_tokenizer = tokenizer.into();
    }
    debug!(?settings, "resolved matcher settings");
    Ok(settings)
}
