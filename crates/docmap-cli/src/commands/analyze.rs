use anyhow::Result;
use clap::Args;
use docmap_bridge::BridgeFactory;

use crate::output::OutputFormat;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Analyzer name (default, raw, whitespace, en_stem)
    pub analyzer: String,

    /// Text to analyze
    pub text: String,
}

pub fn run(args: &AnalyzeArgs, format: OutputFormat) -> Result<()> {
    let analyzer = BridgeFactory::new().analyzer(&args.analyzer)?;
    let tokens = analyzer.tokens(&args.text);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tokens).unwrap_or_default())
        }
        OutputFormat::Text => println!("{}", tokens.join(" | ")),
    }
    Ok(())
}
