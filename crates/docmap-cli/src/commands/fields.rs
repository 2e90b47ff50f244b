use anyhow::{Context, Result};
use clap::Args;
use docmap_bridge::BridgeFactory;
use docmap_compiler::MappingCompiler;
use docmap_core::AttributedMetadata;

use super::SourceArgs;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Root type to compile
    pub root: String,
}

pub fn run(args: &FieldsArgs, format: OutputFormat) -> Result<()> {
    let file = args.source.load()?;
    let registry = file.registry();
    let bridges = BridgeFactory::new();

    let compiled = MappingCompiler::new(&registry, &AttributedMetadata, &bridges)
        .with_settings(file.settings.clone())
        .build(&args.root)
        .with_context(|| format!("Failed to compile '{}'", args.root))?;

    let names = compiled.mapping.field_names();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&names).unwrap_or_default())
        }
        OutputFormat::Text => {
            for name in names {
                println!("{name}");
            }
        }
    }
    Ok(())
}
