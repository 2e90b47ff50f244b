use anyhow::Result;
use clap::Args;
use docmap_bridge::BridgeFactory;
use docmap_compiler::MappingCompiler;
use docmap_core::{AttributedMetadata, MetadataProvider};

use super::SourceArgs;
use crate::output::format::{format_check, CheckOutcome};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: &CheckArgs, format: OutputFormat) -> Result<()> {
    let file = args.source.load()?;
    let registry = file.registry();
    let bridges = BridgeFactory::new();
    let compiler = MappingCompiler::new(&registry, &AttributedMetadata, &bridges)
        .with_settings(file.settings.clone());

    let mut roots: Vec<&str> = file
        .types
        .iter()
        .filter(|ty| AttributedMetadata.indexed(ty).is_some())
        .map(|ty| ty.name.as_str())
        .collect();
    roots.sort_unstable();

    let outcomes: Vec<CheckOutcome> = roots
        .into_iter()
        .map(|root| {
            tracing::info!("Checking {root}");
            match compiler.build(root) {
                Ok(compiled) => CheckOutcome {
                    root: root.to_string(),
                    error: None,
                    fields: compiled.mapping.field_names().len(),
                    diagnostics: compiled.diagnostics.len(),
                },
                Err(e) => CheckOutcome {
                    root: root.to_string(),
                    error: Some(e.to_string()),
                    fields: 0,
                    diagnostics: 0,
                },
            }
        })
        .collect();

    println!("{}", format_check(&outcomes, format));

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} indexed type(s) failed to compile", outcomes.len());
    }
    Ok(())
}
