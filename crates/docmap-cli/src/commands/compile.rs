use anyhow::{Context, Result};
use clap::Args;
use docmap_bridge::BridgeFactory;
use docmap_compiler::MappingCompiler;
use docmap_core::AttributedMetadata;

use super::SourceArgs;
use crate::output::format::format_compiled;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct CompileArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Root type to compile
    pub root: String,

    /// Exit with an error when the build reports error diagnostics
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: &CompileArgs, format: OutputFormat) -> Result<()> {
    let file = args.source.load()?;
    let registry = file.registry();
    let bridges = BridgeFactory::new();

    let compiled = MappingCompiler::new(&registry, &AttributedMetadata, &bridges)
        .with_settings(file.settings.clone())
        .build(&args.root)
        .with_context(|| format!("Failed to compile '{}'", args.root))?;

    println!("{}", format_compiled(&compiled, format));

    if args.strict && compiled.diagnostics.has_errors() {
        anyhow::bail!(
            "'{}' compiled with {} error diagnostic(s)",
            args.root,
            compiled.diagnostics.errors().count()
        );
    }
    Ok(())
}
