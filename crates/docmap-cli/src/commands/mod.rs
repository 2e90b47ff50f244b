pub mod analyze;
pub mod check;
pub mod compile;
pub mod fields;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use docmap_core::DeclarationFile;

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a root type and print its document mapping
    Compile(compile::CompileArgs),
    /// List the index field names a root type produces
    Fields(fields::FieldsArgs),
    /// Compile every indexed type in a declaration file
    Check(check::CheckArgs),
    /// Run an analyzer over sample text
    Analyze(analyze::AnalyzeArgs),
}

/// Options shared by commands that read a declaration file.
#[derive(Args)]
pub struct SourceArgs {
    /// JSON declaration file
    pub file: PathBuf,

    /// Global embedding depth ceiling (overrides the file's settings)
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Accept root types without a document id
    #[arg(long)]
    pub allow_missing_id: bool,
}

impl SourceArgs {
    /// Load the declaration file and apply command line overrides.
    pub fn load(&self) -> Result<DeclarationFile> {
        let mut file = load_file(&self.file)?;
        if let Some(depth) = self.max_depth {
            if depth == 0 {
                anyhow::bail!("--max-depth must be at least 1");
            }
            file.settings.max_depth = Some(depth);
        }
        if self.allow_missing_id {
            file.settings.require_document_id = false;
        }
        Ok(file)
    }
}

fn load_file(path: &Path) -> Result<DeclarationFile> {
    DeclarationFile::load(path)
        .with_context(|| format!("Failed to load declarations from {}", path.display()))
}
