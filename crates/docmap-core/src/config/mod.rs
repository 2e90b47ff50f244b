pub mod settings;

pub use settings::{DeclarationFile, Settings};
