use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Inheritance cycle through type {0}")]
    InheritanceCycle(String),

    #[error("Can not get accessor for {kind} member {owner}.{member}")]
    UnsupportedMember {
        owner: String,
        member: String,
        kind: String,
    },

    #[error("Invalid value type: {0}")]
    InvalidValueType(String),

    #[error("Invalid declaration file: {0}")]
    InvalidDeclaration(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
