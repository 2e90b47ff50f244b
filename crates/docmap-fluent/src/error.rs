#[derive(Debug, thiserror::Error)]
pub enum FluentError {
    #[error("Document id of {type_name} already set to {existing}, can not map {member}")]
    IdAlreadySet {
        type_name: String,
        existing: String,
        member: String,
    },

    #[error("A map for {0} was already added")]
    DuplicateMap(String),
}
