#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Unknown bridge: {0}")]
    UnknownBridge(String),

    #[error("Unknown analyzer: {0}")]
    UnknownAnalyzer(String),

    #[error("Failed to instantiate {name}: {reason}")]
    Instantiation { name: String, reason: String },

    #[error("Unable to guess bridge for {member} of type {value_type}")]
    Unguessable { member: String, value_type: String },

    #[error("Bridge {0} does not support string to object conversion")]
    NotTwoWay(String),

    #[error("Bridge {bridge} can not parse {text:?}: {reason}")]
    Parse {
        bridge: String,
        text: String,
        reason: String,
    },
}
