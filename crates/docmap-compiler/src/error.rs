use docmap_bridge::BridgeError;
use docmap_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Document id declared twice on {type_name}: {first} and {member}")]
    DuplicateIdentifier {
        type_name: String,
        first: String,
        member: String,
    },

    #[error("No document id declared on {0}")]
    MissingIdentifier(String),

    #[error("Bridge {bridge} for document id {type_name}.{member} is not two-way")]
    BridgeCapability {
        type_name: String,
        member: String,
        bridge: String,
    },

    #[error("Circular reference, duplicate use of {type_name} in root entity {root}#{path}")]
    CircularReference {
        type_name: String,
        root: String,
        path: String,
    },

    #[error("Can not get accessor for {kind} member {type_name}.{member}")]
    UnsupportedMember {
        type_name: String,
        member: String,
        kind: String,
    },

    #[error("Failed to instantiate {name}: {reason}")]
    TransformerInstantiation { name: String, reason: String },

    #[error("Unable to guess bridge for {member} of type {value_type}")]
    UnguessableBridge { member: String, value_type: String },

    #[error("Can not embed {type_name}.{member}: {value_type} is not an object type")]
    InvalidEmbedding {
        type_name: String,
        member: String,
        value_type: String,
    },

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Bridge error: {0}")]
    Bridge(BridgeError),

    #[error("Core error: {0}")]
    Core(CoreError),
}

impl From<CoreError> for CompileError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownType(name) => CompileError::UnknownType(name),
            CoreError::UnsupportedMember {
                owner,
                member,
                kind,
            } => CompileError::UnsupportedMember {
                type_name: owner,
                member,
                kind,
            },
            other => CompileError::Core(other),
        }
    }
}

impl From<BridgeError> for CompileError {
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::UnknownBridge(name) => CompileError::TransformerInstantiation {
                name,
                reason: "no bridge registered under this name".into(),
            },
            BridgeError::UnknownAnalyzer(name) => CompileError::TransformerInstantiation {
                name,
                reason: "no analyzer registered under this name".into(),
            },
            BridgeError::Instantiation { name, reason } => {
                CompileError::TransformerInstantiation { name, reason }
            }
            BridgeError::Unguessable { member, value_type } => {
                CompileError::UnguessableBridge { member, value_type }
            }
            other => CompileError::Bridge(other),
        }
    }
}
