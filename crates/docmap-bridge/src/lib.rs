pub mod analyzer;
pub mod bridge;
pub mod error;
pub mod factory;

pub use analyzer::{Analyzer, AnalyzerRegistry};
pub use bridge::{Bridge, FieldBridge, TwoWayFieldBridge};
pub use error::BridgeError;
pub use factory::BridgeFactory;
