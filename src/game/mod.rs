pub mod engine;

pub use engine::{Engine, EngineConfig, EngineError};
