//! Process engine REST client.

mod engine;
#[cfg(test)]
pub(crate) mod mock;

pub use engine::{EngineApi, EngineClient, MessageCorrelation, Task};
