//! Hiring demo data generator
//!
//! Fills a process engine with synthetic hiring process instances.
//!
//! This crate provides:
//! - Typed process variables and the scenario recipes that fill them
//! - Gaussian task duration sampling
//! - Engine REST client for message correlation and user tasks
//! - A poller that claims and completes open tasks until none remain
//! - The campaign driver that ties everything together

pub mod campaign;
pub mod client;
pub mod config;
pub mod duration;
pub mod error;
pub mod launcher;
pub mod poller;
pub mod process;
pub mod scenario;
pub mod variables;

pub use campaign::{CampaignConfig, CampaignDriver, CampaignReport};
pub use client::{EngineApi, EngineClient};
pub use config::DatagenConfig;
pub use error::{DatagenError, Result};
pub use scenario::{CancelStage, Scenario};
pub use variables::{VariableSet, VariableValue};
