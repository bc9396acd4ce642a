// BpTracker Domain
// This crate contains the analytics for blood pressure readings:
// categories, statistics, trends and advice.

// Analysis configuration
pub mod config;

// Domain entities
pub mod entities;

// Services that implement the analytics
pub mod services;

// Tracing setup
pub mod telemetry;

// Testing utilities - only available in tests or with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use config::{AnalysisConfig, ConfigError};
