//! Credit scoring and risk classification exposed as two agent-facing tools.
//!
//! The [`scoring`] module holds the whole policy: the input sanitizer, the immutable scoring
//! model, the engine, and the two response projections. The remaining modules carry the
//! process plumbing (environment configuration, tracing setup, and the top-level error type)
//! shared by the HTTP service and CLI.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
