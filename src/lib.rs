//! Interview Records - validated data contract for interview questions and feedback.
//!
//! This crate defines the InterviewQuestion and InterviewFeedback value
//! objects and the boundary that turns untyped JSON or YAML text into them.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
