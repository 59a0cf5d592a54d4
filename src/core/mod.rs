//! Core Module - Simulation Pipeline
//!
//! Encoder, executor, revert unwrapper, decoder, risk classifier and report
//! builder, wired together by `TokenSimulator`.

pub mod decoder;
pub mod encoder;
pub mod executor;
pub mod report;
pub mod revert;
pub mod risk;
pub mod simulator;

pub use decoder::*;
pub use encoder::*;
pub use executor::*;
pub use revert::*;
pub use risk::*;
pub use simulator::*;
