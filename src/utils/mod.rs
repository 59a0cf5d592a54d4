//! Utils Module - Constants & Contract Artifact

pub mod artifact;
pub mod constants;

pub use artifact::*;
pub use constants::*;
