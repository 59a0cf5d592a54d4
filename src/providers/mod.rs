//! Providers Module - External Data Sources

pub mod rpc;

pub use rpc::*;
