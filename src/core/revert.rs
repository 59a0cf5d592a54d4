//! Revert payload extraction.
//!
//! RPC transports and node implementations nest revert data differently. The
//! error is treated as a generic JSON object and probed at a fixed list of
//! sites; the first one holding a non-empty string wins.

use serde_json::Value;
use tracing::{debug, error};

/// Where a revert payload was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertSite {
    /// `data`
    TopLevel,
    /// `error.data`
    NestedError,
    /// `info.error.data`, as a string
    InfoErrorString,
    /// `info.error.data.data`
    InfoErrorObject,
}

impl RevertSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLevel => "data",
            Self::NestedError => "error.data",
            Self::InfoErrorString => "info.error.data",
            Self::InfoErrorObject => "info.error.data.data",
        }
    }
}

type Extractor = fn(&Value) -> Option<&str>;

/// Probe order; not reorderable
const EXTRACTORS: [(RevertSite, Extractor); 4] = [
    (RevertSite::TopLevel, top_level),
    (RevertSite::NestedError, nested_error),
    (RevertSite::InfoErrorString, info_error),
    (RevertSite::InfoErrorObject, info_error_object),
];

fn top_level(err: &Value) -> Option<&str> {
    non_empty(err.get("data"))
}

fn nested_error(err: &Value) -> Option<&str> {
    non_empty(err.pointer("/error/data"))
}

fn info_error(err: &Value) -> Option<&str> {
    non_empty(err.pointer("/info/error/data"))
}

fn info_error_object(err: &Value) -> Option<&str> {
    non_empty(err.pointer("/info/error/data/data"))
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Find the revert payload inside an error object, with the site it came from
pub fn find_revert_data(err: &Value) -> Option<(RevertSite, &str)> {
    EXTRACTORS
        .iter()
        .find_map(|(site, extract)| extract(err).map(|data| (*site, data)))
}

/// Hex revert payload, or an empty string when the error carries none.
///
/// An empty result is not a failure here; the decoder rejects it.
pub fn unwrap_revert_data(err: &Value) -> String {
    match find_revert_data(err) {
        Some((site, data)) => {
            debug!("Found revert data in {}", site.as_str());
            data.to_string()
        }
        None => {
            let message = err
                .get("message")
                .or_else(|| err.pointer("/error/message"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            error!("RPC Error (No Revert Data): {}", message);
            String::new()
        }
    }
}
