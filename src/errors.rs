//! # Error Types
//!
//! Error handling for the ui-kit MCP service.
//! Provides structured error types that can be converted to MCP ErrorData.

use rmcp::model::ErrorData;
use std::borrow::Cow;
use std::fmt;

/// Error types that can occur during ui-kit MCP service operations.
///
/// These errors cover sample discovery, analysis and code generation.
/// All errors implement conversion to MCP `ErrorData` for proper error reporting.
#[derive(Debug)]
pub enum ServiceError {
    /// Requested component has no playground sample
    ComponentNotFound(String),
    /// Internal service error with custom message
    Internal(String),
    /// I/O error reading sample files
    Io(std::io::Error),
    /// Error walking the samples directory
    WalkDir(walkdir::Error),
    /// Error parsing JSON data
    SerdeJson(serde_json::Error),
    /// Regular expression compilation error
    Regex(regex::Error),
    /// Glob pattern compilation error
    Glob(globset::Error),
    /// MCP tool not found
    ToolNotFound(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::ComponentNotFound(name) => {
                write!(f, "No sample found for component: {name}")
            }
            ServiceError::Internal(msg) => write!(f, "Internal error: {msg}"),
            ServiceError::Io(err) => write!(f, "IO error: {err}"),
            ServiceError::WalkDir(err) => write!(f, "Directory traversal error: {err}"),
            ServiceError::SerdeJson(err) => write!(f, "JSON parsing error: {err}"),
            ServiceError::Regex(err) => write!(f, "Regex error: {err}"),
            ServiceError::Glob(err) => write!(f, "Glob error: {err}"),
            ServiceError::ToolNotFound(tool) => write!(f, "Tool not found: {tool}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::Io(err)
    }
}

impl From<walkdir::Error> for ServiceError {
    fn from(err: walkdir::Error) -> Self {
        ServiceError::WalkDir(err)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerdeJson(err)
    }
}

impl From<regex::Error> for ServiceError {
    fn from(err: regex::Error) -> Self {
        ServiceError::Regex(err)
    }
}

impl From<globset::Error> for ServiceError {
    fn from(err: globset::Error) -> Self {
        ServiceError::Glob(err)
    }
}

impl From<ServiceError> for ErrorData {
    fn from(err: ServiceError) -> Self {
        match err {
            // Unknown components are a caller mistake, not a server fault.
            ServiceError::ComponentNotFound(_) => {
                ErrorData::invalid_params(Cow::Owned(err.to_string()), None)
            }
            _ => ErrorData::internal_error(err.to_string(), None),
        }
    }
}
