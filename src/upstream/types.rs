//! Wire types and error definitions for the upstream employee API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single employee record as the upstream represents it.
///
/// The upstream returns `employee_age` as text; it is carried verbatim
/// and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    #[serde(default)]
    pub id: String,

    pub employee_name: String,

    pub employee_salary: u32,

    pub employee_age: String,

    #[serde(default)]
    pub profile_image: String,
}

/// Upstream envelope wrapping a listing of employees.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub status: String,

    pub data: Option<Vec<Employee>>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Upstream envelope wrapping a single employee record.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEnvelope {
    #[serde(default)]
    pub status: String,

    pub data: Option<Employee>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Shape of an upstream error body, when it sends one.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub message: String,
}

/// Errors that can occur talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status.
    #[error("upstream returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Transport-level failure: timeout, connection refused, etc.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx envelope carried no data where a record was required.
    #[error("upstream response contained no data")]
    MissingData,
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserializes_with_null_data() {
        let envelope: ListEnvelope =
            serde_json::from_str(r#"{"status":"success","data":null,"message":null}"#).unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.status, "success");
    }

    #[test]
    fn test_employee_defaults_missing_profile_image() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":"1","employee_name":"Tiger Nixon","employee_salary":320800,"employee_age":"61"}"#,
        )
        .unwrap();
        assert_eq!(employee.profile_image, "");
        assert_eq!(employee.employee_age, "61");
    }
}
