//! Upstream employee API subsystem.
//!
//! # Data Flow
//! ```text
//! directory call
//!     → client.rs (reqwest call against base URL)
//!     → types.rs envelope ({status, data, message})
//!     → Vec<Employee> / Employee / ()
//! ```

pub mod client;
pub mod types;

pub use client::{EmployeeApi, UpstreamClient};
pub use types::{Employee, ListEnvelope, RecordEnvelope, UpstreamError, UpstreamResult};
