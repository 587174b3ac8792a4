//! Employee Gateway Library

pub mod config;
pub mod directory;
pub mod http;
pub mod upstream;

pub use config::GatewayConfig;
pub use directory::EmployeeDirectory;
pub use http::HttpServer;
pub use upstream::{Employee, EmployeeApi, UpstreamClient};
