// lifeline-api: Async Rust client for the Lifeline content backend REST API

pub mod body;
pub mod client;
pub mod error;
pub mod resource;
pub mod transport;

pub use body::{RequestBody, Upload};
pub use client::RestClient;
pub use error::Error;
pub use resource::Resource;
pub use transport::{TlsMode, TransportConfig};
