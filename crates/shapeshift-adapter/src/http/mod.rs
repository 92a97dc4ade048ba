/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses as passthrough JSON values
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod blocking;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod public;
pub mod shift;
pub mod transport;

pub use endpoint::{ApiRequest, Form};
pub use error::{Result, ShapeshiftError};
pub use transport::{BlockingHttpTransport, BlockingTransport, HttpTransport, Transport};

pub use blocking::BlockingShapeshiftClient;
pub use client::{ClientConfig, ShapeshiftClient};
