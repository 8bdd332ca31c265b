/*
[INPUT]:  Client configuration, credentials and templated REST requests
[OUTPUT]: HTTP responses decoded into account types
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod client;
pub mod error;
pub mod resource;

pub use error::{Result, TwilioError};
pub use resource::RestRequest;

pub use client::{ClientConfig, Credentials, DEFAULT_BASE_URL, TwilioClient};
