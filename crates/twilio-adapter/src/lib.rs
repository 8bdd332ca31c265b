/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Twilio account adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the Twilio REST API Accounts resource.
//!
//! ```no_run
//! use twilio_adapter::{AccountStatus, ListSubAccountsRequest, TwilioClient};
//!
//! # async fn run() -> twilio_adapter::Result<()> {
//! let client = TwilioClient::from_env()?;
//! let sub = client.create_sub_account("Support").await?;
//! let page = client
//!     .list_sub_accounts(ListSubAccountsRequest::new().friendly_name("Support"))
//!     .await?;
//! println!("{} matching subaccounts", page.accounts.len());
//! client.change_sub_account_status(&sub.sid, AccountStatus::Suspended).await?;
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    RestRequest,
    Result,
    TwilioClient,
    TwilioError,
};

// Re-export all types
pub use types::*;
