/*
[INPUT]:  Twilio list envelopes and error bodies
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - response wrappers for account endpoints
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::Account;

/// Account List resource envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResult {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub num_pages: Option<u32>,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub first_page_uri: Option<String>,
    #[serde(default)]
    pub next_page_uri: Option<String>,
    #[serde(default)]
    pub previous_page_uri: Option<String>,
    #[serde(default)]
    pub last_page_uri: Option<String>,
}

impl AccountResult {
    pub fn has_next_page(&self) -> bool {
        self.next_page_uri.is_some()
    }
}

/// Error body returned with non-success responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestException {
    #[serde(default)]
    pub code: Option<i32>,
    pub message: String,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}
