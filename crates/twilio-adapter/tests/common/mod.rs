/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for twilio-adapter tests

use serde_json::{Value, json};
use twilio_adapter::{ClientConfig, Credentials, TwilioClient};
use wiremock::MockServer;

pub const MASTER_SID: &str = "AC00000000000000000000000000000001";
#[allow(dead_code)]
pub const SUB_SID: &str = "AC00000000000000000000000000000002";
pub const AUTH_TOKEN: &str = "test_auth_token";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client authenticated as the master account, pointed at the mock server
pub fn test_client(server: &MockServer) -> TwilioClient {
    TwilioClient::with_config_and_base_url(
        Credentials::new(MASTER_SID, AUTH_TOKEN),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}

/// Account Instance body as returned by Twilio
pub fn account_json(sid: &str, friendly_name: &str, status: &str) -> Value {
    json!({
        "sid": sid,
        "owner_account_sid": MASTER_SID,
        "friendly_name": friendly_name,
        "status": status,
        "type": "Full",
        "auth_token": "sub_token",
        "date_created": "Thu, 04 Aug 2011 19:53:37 +0000",
        "date_updated": "Thu, 04 Aug 2011 19:53:37 +0000",
        "uri": format!("/2010-04-01/Accounts/{sid}.json"),
        "subresource_uris": {
            "calls": format!("/2010-04-01/Accounts/{sid}/Calls.json")
        }
    })
}

/// Account List body wrapping `accounts`
#[allow(dead_code)]
pub fn account_list_json(accounts: Vec<Value>, page_size: u32) -> Value {
    let total = accounts.len();
    json!({
        "accounts": accounts,
        "page": 0,
        "num_pages": 1,
        "page_size": page_size,
        "total": total,
        "start": 0,
        "end": total.saturating_sub(1),
        "uri": format!("/2010-04-01/Accounts.json?PageSize={page_size}"),
        "first_page_uri": format!("/2010-04-01/Accounts.json?Page=0&PageSize={page_size}"),
        "next_page_uri": null,
        "previous_page_uri": null,
        "last_page_uri": format!("/2010-04-01/Accounts.json?Page=0&PageSize={page_size}")
    })
}
