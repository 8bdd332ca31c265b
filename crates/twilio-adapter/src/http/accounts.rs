/*
[INPUT]:  Account sids, friendly names, status changes and list filters
[OUTPUT]: Account snapshots and Account List pages
[POS]:    HTTP layer - Accounts resource endpoints (basic auth)
[UPDATE]: When adding account endpoints or changing parameters
*/

use tracing::warn;

use crate::http::resource::{ACCOUNT_SID_SEGMENT, RestRequest};
use crate::http::{Result, TwilioClient, TwilioError};
use crate::types::{Account, AccountResult, AccountStatus, ListSubAccountsRequest};

const ACCOUNT_INSTANCE: &str = "Accounts/{AccountSid}.json";
const ACCOUNT_LIST: &str = "Accounts.json";

impl TwilioClient {
    /// Retrieve the authenticated account
    ///
    /// GET /Accounts/{AccountSid}.json
    pub async fn get_account(&self) -> Result<Account> {
        self.execute(RestRequest::get(ACCOUNT_INSTANCE)).await
    }

    /// Retrieve a subaccount by sid
    ///
    /// GET /Accounts/{AccountSid}.json
    pub async fn get_account_by_sid(&self, account_sid: &str) -> Result<Account> {
        let request = RestRequest::get(ACCOUNT_INSTANCE).url_segment(ACCOUNT_SID_SEGMENT, account_sid);
        self.execute(request).await
    }

    /// List subaccounts of the authenticated account
    ///
    /// GET /Accounts.json?FriendlyName={name}&Status={status}&PageSize={size}
    pub async fn list_sub_accounts(&self, filter: ListSubAccountsRequest) -> Result<AccountResult> {
        let request = RestRequest::get(ACCOUNT_LIST).parameters(filter.to_params());
        self.execute(request).await
    }

    /// List subaccounts using the default page size and no filters
    pub async fn list_all_sub_accounts(&self) -> Result<AccountResult> {
        self.list_sub_accounts(ListSubAccountsRequest::default()).await
    }

    /// Create a subaccount; an empty name lets Twilio assign a default
    ///
    /// POST /Accounts.json
    pub async fn create_sub_account(&self, friendly_name: &str) -> Result<Account> {
        let request = RestRequest::post(ACCOUNT_LIST).parameter("FriendlyName", friendly_name);
        self.execute(request).await
    }

    /// Change the status of a subaccount
    ///
    /// POST /Accounts/{AccountSid}.json
    ///
    /// Must be called from the master account. Targeting the authenticated
    /// account itself fails with [`TwilioError::InvalidOperation`] without
    /// sending a request. Closing is permanent: Twilio releases the account's
    /// phone numbers and a closed account cannot be reopened.
    pub async fn change_sub_account_status(
        &self,
        sub_account_sid: &str,
        status: AccountStatus,
    ) -> Result<Account> {
        if sub_account_sid == self.account_sid() {
            warn!(%status, "refusing to change status of the authenticated account");
            return Err(TwilioError::InvalidOperation(
                "subaccount status can only be changed when authenticated from the master account"
                    .to_string(),
            ));
        }

        let request = RestRequest::post(ACCOUNT_INSTANCE)
            .url_segment(ACCOUNT_SID_SEGMENT, sub_account_sid)
            .parameter("Status", status.as_str());
        self.execute(request).await
    }

    pub async fn suspend_sub_account(&self, sub_account_sid: &str) -> Result<Account> {
        self.change_sub_account_status(sub_account_sid, AccountStatus::Suspended)
            .await
    }

    pub async fn activate_sub_account(&self, sub_account_sid: &str) -> Result<Account> {
        self.change_sub_account_status(sub_account_sid, AccountStatus::Active)
            .await
    }

    /// Close a subaccount permanently
    pub async fn close_sub_account(&self, sub_account_sid: &str) -> Result<Account> {
        self.change_sub_account_status(sub_account_sid, AccountStatus::Closed)
            .await
    }

    /// Rename the authenticated account
    ///
    /// POST /Accounts/{AccountSid}.json
    pub async fn update_account_name(&self, friendly_name: &str) -> Result<Account> {
        let request = RestRequest::post(ACCOUNT_INSTANCE).parameter("FriendlyName", friendly_name);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, TwilioClient, TwilioError};
    use crate::types::AccountStatus;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_update_account_name_targets_configured_account() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "sid": "AC_master",
            "friendly_name": "Renamed",
            "status": "active",
            "owner_account_sid": "AC_master"
        }"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/Accounts/AC_master.json"))
            .and(body_string("FriendlyName=Renamed"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = TwilioClient::with_config_and_base_url(
            Credentials::new("AC_master", "token"),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init");

        let account = client
            .update_account_name("Renamed")
            .await
            .expect("update_account_name failed");

        assert_eq!(account.friendly_name, "Renamed");
        assert_eq!(account.status, AccountStatus::Active);
    }

    #[tokio::test]
    async fn test_change_own_status_fails_before_sending() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = TwilioClient::with_config_and_base_url(
            Credentials::new("AC_master", "token"),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init");

        let err = client
            .close_sub_account("AC_master")
            .await
            .expect_err("self status change must fail");

        assert!(matches!(err, TwilioError::InvalidOperation(_)));
        assert!(!err.is_request_error());
    }
}
