/*
[INPUT]:  Caller-supplied filters for account endpoints
[OUTPUT]: Typed request structs and their wire parameters
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new filters added
*/

use super::enums::AccountStatus;

pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Filters for the Account List resource
#[derive(Debug, Clone, PartialEq)]
pub struct ListSubAccountsRequest {
    pub friendly_name: Option<String>,
    pub status: Option<AccountStatus>,
    pub page_size: u32,
}

impl Default for ListSubAccountsRequest {
    fn default() -> Self {
        Self {
            friendly_name: None,
            status: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListSubAccountsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match filter on the account friendly name
    pub fn friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    pub fn status(mut self, status: AccountStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Query parameters in wire order
    ///
    /// `Status` is only sent together with a non-empty `FriendlyName`. This
    /// matches the upstream client and is likely a defect there; see DESIGN.md.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let friendly_name = self
            .friendly_name
            .as_deref()
            .filter(|name| !name.is_empty());

        if let Some(name) = friendly_name {
            params.push(("FriendlyName", name.to_string()));
            if let Some(status) = self.status {
                params.push(("Status", status.as_str().to_string()));
            }
        }

        params.push(("PageSize", self.page_size.to_string()));
        params
    }
}
