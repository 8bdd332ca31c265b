/*
[INPUT]:  Twilio account schema and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - account resource model
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::enums::{AccountStatus, AccountType};

/// Snapshot of an Account Instance resource at the time of the call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub sid: String,
    #[serde(default)]
    pub friendly_name: String,
    pub status: AccountStatus,
    /// Parent account, populated for subaccounts
    #[serde(default)]
    pub owner_account_sid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, with = "serde_helpers::rfc2822_option")]
    pub date_created: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "serde_helpers::rfc2822_option")]
    pub date_updated: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default)]
    pub subresource_uris: BTreeMap<String, String>,
}

impl Account {
    pub fn is_sub_account(&self) -> bool {
        self.owner_account_sid
            .as_deref()
            .is_some_and(|owner| owner != self.sid)
    }
}

mod serde_helpers {
    pub mod rfc2822_option {
        use chrono::{DateTime, FixedOffset};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn deserialize<'de, D>(
            deserializer: D,
        ) -> Result<Option<DateTime<FixedOffset>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw {
                None => Ok(None),
                Some(value) if value.trim().is_empty() => Ok(None),
                Some(value) => DateTime::parse_from_rfc2822(&value)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
            }
        }

        pub fn serialize<S>(
            value: &Option<DateTime<FixedOffset>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(date) => serializer.serialize_str(&date.to_rfc2822()),
                None => serializer.serialize_none(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn account_deserializes_full_payload() {
        let value = json!({
            "sid": "AC0123456789abcdef0123456789abcdef",
            "owner_account_sid": "ACffffffffffffffffffffffffffffffff",
            "friendly_name": "Acme Support",
            "status": "suspended",
            "type": "Full",
            "auth_token": "token",
            "date_created": "Thu, 04 Aug 2011 19:53:37 +0000",
            "date_updated": "Fri, 05 Aug 2011 08:00:00 +0000",
            "uri": "/2010-04-01/Accounts/AC0123456789abcdef0123456789abcdef.json",
            "subresource_uris": {
                "calls": "/2010-04-01/Accounts/AC0123456789abcdef0123456789abcdef/Calls.json"
            }
        });

        let account: Account = serde_json::from_value(value).expect("account should deserialize");

        assert_eq!(account.status, AccountStatus::Suspended);
        assert_eq!(account.account_type, Some(AccountType::Full));
        assert!(account.is_sub_account());
        let created = account.date_created.expect("date_created");
        assert_eq!((created.year(), created.month(), created.day()), (2011, 8, 4));
        assert_eq!(created.hour(), 19);
        assert_eq!(account.subresource_uris.len(), 1);
    }

    #[test]
    fn account_deserializes_minimal_payload() {
        let value = json!({
            "sid": "AC0123456789abcdef0123456789abcdef",
            "status": "active",
            "owner_account_sid": null,
            "date_created": null
        });

        let account: Account = serde_json::from_value(value).expect("account should deserialize");

        assert_eq!(account.friendly_name, "");
        assert!(account.owner_account_sid.is_none());
        assert!(account.date_created.is_none());
        assert!(!account.is_sub_account());
    }

    #[test]
    fn master_account_owning_itself_is_not_sub_account() {
        let value = json!({
            "sid": "AC1",
            "owner_account_sid": "AC1",
            "status": "active"
        });

        let account: Account = serde_json::from_value(value).expect("account should deserialize");

        assert!(!account.is_sub_account());
    }

    #[test]
    fn account_rejects_malformed_date() {
        let value = json!({
            "sid": "AC1",
            "status": "active",
            "date_created": "yesterday"
        });

        assert!(serde_json::from_value::<Account>(value).is_err());
    }
}
