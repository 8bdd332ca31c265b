/*
[INPUT]:  Twilio account resource schema
[OUTPUT]: Account models, filters, envelopes and status enums
[POS]:    Data layer - type definitions for the Accounts resource
[UPDATE]: When account fields or list filters change
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::{AccountStatus, AccountType};
pub use models::Account;
pub use requests::{DEFAULT_PAGE_SIZE, ListSubAccountsRequest};
pub use responses::{AccountResult, RestException};
