/*
[INPUT]:  Resource path templates, URL segments and parameters
[OUTPUT]: Resolved relative paths and parameter lists ready to send
[POS]:    HTTP layer - request description consumed by TwilioClient::execute
[UPDATE]: When template syntax or parameter encoding changes
*/

use reqwest::Method;

use crate::http::{Result, TwilioError};

/// Segment defaulted to the configured account when not set explicitly
pub const ACCOUNT_SID_SEGMENT: &str = "AccountSid";

/// Description of a single REST call against a templated resource
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    method: Method,
    resource: String,
    segments: Vec<(String, String)>,
    params: Vec<(String, String)>,
}

impl RestRequest {
    pub fn new(method: Method, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            segments: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn get(resource: impl Into<String>) -> Self {
        Self::new(Method::GET, resource)
    }

    pub fn post(resource: impl Into<String>) -> Self {
        Self::new(Method::POST, resource)
    }

    /// Substitute `{name}` in the resource template with `value`
    pub fn url_segment(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.segments.iter_mut().find(|entry| entry.0 == name) {
            Some(entry) => entry.1 = value,
            None => self.segments.push((name, value)),
        }
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    pub fn parameters<K, V, I>(mut self, params: I) -> Self
    where
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn segment(&self, name: &str) -> Option<&str> {
        self.segments
            .iter()
            .find(|entry| entry.0 == name)
            .map(|(_, value)| value.as_str())
    }

    /// Parameters travel in the query string rather than a form body
    pub fn uses_query(&self) -> bool {
        matches!(self.method, Method::GET | Method::DELETE | Method::HEAD)
    }

    /// Resolve the template into a relative path
    ///
    /// `{AccountSid}` falls back to `default_account_sid` when no segment was
    /// set. Any other unresolved placeholder is an error.
    pub fn resolve_path(&self, default_account_sid: &str) -> Result<String> {
        let mut resolved = String::with_capacity(self.resource.len());
        let mut rest = self.resource.as_str();

        while let Some(open) = rest.find('{') {
            resolved.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                TwilioError::InvalidRequest(format!("unterminated segment in {}", self.resource))
            })?;
            let name = &after[..close];

            let value = match self.segment(name) {
                Some(value) => value,
                None if name == ACCOUNT_SID_SEGMENT => default_account_sid,
                None => {
                    return Err(TwilioError::InvalidRequest(format!(
                        "no value for segment {{{name}}} in {}",
                        self.resource
                    )));
                }
            };
            validate_segment(name, value)?;
            resolved.push_str(value);
            rest = &after[close + 1..];
        }

        resolved.push_str(rest);
        Ok(resolved)
    }
}

fn validate_segment(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(TwilioError::InvalidRequest(format!(
            "segment {{{name}}} is empty"
        )));
    }
    if value.contains(['/', '?', '#', '%', '\\']) || value == "." || value == ".." {
        return Err(TwilioError::InvalidRequest(format!(
            "segment {{{name}}} is not a single path segment: {value}"
        )));
    }
    Ok(())
}
