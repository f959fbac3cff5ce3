//! Naming records derived from endpoint definitions.
//!
//! Every generated name follows a fixed convention keyed on the endpoint key:
//!
//! | Field                     | Rule                               |
//! |---------------------------|------------------------------------|
//! | `queryInterface`          | `Use` + Capitalize(key) + `Query`  |
//! | `hookName`                | `use` + Capitalize(key)            |
//! | `requestType`             | requestType, stringified           |
//! | `responseType`            | responseType, stringified          |
//! | `queryServiceMethodName`  | Lowercase(key)                     |
//! | `keyName`                 | Lowercase(key) + `Query`           |
//!
//! Capitalize/Lowercase touch only the first character.

use serde::Serialize;
use serde_json::Value;

use super::utils::{capitalize_first, lowercase_first};
use crate::input::Endpoint;

/// Stand-in text for an absent type field.
pub const MISSING_TYPE_PLACEHOLDER: &str = "undefined";

/// Canonical per-endpoint set of derived names.
///
/// Fields are only reachable through accessors: every name is a function of
/// the endpoint key and the two type names, so none can be set on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingRecord {
    query_interface: String,
    hook_name: String,
    request_type: String,
    response_type: String,
    query_service_method_name: String,
    key_name: String,
}

impl NamingRecord {
    /// Derive the naming record for one endpoint key.
    pub fn derive(
        key: &str,
        request_type: impl Into<String>,
        response_type: impl Into<String>,
    ) -> Self {
        let capitalized = capitalize_first(key);
        let lowercased = lowercase_first(key);

        Self {
            query_interface: format!("Use{capitalized}Query"),
            hook_name: format!("use{capitalized}"),
            request_type: request_type.into(),
            response_type: response_type.into(),
            key_name: format!("{lowercased}Query"),
            query_service_method_name: lowercased,
        }
    }

    /// Derive the naming record for a parsed endpoint, stringifying its type fields.
    pub fn from_endpoint(endpoint: &Endpoint) -> Self {
        Self::derive(
            &endpoint.key,
            stringify_field(endpoint.request_type.as_ref()),
            stringify_field(endpoint.response_type.as_ref()),
        )
    }

    /// Params interface name: `UsePoolsQuery`
    pub fn query_interface(&self) -> &str {
        &self.query_interface
    }

    /// Hook constant name: `usePools`
    pub fn hook_name(&self) -> &str {
        &self.hook_name
    }

    /// Request type name: `QueryPoolsRequest`
    pub fn request_type(&self) -> &str {
        &self.request_type
    }

    /// Response type name: `QueryPoolsResponse`
    pub fn response_type(&self) -> &str {
        &self.response_type
    }

    /// Query service method: `pools`
    pub fn query_service_method_name(&self) -> &str {
        &self.query_service_method_name
    }

    /// Query key literal: `poolsQuery`
    pub fn key_name(&self) -> &str {
        &self.key_name
    }
}

/// Text of a raw type field. Absent fields become the placeholder, any other
/// non-string value (`null` included) its JSON text.
fn stringify_field(value: Option<&Value>) -> String {
    match value {
        None => MISSING_TYPE_PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Derive one naming record per endpoint, in input order.
pub fn derive_params(endpoints: &[Endpoint]) -> Vec<NamingRecord> {
    endpoints.iter().map(NamingRecord::from_endpoint).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_derive_pools() {
        let record = NamingRecord::derive("Pools", "QueryPoolsRequest", "QueryPoolsResponse");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "queryInterface": "UsePoolsQuery",
                "hookName": "usePools",
                "requestType": "QueryPoolsRequest",
                "responseType": "QueryPoolsResponse",
                "queryServiceMethodName": "pools",
                "keyName": "poolsQuery"
            })
        );
    }

    #[test]
    fn test_derive_lowercase_key() {
        let record =
            NamingRecord::derive("numPools", "QueryNumPoolsRequest", "QueryNumPoolsResponse");
        assert_eq!(record.query_interface(), "UseNumPoolsQuery");
        assert_eq!(record.hook_name(), "useNumPools");
        assert_eq!(record.query_service_method_name(), "numPools");
        assert_eq!(record.key_name(), "numPoolsQuery");
    }

    #[test]
    fn test_only_first_character_changes() {
        let record = NamingRecord::derive("SPOTPrice", "A", "B");
        assert_eq!(record.query_interface(), "UseSPOTPriceQuery");
        assert_eq!(record.query_service_method_name(), "sPOTPrice");
    }

    #[test]
    fn test_derive_empty_key() {
        let record = NamingRecord::derive("", "Req", "Res");
        assert_eq!(record.query_interface(), "UseQuery");
        assert_eq!(record.hook_name(), "use");
        assert_eq!(record.query_service_method_name(), "");
        assert_eq!(record.key_name(), "Query");
    }

    #[test]
    fn test_missing_fields_use_placeholder() {
        let endpoint = Endpoint {
            key: "Pools".into(),
            request_type: None,
            response_type: Some(json!(42)),
        };
        let record = NamingRecord::from_endpoint(&endpoint);
        assert_eq!(record.request_type(), "undefined");
        assert_eq!(record.response_type(), "42");
    }

    #[test]
    fn test_null_field_stringifies_as_null() {
        let endpoint = Endpoint {
            key: "Pools".into(),
            request_type: Some(Value::Null),
            response_type: None,
        };
        let record = NamingRecord::from_endpoint(&endpoint);
        assert_eq!(record.request_type(), "null");
        assert_eq!(record.response_type(), "undefined");
    }

    #[test]
    fn test_derive_params_preserves_order_and_count() {
        let endpoints = vec![
            Endpoint::new("Pools", "QueryPoolsRequest", "QueryPoolsResponse"),
            Endpoint::new("Accounts", "QueryAccountsRequest", "QueryAccountsResponse"),
            Endpoint::new("Params", "QueryParamsRequest", "QueryParamsResponse"),
        ];
        let records = derive_params(&endpoints);
        assert_eq!(records.len(), 3);
        let hooks: Vec<_> = records.iter().map(|r| r.hook_name()).collect();
        assert_eq!(hooks, ["usePools", "useAccounts", "useParams"]);
    }
}
