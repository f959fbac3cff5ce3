//! Endpoint definition structs for serde deserialization.
//!
//! The input document is a JSON object mapping endpoint keys to their
//! request/response type names:
//!
//! ```json
//! { "Pools": { "requestType": "QueryPoolsRequest", "responseType": "QueryPoolsResponse" } }
//! ```
//!
//! It is read into an ordered list of triples so document order survives
//! without relying on map iteration order.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Name of the request type field in the input document.
pub const REQUEST_TYPE_FIELD: &str = "requestType";
/// Name of the response type field in the input document.
pub const RESPONSE_TYPE_FIELD: &str = "responseType";

/// One endpoint definition: `(key, requestType, responseType)`.
///
/// Type fields keep the raw JSON value so that validation can tell an absent
/// field from a null or non-string one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Endpoint key, the source of every derived name
    pub key: String,
    /// Raw `requestType` value (None when absent)
    pub request_type: Option<Value>,
    /// Raw `responseType` value (None when absent)
    pub response_type: Option<Value>,
}

impl Endpoint {
    /// Build an endpoint from string type names.
    pub fn new(
        key: impl Into<String>,
        request_type: impl Into<String>,
        response_type: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            request_type: Some(Value::String(request_type.into())),
            response_type: Some(Value::String(response_type.into())),
        }
    }
}

/// Per-endpoint value in the input document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEndpoint {
    #[serde(default, deserialize_with = "present")]
    request_type: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    response_type: Option<Value>,
}

/// Wrap any present value, `null` included, so only absent fields become `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Ordered endpoint list, deserialized from a JSON object.
#[derive(Debug)]
struct EndpointList(Vec<Endpoint>);

impl<'de> Deserialize<'de> for EndpointList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EndpointListVisitor;

        impl<'de> Visitor<'de> for EndpointListVisitor {
            type Value = EndpointList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping endpoint names to request/response types")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut endpoints = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, raw)) = map.next_entry::<String, RawEndpoint>()? {
                    endpoints.push(Endpoint {
                        key,
                        request_type: raw.request_type,
                        response_type: raw.response_type,
                    });
                }
                Ok(EndpointList(endpoints))
            }
        }

        deserializer.deserialize_map(EndpointListVisitor)
    }
}

/// Parse an endpoint definition document, preserving key order.
pub fn parse_endpoints(json: &str) -> Result<Vec<Endpoint>> {
    let EndpointList(endpoints) = serde_json::from_str(json)?;
    Ok(endpoints)
}
