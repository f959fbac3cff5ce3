//! Pre-synthesis validation of endpoint definitions.
//!
//! Checks run on the raw input, before any naming record or tree exists:
//! - both type fields are present and are strings
//! - the endpoint key has identifier shape (it becomes a method name)
//! - type names are valid, possibly dotted, type references
//! - no two endpoints derive the same hook name

use std::collections::HashSet;

use serde_json::Value;
use tracing::warn;

use crate::config::ValidationMode;
use crate::error::{HookgenError, Result};
use crate::input::{Endpoint, REQUEST_TYPE_FIELD, RESPONSE_TYPE_FIELD};
use crate::ir::utils::{capitalize_first, is_identifier_shaped, is_valid_type_name};

const KEY_FIELD: &str = "key";

/// Validate endpoints according to `mode`.
///
/// Strict mode returns the first problem in input order. Lenient mode logs
/// every problem and succeeds; the deriver then embeds placeholder text.
pub fn validate_endpoints(endpoints: &[Endpoint], mode: ValidationMode) -> Result<()> {
    let issues = collect_issues(endpoints);
    match mode {
        ValidationMode::Strict => match issues.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        },
        ValidationMode::Lenient => {
            for issue in &issues {
                warn!("Generating despite invalid endpoint: {issue}");
            }
            Ok(())
        }
    }
}

/// Every validation problem, in input order.
fn collect_issues(endpoints: &[Endpoint]) -> Vec<HookgenError> {
    let mut issues = Vec::new();
    let mut hook_names = HashSet::new();

    for endpoint in endpoints {
        if !is_identifier_shaped(&endpoint.key) {
            issues.push(HookgenError::InvalidIdentifier {
                key: endpoint.key.clone(),
                field: KEY_FIELD,
                value: endpoint.key.clone(),
            });
        }

        for (field, value) in [
            (REQUEST_TYPE_FIELD, endpoint.request_type.as_ref()),
            (RESPONSE_TYPE_FIELD, endpoint.response_type.as_ref()),
        ] {
            if let Err(err) = check_type_field(&endpoint.key, field, value) {
                issues.push(err);
            }
        }

        let hook_name = format!("use{}", capitalize_first(&endpoint.key));
        if !hook_names.insert(hook_name.clone()) {
            issues.push(HookgenError::DuplicateKey {
                key: endpoint.key.clone(),
                hook_name,
            });
        }
    }

    issues
}

fn check_type_field(key: &str, field: &'static str, value: Option<&Value>) -> Result<()> {
    match value {
        None | Some(Value::Null) => Err(HookgenError::MissingField {
            key: key.to_string(),
            field,
        }),
        Some(Value::String(name)) if is_valid_type_name(name) => Ok(()),
        Some(Value::String(name)) => Err(HookgenError::InvalidIdentifier {
            key: key.to_string(),
            field,
            value: name.clone(),
        }),
        Some(other) => Err(HookgenError::NonStringField {
            key: key.to_string(),
            field,
            value: other.to_string(),
        }),
    }
}
