//! React Query hook generator for RPC query services.
//!
//! Takes an endpoint document mapping endpoint keys to request/response type
//! names and produces, per endpoint, a TypeScript params interface plus a
//! `useQuery`-wrapping hook constant.
//!
//! ```
//! let ts = query_hookgen::generate(
//!     r#"{ "Pools": { "requestType": "QueryPoolsRequest", "responseType": "QueryPoolsResponse" } }"#,
//! )?;
//! assert!(ts.starts_with("export interface UsePoolsQuery<TData>"));
//! assert!(ts.contains("return queryService.pools(request);"));
//! # Ok::<(), query_hookgen::HookgenError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(warnings, unused_must_use, dead_code, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod config;
mod emitter;
mod error;
mod input;
pub mod ir;
mod validate;

pub use config::{CodegenConfig, ValidationMode};
pub use emitter::{GeneratedHook, generate, generate_modules, generate_with};
pub use error::{HookgenError, Result};
pub use input::{Endpoint, REQUEST_TYPE_FIELD, RESPONSE_TYPE_FIELD, parse_endpoints};
pub use ir::{NamingRecord, derive_params, synthesize, synthesize_all, synthesize_with};
pub use validate::validate_endpoints;

/// Install a stderr `fmt` subscriber for this crate's logs.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let crate_root = module_path!().to_string();

    // HOOKGEN_LOG takes a level ("debug") or a full filter spec ("query_hookgen=debug")
    let filter = match std::env::var("HOOKGEN_LOG") {
        Ok(level) if is_plain_level(&level) => format!("{crate_root}={level}"),
        Ok(spec) => spec,
        Err(_) => format!("{crate_root}=info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already initialized.");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plain_level() {
        assert!(is_plain_level("debug"));
        assert!(is_plain_level("WARN"));
        assert!(!is_plain_level("query_hookgen=debug"));
        assert!(!is_plain_level(""));
    }
}
