//! Hook module generation for endpoint documents.
//!
//! This module is a thin wrapper around the IR-based code generation.
//! The pipeline is:
//! 1. Parse: endpoint JSON -> `Vec<Endpoint>`
//! 2. Validate: reject (or warn about) unusable endpoints
//! 3. Derive: Endpoint -> NamingRecord
//! 4. Synthesize: NamingRecord -> TsModule (TypeScript AST)
//! 5. Emit: TsModule -> String (via Emit trait)

use tracing::debug;

use crate::config::CodegenConfig;
use crate::error::Result;
use crate::input::{Endpoint, parse_endpoints};
use crate::ir::{NamingRecord, TsModule, derive_params, synthesize_all};
use crate::validate::validate_endpoints;

/// One endpoint's naming record together with its synthesized module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHook {
    /// Names derived from the endpoint
    pub record: NamingRecord,
    /// Interface and hook declarations for the endpoint
    pub module: TsModule,
}

impl GeneratedHook {
    /// Render the module with the given config's emit options.
    pub fn render(&self, config: &CodegenConfig) -> String {
        self.module.emit_with(config.emit_options())
    }
}

/// Validate, derive and synthesize every endpoint, in input order.
pub fn generate_modules(
    endpoints: &[Endpoint],
    config: &CodegenConfig,
) -> Result<Vec<GeneratedHook>> {
    validate_endpoints(endpoints, config.validation)?;

    let records = derive_params(endpoints);
    let modules = synthesize_all(&records, config);
    debug!(
        count = modules.len(),
        parallel = config.parallel,
        "Synthesized hook modules."
    );

    Ok(records
        .into_iter()
        .zip(modules)
        .map(|(record, module)| GeneratedHook { record, module })
        .collect())
}

/// Generate TypeScript source from an endpoint JSON document using the default config.
pub fn generate(endpoints_json: &str) -> Result<String> {
    generate_with(endpoints_json, &CodegenConfig::default())
}

/// Generate TypeScript source from an endpoint JSON document.
///
/// Modules are rendered in input order and joined with a blank line.
pub fn generate_with(endpoints_json: &str, config: &CodegenConfig) -> Result<String> {
    let endpoints = parse_endpoints(endpoints_json)?;
    debug!(count = endpoints.len(), "Parsed endpoint document.");

    let hooks = generate_modules(&endpoints, config)?;
    Ok(hooks
        .iter()
        .map(|hook| hook.render(config))
        .collect::<Vec<_>>()
        .join("\n"))
}
