//! Intermediate Representation for React Query hook generation.
//!
//! Three layers, each consuming the one before it:
//! 1. Naming: endpoint definitions -> `NamingRecord` (pure string derivation)
//! 2. TypeScript AST IR: interfaces, arrow functions, statements, modules
//! 3. Emission: AST to TypeScript code strings via the `Emit` trait
//!
//! Synthesis never fails. Anything that can go wrong is caught on the raw
//! input by `crate::validate` before a record reaches this module.
//!
//! ## Module Structure
//!
//! - `params`: Endpoint -> NamingRecord derivation
//! - `types`: TypeScript AST IR (TsTypeRef, TsExpr, TsStmt, TsInterface, TsModule)
//! - `codegen`: NamingRecord -> TsModule
//! - `emit`: TsModule -> code string (via Emit trait)
//! - `utils`: Identifier checks and string helpers shared across modules

mod codegen;
mod emit;
mod params;
mod types;
pub(crate) mod utils;

pub use codegen::{synthesize, synthesize_all, synthesize_with};
pub use emit::{Emit, EmitOptions, Indent};
pub use params::{MISSING_TYPE_PLACEHOLDER, NamingRecord, derive_params};
pub use types::{
    TsArrow, TsDecl, TsExpr, TsInterface, TsModule, TsModuleItem, TsParam, TsProp, TsStmt,
    TsTypeParam, TsTypeRef, TsVarDecl,
};
