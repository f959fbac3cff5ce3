//! Code generation from naming records to TypeScript AST.
//!
//! Each naming record becomes one module with exactly two statements:
//!
//! ```ts
//! export interface UsePoolsQuery<TData> extends ReactQueryParams<QueryPoolsResponse, TData> {
//!     request?: QueryPoolsRequest;
//! }
//! export const usePools = <TData = QueryPoolsResponse,>({
//!     request,
//!     options
//! }: UsePoolsQuery<TData>) => {
//!     return useQuery<QueryPoolsResponse, Error, TData>(["poolsQuery", request], () => {
//!         if (!queryService) throw new Error("Query Service not initialized");
//!         return queryService.pools(request);
//!     }, options);
//! };
//! ```
//!
//! `useQuery`, `queryService`, `Error` and `ReactQueryParams` are free
//! identifiers; the consuming file must bring them into scope.

use rayon::prelude::*;

use super::params::NamingRecord;
use super::types::{
    TsArrow, TsDecl, TsExpr, TsInterface, TsModule, TsModuleItem, TsParam, TsProp, TsStmt,
    TsTypeParam, TsTypeRef, TsVarDecl,
};
use crate::config::CodegenConfig;

/// Generic data parameter shared by the interface and the hook.
const TDATA: &str = "TData";
/// Base interface every params interface extends.
const BASE_PARAMS_TYPE: &str = "ReactQueryParams";
/// Query hook wrapped by every generated hook.
const USE_QUERY_FN: &str = "useQuery";
/// Query service object the fetcher calls into.
const QUERY_SERVICE: &str = "queryService";
const ERROR_CLASS: &str = "Error";
const NOT_INITIALIZED_MESSAGE: &str = "Query Service not initialized";
const REQUEST: &str = "request";
const OPTIONS: &str = "options";

/// Synthesize the module for one naming record with default options.
pub fn synthesize(record: &NamingRecord) -> TsModule {
    synthesize_with(record, &CodegenConfig::default())
}

/// Synthesize the module for one naming record.
pub fn synthesize_with(record: &NamingRecord, config: &CodegenConfig) -> TsModule {
    TsModule {
        items: vec![
            TsModuleItem::exported(TsDecl::Interface(codegen_params_interface(record))),
            TsModuleItem {
                export: config.export_hook,
                decl: TsDecl::Var(codegen_hook(record)),
            },
        ],
    }
}

/// Synthesize one module per record, in input order.
pub fn synthesize_all(records: &[NamingRecord], config: &CodegenConfig) -> Vec<TsModule> {
    if config.parallel {
        records
            .par_iter()
            .map(|record| synthesize_with(record, config))
            .collect()
    } else {
        records
            .iter()
            .map(|record| synthesize_with(record, config))
            .collect()
    }
}

/// `interface UsePoolsQuery<TData> extends ReactQueryParams<Response, TData> { request?: Request }`
fn codegen_params_interface(record: &NamingRecord) -> TsInterface {
    TsInterface {
        name: record.query_interface().to_string(),
        type_params: vec![TsTypeParam::new(TDATA)],
        extends: vec![TsTypeRef::generic(
            BASE_PARAMS_TYPE,
            vec![
                TsTypeRef::named(record.response_type()),
                TsTypeRef::named(TDATA),
            ],
        )],
        body: vec![TsProp {
            name: REQUEST.into(),
            ty: TsTypeRef::named(record.request_type()),
            optional: true,
        }],
    }
}

/// `const usePools = <TData = Response,>({ request, options }: UsePoolsQuery<TData>) => { ... }`
fn codegen_hook(record: &NamingRecord) -> TsVarDecl {
    let param = TsParam::destructured(
        [REQUEST, OPTIONS],
        TsTypeRef::generic(record.query_interface(), vec![TsTypeRef::named(TDATA)]),
    );

    let arrow = TsArrow {
        type_params: vec![
            TsTypeParam::new(TDATA).with_default(TsTypeRef::named(record.response_type())),
        ],
        params: vec![param],
        body: vec![TsStmt::ret(codegen_use_query_call(record))],
    };

    TsVarDecl {
        name: record.hook_name().to_string(),
        init: TsExpr::arrow(arrow),
    }
}

/// `useQuery<Response, Error, TData>(["poolsQuery", request], () => { ... }, options)`
fn codegen_use_query_call(record: &NamingRecord) -> TsExpr {
    let query_key = TsExpr::array(vec![
        TsExpr::string(record.key_name()),
        TsExpr::ident(REQUEST),
    ]);

    TsExpr::call_generic(
        TsExpr::ident(USE_QUERY_FN),
        vec![
            TsTypeRef::named(record.response_type()),
            TsTypeRef::named(ERROR_CLASS),
            TsTypeRef::named(TDATA),
        ],
        vec![query_key, codegen_query_fn(record), TsExpr::ident(OPTIONS)],
    )
}

/// Parameterless fetcher: guard on the query service, then delegate to its method.
fn codegen_query_fn(record: &NamingRecord) -> TsExpr {
    let guard = TsStmt::if_then(
        TsExpr::negate(TsExpr::ident(QUERY_SERVICE)),
        TsStmt::throw(TsExpr::construct(
            TsExpr::ident(ERROR_CLASS),
            vec![TsExpr::string(NOT_INITIALIZED_MESSAGE)],
        )),
    );

    let delegate = TsStmt::ret(TsExpr::call(
        TsExpr::member(
            TsExpr::ident(QUERY_SERVICE),
            record.query_service_method_name(),
        ),
        vec![TsExpr::ident(REQUEST)],
    ));

    TsExpr::arrow(TsArrow {
        type_params: Vec::new(),
        params: Vec::new(),
        body: vec![guard, delegate],
    })
}
