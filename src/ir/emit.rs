//! TypeScript code emission via the Emit trait.
//!
//! This module provides a trait-based approach to converting TypeScript AST nodes
//! to string representations. Each AST type implements `Emit` for clean, composable
//! code generation. Nodes that contain blocks (arrow functions, destructuring
//! patterns) receive the current `Indent` so nested bodies line up with the
//! statement that owns them.

use super::types::{
    TsArrow, TsDecl, TsExpr, TsInterface, TsModule, TsModuleItem, TsParam, TsProp, TsStmt,
    TsTypeParam, TsTypeRef, TsVarDecl,
};
use super::utils::{escape_js_string, quote_if_needed};

/// Renderer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces per indentation level
    pub indent_width: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Current indentation: width of one level and nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
    depth: usize,
}

impl Indent {
    /// Top-level indentation with the given level width.
    pub fn new(width: usize) -> Self {
        Self { width, depth: 0 }
    }

    /// One level deeper.
    pub fn nested(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    /// Leading whitespace for a line at this depth.
    pub fn pad(self) -> String {
        " ".repeat(self.width * self.depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::new(EmitOptions::default().indent_width)
    }
}

/// Trait for emitting TypeScript code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its TypeScript string representation at the given indentation.
    fn emit_at(&self, indent: Indent) -> String;

    /// Convert the AST node to its TypeScript string representation.
    fn emit(&self) -> String {
        self.emit_at(Indent::default())
    }
}

/// Emit each item and join with `", "`.
fn emit_list<T: Emit>(items: &[T], indent: Indent) -> String {
    items
        .iter()
        .map(|item| item.emit_at(indent))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `<A, B>` or nothing for an empty list.
fn emit_type_args(args: &[TsTypeRef], indent: Indent) -> String {
    if args.is_empty() {
        String::new()
    } else {
        format!("<{}>", emit_list(args, indent))
    }
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsTypeRef {
    fn emit_at(&self, indent: Indent) -> String {
        format!("{}{}", self.name, emit_type_args(&self.type_args, indent))
    }
}

impl Emit for TsTypeParam {
    fn emit_at(&self, indent: Indent) -> String {
        match &self.default {
            Some(default) => format!("{} = {}", self.name, default.emit_at(indent)),
            None => self.name.clone(),
        }
    }
}

impl Emit for TsProp {
    fn emit_at(&self, indent: Indent) -> String {
        let key = quote_if_needed(&self.name);
        let opt = if self.optional { "?" } else { "" };
        format!("{}{}: {}", key, opt, self.ty.emit_at(indent))
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for TsExpr {
    fn emit_at(&self, indent: Indent) -> String {
        match self {
            TsExpr::Ident(name) => name.clone(),
            TsExpr::Str(value) => format!("\"{}\"", escape_js_string(value)),
            TsExpr::Array(items) => format!("[{}]", emit_list(items, indent)),
            TsExpr::Member { object, prop } => {
                format!("{}.{}", object.emit_at(indent), prop)
            }
            TsExpr::Call {
                callee,
                type_args,
                args,
            } => format!(
                "{}{}({})",
                callee.emit_at(indent),
                emit_type_args(type_args, indent),
                emit_list(args, indent)
            ),
            TsExpr::New { callee, args } => {
                format!("new {}({})", callee.emit_at(indent), emit_list(args, indent))
            }
            TsExpr::Not(arg) => format!("!{}", arg.emit_at(indent)),
            TsExpr::Arrow(arrow) => arrow.emit_at(indent),
        }
    }
}

impl Emit for TsArrow {
    fn emit_at(&self, indent: Indent) -> String {
        let mut output = String::new();
        // Trailing comma keeps `<T,>` from parsing as a JSX tag in .tsx files
        if !self.type_params.is_empty() {
            output.push_str(&format!("<{},>", emit_list(&self.type_params, indent)));
        }
        output.push_str(&format!("({}) => ", emit_list(&self.params, indent)));
        output.push_str(&emit_block(&self.body, indent));
        output
    }
}

impl Emit for TsParam {
    fn emit_at(&self, indent: Indent) -> String {
        let ty = self.ty.emit_at(indent);
        if self.bindings.is_empty() {
            return format!("{{}}: {ty}");
        }
        let inner = indent.nested().pad();
        let lines = self
            .bindings
            .iter()
            .map(|name| format!("{inner}{name}"))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{{\n{}\n{}}}: {}", lines, indent.pad(), ty)
    }
}

// =============================================================================
// Statements
// =============================================================================

/// Braced block whose statements sit one level deeper than `indent`.
fn emit_block(stmts: &[TsStmt], indent: Indent) -> String {
    if stmts.is_empty() {
        return "{}".to_string();
    }
    let mut output = String::from("{\n");
    for stmt in stmts {
        output.push_str(&stmt.emit_at(indent.nested()));
    }
    output.push_str(&indent.pad());
    output.push('}');
    output
}

impl TsStmt {
    /// Statement text without leading indentation or trailing newline.
    fn emit_inline(&self, indent: Indent) -> String {
        match self {
            TsStmt::Return(expr) => format!("return {};", expr.emit_at(indent)),
            TsStmt::Throw(expr) => format!("throw {};", expr.emit_at(indent)),
            TsStmt::If { cond, then_stmt } => format!(
                "if ({}) {}",
                cond.emit_at(indent),
                then_stmt.emit_inline(indent)
            ),
        }
    }
}

impl Emit for TsStmt {
    fn emit_at(&self, indent: Indent) -> String {
        format!("{}{}\n", indent.pad(), self.emit_inline(indent))
    }
}

// =============================================================================
// Declarations
// =============================================================================

impl Emit for TsInterface {
    fn emit_at(&self, indent: Indent) -> String {
        let mut output = format!("interface {}", self.name);
        if !self.type_params.is_empty() {
            output.push_str(&format!("<{}>", emit_list(&self.type_params, indent)));
        }
        if !self.extends.is_empty() {
            output.push_str(&format!(" extends {}", emit_list(&self.extends, indent)));
        }
        output.push_str(" {\n");
        let inner = indent.nested();
        for prop in &self.body {
            output.push_str(&format!("{}{};\n", inner.pad(), prop.emit_at(inner)));
        }
        output.push_str(&indent.pad());
        output.push('}');
        output
    }
}

impl Emit for TsVarDecl {
    fn emit_at(&self, indent: Indent) -> String {
        format!("const {} = {};", self.name, self.init.emit_at(indent))
    }
}

impl Emit for TsDecl {
    fn emit_at(&self, indent: Indent) -> String {
        match self {
            TsDecl::Interface(interface) => interface.emit_at(indent),
            TsDecl::Var(var) => var.emit_at(indent),
        }
    }
}

impl Emit for TsModuleItem {
    fn emit_at(&self, indent: Indent) -> String {
        let export = if self.export { "export " } else { "" };
        format!("{}{}{}\n", indent.pad(), export, self.decl.emit_at(indent))
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for TsModule {
    fn emit_at(&self, indent: Indent) -> String {
        self.items.iter().map(|item| item.emit_at(indent)).collect()
    }
}

impl TsModule {
    /// Render the module with explicit renderer options.
    pub fn emit_with(&self, options: EmitOptions) -> String {
        self.emit_at(Indent::new(options.indent_width))
    }
}

// =============================================================================
// Tests
// =============================================================================
