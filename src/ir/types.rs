//! TypeScript AST IR for hook generation.
//!
//! This module defines a small closed set of node types:
//! - TsTypeRef / TsTypeParam: type positions and generic parameters
//! - TsExpr / TsArrow / TsParam: expressions, arrow functions, destructured parameters
//! - TsStmt: statements inside function bodies
//! - TsInterface / TsVarDecl / TsModule: top-level declarations
//!
//! Only the constructs a hook module needs are representable. Nodes are
//! plain owned data. Every tree is built fresh and never shared,
//! so equality is structural.

// =============================================================================
// Types
// =============================================================================

/// Reference to a named type, optionally instantiated: `Foo`, `Foo<A, B>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeRef {
    /// Type name, possibly dotted (`cosmos.QueryParamsRequest`)
    pub name: String,
    /// Type arguments; empty for a bare reference
    pub type_args: Vec<TsTypeRef>,
}

impl TsTypeRef {
    /// Bare reference to a named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    /// Generic instantiation: `name<args...>`.
    pub fn generic(name: impl Into<String>, type_args: Vec<TsTypeRef>) -> Self {
        Self {
            name: name.into(),
            type_args,
        }
    }
}

/// Type parameter declaration: `T`, `T = U`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeParam {
    /// Parameter name
    pub name: String,
    /// Optional default type
    pub default: Option<TsTypeRef>,
}

impl TsTypeParam {
    /// Type parameter without a default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Set the default type of this parameter.
    pub fn with_default(mut self, default: TsTypeRef) -> Self {
        self.default = Some(default);
        self
    }
}

/// Property signature inside an interface body: `name?: Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsProp {
    /// Property name
    pub name: String,
    /// Property type
    pub ty: TsTypeRef,
    /// Whether the property carries the `?` marker
    pub optional: bool,
}

// =============================================================================
// Expressions
// =============================================================================

/// TypeScript expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsExpr {
    /// Identifier: foo
    Ident(String),
    /// String literal: "bar"
    Str(String),
    /// Array literal: [a, b, c]
    Array(Vec<TsExpr>),
    /// Member access: foo.bar
    Member {
        /// Accessed object
        object: Box<TsExpr>,
        /// Property name
        prop: String,
    },
    /// Function call with optional type arguments: foo<A, B>(a, b)
    Call {
        /// Called expression
        callee: Box<TsExpr>,
        /// Explicit type arguments
        type_args: Vec<TsTypeRef>,
        /// Call arguments
        args: Vec<TsExpr>,
    },
    /// Constructor call: new Error("...")
    New {
        /// Constructed class
        callee: Box<TsExpr>,
        /// Constructor arguments
        args: Vec<TsExpr>,
    },
    /// Logical negation: !queryService
    Not(Box<TsExpr>),
    /// Arrow function with a block body
    Arrow(Box<TsArrow>),
}

impl TsExpr {
    /// Identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        TsExpr::Ident(name.into())
    }

    /// String literal expression.
    pub fn string(value: impl Into<String>) -> Self {
        TsExpr::Str(value.into())
    }

    /// Array literal expression.
    pub fn array(items: Vec<TsExpr>) -> Self {
        TsExpr::Array(items)
    }

    /// Member access `object.prop`.
    pub fn member(object: TsExpr, prop: impl Into<String>) -> Self {
        TsExpr::Member {
            object: Box::new(object),
            prop: prop.into(),
        }
    }

    /// Plain call `callee(args...)`.
    pub fn call(callee: TsExpr, args: Vec<TsExpr>) -> Self {
        Self::call_generic(callee, Vec::new(), args)
    }

    /// Call with explicit type arguments `callee<type_args...>(args...)`.
    pub fn call_generic(callee: TsExpr, type_args: Vec<TsTypeRef>, args: Vec<TsExpr>) -> Self {
        TsExpr::Call {
            callee: Box::new(callee),
            type_args,
            args,
        }
    }

    /// Constructor call `new callee(args...)`.
    pub fn construct(callee: TsExpr, args: Vec<TsExpr>) -> Self {
        TsExpr::New {
            callee: Box::new(callee),
            args,
        }
    }

    /// Logical negation `!arg`.
    pub fn negate(arg: TsExpr) -> Self {
        TsExpr::Not(Box::new(arg))
    }

    /// Arrow function expression.
    pub fn arrow(arrow: TsArrow) -> Self {
        TsExpr::Arrow(Box::new(arrow))
    }
}

/// Arrow function: `<T = X,>(params) => { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsArrow {
    /// Function-level type parameters
    pub type_params: Vec<TsTypeParam>,
    /// Parameters
    pub params: Vec<TsParam>,
    /// Statements of the block body
    pub body: Vec<TsStmt>,
}

/// Destructured object parameter with shorthand bindings: `{ a, b }: Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsParam {
    /// Bound property names, in order
    pub bindings: Vec<String>,
    /// Type annotation of the whole object
    pub ty: TsTypeRef,
}

impl TsParam {
    /// Destructure `names` from a parameter of type `ty`.
    pub fn destructured<I, S>(names: I, ty: TsTypeRef) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bindings: names.into_iter().map(Into::into).collect(),
            ty,
        }
    }
}

// =============================================================================
// Statements
// =============================================================================

/// Statement in a function body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsStmt {
    /// Return statement
    Return(TsExpr),
    /// If statement without an alternate; the consequent renders on the same line
    If {
        /// Condition
        cond: TsExpr,
        /// Consequent
        then_stmt: Box<TsStmt>,
    },
    /// Throw statement
    Throw(TsExpr),
}

impl TsStmt {
    /// `return expr;`
    pub fn ret(expr: TsExpr) -> Self {
        TsStmt::Return(expr)
    }

    /// `if (cond) then_stmt`
    pub fn if_then(cond: TsExpr, then_stmt: TsStmt) -> Self {
        TsStmt::If {
            cond,
            then_stmt: Box::new(then_stmt),
        }
    }

    /// `throw expr;`
    pub fn throw(expr: TsExpr) -> Self {
        TsStmt::Throw(expr)
    }
}

// =============================================================================
// Module-Level IR
// =============================================================================

/// interface Foo<T> extends Bar<T> { ... }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsInterface {
    /// Interface name
    pub name: String,
    /// Interface type parameters
    pub type_params: Vec<TsTypeParam>,
    /// Heritage clause
    pub extends: Vec<TsTypeRef>,
    /// Property signatures
    pub body: Vec<TsProp>,
}

/// Single-binding constant declaration: `const name = init;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsVarDecl {
    /// Bound identifier
    pub name: String,
    /// Initializer
    pub init: TsExpr,
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsDecl {
    /// Interface declaration
    Interface(TsInterface),
    /// Variable declaration
    Var(TsVarDecl),
}

/// Top-level statement of a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsModuleItem {
    /// Whether the declaration is prefixed with `export`
    pub export: bool,
    /// The declaration
    pub decl: TsDecl,
}

impl TsModuleItem {
    /// Exported declaration.
    pub fn exported(decl: TsDecl) -> Self {
        Self { export: true, decl }
    }
}

/// Complete TypeScript module (one source file)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsModule {
    /// Top-level statements in source order
    pub items: Vec<TsModuleItem>,
}
