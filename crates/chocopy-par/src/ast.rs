//! AST node definitions.
//!
//! ChocoPy's original grammar uses an inheritance hierarchy
//! (`Node <- Expr <- Literal <- IntLit, ...`); here every family is a
//! tagged `enum` with a `Position` carried on each variant (or on a
//! wrapping struct, for the cases with enough fields to want a name).
//! Consumers match exhaustively rather than walking a class hierarchy,
//! so the compiler — not a missed `instanceof` check — flags a new
//! variant nobody handles yet.

use chocopy_util::{Position, Symbol};

/// A type annotation: either a class name or an arbitrarily nested list.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    ClassType { name: Symbol, position: Position },
    ListType {
        element: Box<TypeAnnotation>,
        position: Position,
    },
}

impl TypeAnnotation {
    pub fn position(&self) -> Position {
        match self {
            TypeAnnotation::ClassType { position, .. } => *position,
            TypeAnnotation::ListType { position, .. } => *position,
        }
    }
}

/// A binary or unary operator, stored as its lexeme (`"+"`, `"and"`,
/// `"is"`, ...) rather than a closed enum — the parser never needs to
/// do anything with an operator besides record it and hand it to
/// semantic analysis, so a `String` avoids a second enum that would
/// just mirror `TokenKind`.
pub type Operator = String;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    NoneLit { position: Position },
    BoolLit { value: bool, position: Position },
    IntLit { value: i32, position: Position },
    StrLit { value: String, position: Position },
    /// An identifier in a position where only a literal is
    /// syntactically expected (the RHS of a variable definition).
    /// Semantic analysis decides whether this is acceptable.
    IdString { name: Symbol, position: Position },

    Variable { name: Symbol, position: Position },
    ListLiteral {
        elements: Vec<Expr>,
        position: Position,
    },

    Unary {
        op: Operator,
        operand: Box<Expr>,
        position: Position,
    },
    Binary {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
        position: Position,
    },
    IfExpr {
        then_branch: Box<Expr>,
        condition: Box<Expr>,
        else_branch: Box<Expr>,
        position: Position,
    },

    Member {
        object: Box<Expr>,
        member: Symbol,
        position: Position,
    },
    Index {
        list: Box<Expr>,
        index: Box<Expr>,
        position: Position,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        position: Position,
    },
}

impl Expr {
    pub fn position(&self) -> Position {
        match self {
            Expr::NoneLit { position }
            | Expr::BoolLit { position, .. }
            | Expr::IntLit { position, .. }
            | Expr::StrLit { position, .. }
            | Expr::IdString { position, .. }
            | Expr::Variable { position, .. }
            | Expr::ListLiteral { position, .. }
            | Expr::Unary { position, .. }
            | Expr::Binary { position, .. }
            | Expr::IfExpr { position, .. }
            | Expr::Member { position, .. }
            | Expr::Index { position, .. }
            | Expr::Call { position, .. } => *position,
        }
    }

    /// Whether this expression is syntactically valid on the left-hand
    /// side of an assignment.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Variable { .. } | Expr::Member { .. } | Expr::Index { .. })
    }

    /// A short, human-readable name for error messages
    /// (`SyntaxErrorKind::InvalidAssignTarget`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::NoneLit { .. } => "NoneLit",
            Expr::BoolLit { .. } => "BoolLit",
            Expr::IntLit { .. } => "IntLit",
            Expr::StrLit { .. } => "StrLit",
            Expr::IdString { .. } => "IdString",
            Expr::Variable { .. } => "Variable",
            Expr::ListLiteral { .. } => "ListLiteral",
            Expr::Unary { .. } => "Unary",
            Expr::Binary { .. } => "Binary",
            Expr::IfExpr { .. } => "IfExpr",
            Expr::Member { .. } => "Member",
            Expr::Index { .. } => "Index",
            Expr::Call { .. } => "Call",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Pass { position: Position },
    ExprStmt { expr: Expr, position: Position },
    AssignStmt {
        target: Expr,
        value: Expr,
        position: Position,
    },
    Return {
        value: Option<Expr>,
        position: Position,
    },
    If {
        condition: Expr,
        then_body: Vec<Stmt>,
        else_body: Vec<Stmt>,
        position: Position,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
        position: Position,
    },
    For {
        id: Symbol,
        iterable: Expr,
        body: Vec<Stmt>,
        position: Position,
    },
}

impl Stmt {
    pub fn position(&self) -> Position {
        match self {
            Stmt::Pass { position }
            | Stmt::ExprStmt { position, .. }
            | Stmt::AssignStmt { position, .. }
            | Stmt::Return { position, .. }
            | Stmt::If { position, .. }
            | Stmt::While { position, .. }
            | Stmt::For { position, .. } => *position,
        }
    }
}

/// `name : Type`, used for both parameters and the left half of a
/// variable definition.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedVar {
    pub name: Symbol,
    pub ty: TypeAnnotation,
    pub position: Position,
}

/// `TypedVar = Literal`.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDef {
    pub typed_var: TypedVar,
    pub literal: Expr,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobalDecl {
    pub name: Symbol,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonlocalDecl {
    pub name: Symbol,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FuncDef {
    pub name: Symbol,
    pub params: Vec<TypedVar>,
    pub return_type: TypeAnnotation,
    pub var_defs: Vec<VarDef>,
    pub nested_funcs: Vec<FuncDef>,
    /// `global`/`nonlocal` declarations, interleaved with `var_defs` in
    /// source order but kept in their own vector since they carry no
    /// type to check against.
    pub decls: Vec<Decl>,
    pub body: Vec<Stmt>,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Decl {
    Global(GlobalDecl),
    Nonlocal(NonlocalDecl),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassDef {
    pub name: Symbol,
    pub super_class: Symbol,
    pub var_defs: Vec<VarDef>,
    pub methods: Vec<FuncDef>,
    pub position: Position,
}

/// A top-level declaration: exactly the things `program` parses before
/// any statement, in the order class -> variable -> function.
#[derive(Clone, Debug, PartialEq)]
pub enum TopLevelDecl {
    Class(ClassDef),
    Var(VarDef),
    Func(FuncDef),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub declarations: Vec<TopLevelDecl>,
    pub statements: Vec<Stmt>,
    pub position: Position,
}

impl Program {
    pub fn class_defs(&self) -> impl Iterator<Item = &ClassDef> {
        self.declarations.iter().filter_map(|d| match d {
            TopLevelDecl::Class(c) => Some(c),
            _ => None,
        })
    }

    pub fn var_defs(&self) -> impl Iterator<Item = &VarDef> {
        self.declarations.iter().filter_map(|d| match d {
            TopLevelDecl::Var(v) => Some(v),
            _ => None,
        })
    }

    pub fn func_defs(&self) -> impl Iterator<Item = &FuncDef> {
        self.declarations.iter().filter_map(|d| match d {
            TopLevelDecl::Func(f) => Some(f),
            _ => None,
        })
    }
}
