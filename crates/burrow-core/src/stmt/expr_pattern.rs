use super::Expr;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `%x%`
    Contains,

    /// `x%`
    StartsWith,

    /// `%x`
    EndsWith,
}

/// Matches a string field against a pattern built from a constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprPattern {
    pub kind: PatternKind,

    /// The string being searched; must be a field.
    pub expr: Box<Expr>,

    /// The substring to look for; must be a constant.
    pub pattern: Box<Expr>,
}

impl PatternKind {
    /// Wraps `text` in the `LIKE` wildcards for this kind.
    pub fn apply(self, text: &str) -> String {
        match self {
            PatternKind::Contains => format!("%{text}%"),
            PatternKind::StartsWith => format!("{text}%"),
            PatternKind::EndsWith => format!("%{text}"),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Contains => "contains".fmt(f),
            PatternKind::StartsWith => "starts_with".fmt(f),
            PatternKind::EndsWith => "ends_with".fmt(f),
        }
    }
}

impl Expr {
    pub fn pattern(kind: PatternKind, expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        ExprPattern {
            kind,
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
        }
        .into()
    }

    pub fn contains(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Expr::pattern(PatternKind::Contains, expr, pattern)
    }

    pub fn starts_with(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Expr::pattern(PatternKind::StartsWith, expr, pattern)
    }

    pub fn ends_with(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Expr::pattern(PatternKind::EndsWith, expr, pattern)
    }
}

impl From<ExprPattern> for Expr {
    fn from(value: ExprPattern) -> Self {
        Self::Pattern(value)
    }
}
