//! Expression segments
//!
//! Closed set of expression shapes the extraction layer distinguishes.
//! Consumers match on [`ExpressionSegment`] exhaustively, so a new shape has
//! to be handled everywhere it can show up.

use crate::core::Span;
use crate::segment::column::ColumnSegment;
use crate::segment::SqlSegment;
use serde::Serialize;

/// Typed scalar held by a literal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LiteralValue {
    Integer(i64),
    Decimal(f64),
    String(String),
    Boolean(bool),
    Null,
}

impl LiteralValue {
    /// Integer value of a numeric literal; decimals truncate toward zero.
    ///
    /// Decimals whose integer part does not fit in `i64` have no value,
    /// including integer literals too large to parse as `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        // 2^63, exactly representable; `as` would saturate at this bound
        const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
        match self {
            LiteralValue::Integer(value) => Some(*value),
            LiteralValue::Decimal(value) => {
                let truncated = value.trunc();
                (truncated >= -I64_BOUND && truncated < I64_BOUND).then(|| truncated as i64)
            }
            LiteralValue::String(_)
            | LiteralValue::Boolean(_)
            | LiteralValue::Null => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, LiteralValue::Integer(_) | LiteralValue::Decimal(_))
    }
}

/// Constant written in the statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiteralExpressionSegment {
    pub span: Span,
    pub value: LiteralValue,
}

impl LiteralExpressionSegment {
    pub fn new(span: Span, value: LiteralValue) -> Self {
        Self { span, value }
    }
}

/// Placeholder bound at execution time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterMarkerExpressionSegment {
    pub span: Span,
    /// Position of the marker among all markers of the statement
    pub parameter_marker_index: usize,
}

impl ParameterMarkerExpressionSegment {
    pub fn new(span: Span, parameter_marker_index: usize) -> Self {
        Self {
            span,
            parameter_marker_index,
        }
    }
}

/// Any other expression, kept as source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexExpressionSegment {
    pub span: Span,
    pub text: String,
}

impl ComplexExpressionSegment {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExpressionSegment {
    Literal(LiteralExpressionSegment),
    ParameterMarker(ParameterMarkerExpressionSegment),
    Column(ColumnSegment),
    Complex(ComplexExpressionSegment),
}

impl ExpressionSegment {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            ExpressionSegment::Literal(literal) => format!("{:?}", literal.value),
            ExpressionSegment::ParameterMarker(marker) => {
                format!("?{}", marker.parameter_marker_index)
            }
            ExpressionSegment::Column(column) => column.qualified_name(),
            ExpressionSegment::Complex(complex) => complex.text.clone(),
        }
    }
}

impl SqlSegment for ExpressionSegment {
    fn span(&self) -> Span {
        match self {
            ExpressionSegment::Literal(e) => e.span,
            ExpressionSegment::ParameterMarker(e) => e.span,
            ExpressionSegment::Column(e) => e.span(),
            ExpressionSegment::Complex(e) => e.span,
        }
    }
}
