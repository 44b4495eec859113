//! Row-count bounds

use crate::core::{ExtractError, ExtractResult, Span};
use crate::segment::expr::ExpressionSegment;
use crate::segment::SqlSegment;
use serde::Serialize;

/// Where the bound comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LimitValueKind {
    /// Written in the statement
    Literal(i64),
    /// Bound at execution time from the parameter at this position
    Parameter(usize),
}

/// Row-count bound, either a literal or a parameter, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitValue {
    kind: LimitValueKind,
    /// Boundedness flag: false for exact row counts, true for percentage
    /// bounds such as `TOP 10 PERCENT`.
    percent: bool,
}

impl LimitValue {
    pub fn from_literal(value: i64) -> Self {
        Self {
            kind: LimitValueKind::Literal(value),
            percent: false,
        }
    }

    pub fn from_parameter(index: usize) -> Self {
        Self {
            kind: LimitValueKind::Parameter(index),
            percent: false,
        }
    }

    pub fn with_percent(mut self, percent: bool) -> Self {
        self.percent = percent;
        self
    }

    /// Classifies a resolved expression as a bound.
    ///
    /// Parameter markers and numeric literals qualify; anything else is an
    /// unsupported `construct`.
    pub fn from_expression(expr: &ExpressionSegment, construct: &'static str) -> ExtractResult<Self> {
        let span = expr.span();
        match expr {
            ExpressionSegment::ParameterMarker(marker) => {
                Ok(Self::from_parameter(marker.parameter_marker_index))
            }
            ExpressionSegment::Literal(literal) => literal
                .value
                .as_i64()
                .map(Self::from_literal)
                .ok_or_else(|| {
                    ExtractError::unsupported(construct, expr.describe(), span.start, span.stop)
                }),
            ExpressionSegment::Column(_) | ExpressionSegment::Complex(_) => Err(
                ExtractError::unsupported(construct, expr.describe(), span.start, span.stop),
            ),
        }
    }

    pub fn kind(&self) -> LimitValueKind {
        self.kind
    }

    pub fn literal(&self) -> Option<i64> {
        match self.kind {
            LimitValueKind::Literal(value) => Some(value),
            LimitValueKind::Parameter(_) => None,
        }
    }

    pub fn parameter_index(&self) -> Option<usize> {
        match self.kind {
            LimitValueKind::Parameter(index) => Some(index),
            LimitValueKind::Literal(_) => None,
        }
    }

    pub fn is_percent(&self) -> bool {
        self.percent
    }
}

/// One bound of a `LIMIT` clause with the offsets of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitValueSegment {
    pub span: Span,
    pub value: LimitValue,
}

impl LimitValueSegment {
    pub fn new(span: Span, value: LimitValue) -> Self {
        Self { span, value }
    }
}

impl SqlSegment for LimitValueSegment {
    fn span(&self) -> Span {
        self.span
    }
}

/// `LIMIT [offset,] row_count` or `LIMIT row_count OFFSET offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitSegment {
    span: Span,
    offset: Option<LimitValueSegment>,
    row_count: Option<LimitValueSegment>,
}

impl LimitSegment {
    pub fn new(
        span: Span,
        offset: Option<LimitValueSegment>,
        row_count: Option<LimitValueSegment>,
    ) -> Self {
        Self {
            span,
            offset,
            row_count,
        }
    }

    pub fn offset(&self) -> Option<&LimitValueSegment> {
        self.offset.as_ref()
    }

    pub fn row_count(&self) -> Option<&LimitValueSegment> {
        self.row_count.as_ref()
    }
}

impl SqlSegment for LimitSegment {
    fn span(&self) -> Span {
        self.span
    }
}
