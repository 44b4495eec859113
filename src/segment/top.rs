//! `TOP n` row-limiting segment

use crate::core::Span;
use crate::segment::limit::LimitValue;
use crate::segment::SqlSegment;
use serde::Serialize;

/// SQL Server `TOP` clause.
///
/// The span is the span of the limit expression, not of the `TOP` keyword, so
/// a rewriter can replace the bound alone. `row_number_alias` is the alias of
/// the row-number column the dialect pairs with the clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopSegment {
    span: Span,
    limit_value: LimitValue,
    row_number_alias: String,
}

impl TopSegment {
    pub fn new(span: Span, limit_value: LimitValue, row_number_alias: impl Into<String>) -> Self {
        Self {
            span,
            limit_value,
            row_number_alias: row_number_alias.into(),
        }
    }

    pub fn limit_value(&self) -> &LimitValue {
        &self.limit_value
    }

    pub fn row_number_alias(&self) -> &str {
        &self.row_number_alias
    }
}

impl SqlSegment for TopSegment {
    fn span(&self) -> Span {
        self.span
    }
}
