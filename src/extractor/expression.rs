//! Expression resolution

use crate::core::{ExtractError, ExtractResult};
use crate::extractor::api::OptionalSegmentExtractor;
use crate::extractor::column::ColumnExtractor;
use crate::extractor::utils::find_single_node_from_first_descendant;
use crate::parse::{NodeRef, ParameterMarkerIndexes, RuleName};
use crate::segment::{
    ComplexExpressionSegment, ExpressionSegment, LiteralExpressionSegment, LiteralValue,
    ParameterMarkerExpressionSegment,
};
use crate::utils::unquote_string_literal;

/// Resolves an expression subtree into an [`ExpressionSegment`].
///
/// A subtree that is nothing but a parameter marker, a literal or a column
/// reference becomes that variant; any other shape is kept as
/// [`ExpressionSegment::Complex`]. A rule node without children resolves to
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionExtractor {
    column_extractor: ColumnExtractor,
}

impl ExpressionExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    fn literal_value(rule: RuleName, literal: NodeRef<'_>) -> ExtractResult<LiteralValue> {
        let text = literal.text().trim();
        let invalid = || ExtractError::InvalidLiteral {
            text: text.to_string(),
            start: literal.start(),
        };
        match rule {
            RuleName::NumberLiterals => text
                .parse::<i64>()
                .map(LiteralValue::Integer)
                .or_else(|_| text.parse::<f64>().map(LiteralValue::Decimal))
                .map_err(|_| invalid()),
            RuleName::StringLiterals => Ok(LiteralValue::String(unquote_string_literal(text))),
            RuleName::BooleanLiterals => {
                if text.eq_ignore_ascii_case("true") {
                    Ok(LiteralValue::Boolean(true))
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(LiteralValue::Boolean(false))
                } else {
                    Err(invalid())
                }
            }
            RuleName::NullValueLiterals => Ok(LiteralValue::Null),
            _ => Err(invalid()),
        }
    }
}

impl OptionalSegmentExtractor for ExpressionExtractor {
    type Segment = ExpressionSegment;

    fn target(&self) -> RuleName {
        RuleName::Expr
    }

    fn extract(
        &self,
        node: NodeRef<'_>,
        markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Option<ExpressionSegment>> {
        if !node.is_terminal() && node.child_count() == 0 {
            return Ok(None);
        }
        let span = node.span();

        if let Some(marker) = find_single_node_from_first_descendant(node, RuleName::ParameterMarker) {
            let index = markers.get(marker.id()).ok_or_else(|| {
                log::error!("Parameter marker at {} is missing from the marker index", marker.span());
                ExtractError::UnindexedParameterMarker {
                    start: marker.start(),
                }
            })?;
            return Ok(Some(ExpressionSegment::ParameterMarker(
                ParameterMarkerExpressionSegment::new(span, index),
            )));
        }

        for rule in RuleName::LITERALS {
            if let Some(literal) = find_single_node_from_first_descendant(node, rule) {
                let value = Self::literal_value(rule, literal)?;
                return Ok(Some(ExpressionSegment::Literal(LiteralExpressionSegment::new(
                    span, value,
                ))));
            }
        }

        if let Some(column) = find_single_node_from_first_descendant(node, RuleName::ColumnName) {
            return Ok(self
                .column_extractor
                .extract(column, markers)?
                .map(ExpressionSegment::Column));
        }

        Ok(Some(ExpressionSegment::Complex(ComplexExpressionSegment::new(
            span,
            node.text(),
        ))))
    }

    fn extract_required(
        &self,
        node: NodeRef<'_>,
        markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<ExpressionSegment> {
        self.extract(node, markers)?.ok_or_else(|| {
            log::error!("Expression `{}` at {} resolved to nothing", node.rule(), node.span());
            ExtractError::UnresolvedExpression {
                start: node.start(),
                stop: node.stop(),
            }
        })
    }
}
