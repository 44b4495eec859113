//! SQL Server `TOP` extraction

use crate::core::{ExtractError, ExtractResult};
use crate::extractor::api::OptionalSegmentExtractor;
use crate::extractor::expression::ExpressionExtractor;
use crate::extractor::utils::{find_first_child_node, find_token_child, get_first_child_node};
use crate::parse::{NodeRef, ParameterMarkerIndexes, RuleName};
use crate::segment::{LimitValue, SqlSegment, TopSegment};

const TOP_EXPRESSION: &str = "TOP expression";

/// Extracts the `TOP n` row-limiting clause.
///
/// The grammar guarantees that a `top` node carries an `expr` and that the
/// enclosing select item carries the row-number `alias`; a tree missing
/// either is rejected as an internal error. The bound must be a number or a
/// parameter marker, anything else is unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopExtractor {
    expression_extractor: ExpressionExtractor,
}

impl TopExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionalSegmentExtractor for TopExtractor {
    type Segment = TopSegment;

    fn target(&self) -> RuleName {
        RuleName::Top
    }

    fn extract(
        &self,
        node: NodeRef<'_>,
        markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Option<TopSegment>> {
        let Some(top_node) = find_first_child_node(node, RuleName::Top) else {
            log::trace!("No TOP clause under `{}` at {}", node.rule(), node.span());
            return Ok(None);
        };

        let expr_node = get_first_child_node(top_node, RuleName::Expr)?;
        let top_expr = self
            .expression_extractor
            .extract_required(expr_node, markers)?;
        let limit_value = LimitValue::from_expression(&top_expr, TOP_EXPRESSION)
            .map_err(|error| {
                log::warn!("{}", error);
                error
            })?
            .with_percent(find_token_child(top_node, RuleName::Percent).is_some());

        let scope = top_node.parent().ok_or_else(|| {
            log::error!("TOP clause at {} has no enclosing scope", top_node.span());
            ExtractError::missing_node(RuleName::Alias.name(), top_node.rule(), top_node.start())
        })?;
        let alias_node = get_first_child_node(scope, RuleName::Alias)?;

        let segment = TopSegment::new(top_expr.span(), limit_value, alias_node.text());
        log::debug!(
            "Extracted TOP {:?} at {} with row number alias `{}`",
            segment.limit_value().kind(),
            segment.span(),
            segment.row_number_alias()
        );
        Ok(Some(segment))
    }
}
