//! `LIMIT` extraction for MySQL, PostgreSQL and H2

use crate::core::ExtractResult;
use crate::extractor::api::OptionalSegmentExtractor;
use crate::extractor::expression::ExpressionExtractor;
use crate::extractor::utils::find_first_child_node;
use crate::parse::{NodeRef, ParameterMarkerIndexes, RuleName};
use crate::segment::{LimitSegment, LimitValue, LimitValueSegment, SqlSegment};

/// Extracts `LIMIT [offset,] row_count` and `LIMIT row_count OFFSET offset`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitExtractor {
    expression_extractor: ExpressionExtractor,
}

impl LimitExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    fn value_segment(
        &self,
        value_node: NodeRef<'_>,
        markers: &ParameterMarkerIndexes,
        construct: &'static str,
    ) -> ExtractResult<LimitValueSegment> {
        let expr = self
            .expression_extractor
            .extract_required(value_node, markers)?;
        let value = LimitValue::from_expression(&expr, construct).map_err(|error| {
            log::warn!("{}", error);
            error
        })?;
        Ok(LimitValueSegment::new(expr.span(), value))
    }
}

impl OptionalSegmentExtractor for LimitExtractor {
    type Segment = LimitSegment;

    fn target(&self) -> RuleName {
        RuleName::LimitClause
    }

    fn extract(
        &self,
        node: NodeRef<'_>,
        markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Option<LimitSegment>> {
        let Some(limit_node) = find_first_child_node(node, RuleName::LimitClause) else {
            log::trace!("No LIMIT clause under `{}` at {}", node.rule(), node.span());
            return Ok(None);
        };

        let offset = find_first_child_node(limit_node, RuleName::LimitOffset)
            .map(|offset_node| self.value_segment(offset_node, markers, "LIMIT offset"))
            .transpose()?;
        let row_count = find_first_child_node(limit_node, RuleName::LimitRowCount)
            .map(|row_count_node| self.value_segment(row_count_node, markers, "LIMIT row count"))
            .transpose()?;

        Ok(Some(LimitSegment::new(limit_node.span(), offset, row_count)))
    }
}
