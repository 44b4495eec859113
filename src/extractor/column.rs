//! Column reference extraction

use crate::core::ExtractResult;
use crate::extractor::api::{CollectionSegmentExtractor, OptionalSegmentExtractor};
use crate::extractor::utils::{
    find_first_child_node, find_first_child_node_none_recursive, get_all_descendant_nodes,
    get_first_child_node,
};
use crate::parse::{NodeRef, ParameterMarkerIndexes, RuleName};
use crate::segment::ColumnSegment;

/// Extracts the first `columnName` under a node.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnExtractor;

impl ColumnExtractor {
    fn build(column_node: NodeRef<'_>) -> ExtractResult<ColumnSegment> {
        let name_node = get_first_child_node(column_node, RuleName::Name)?;
        let segment = ColumnSegment::new(column_node.span(), name_node.text());
        Ok(
            match find_first_child_node_none_recursive(column_node, RuleName::Owner) {
                Some(owner_node) => segment.with_qualifier(owner_node.text()),
                None => segment,
            },
        )
    }
}

impl OptionalSegmentExtractor for ColumnExtractor {
    type Segment = ColumnSegment;

    fn target(&self) -> RuleName {
        RuleName::ColumnName
    }

    fn extract(
        &self,
        node: NodeRef<'_>,
        _markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Option<ColumnSegment>> {
        find_first_child_node(node, RuleName::ColumnName)
            .map(Self::build)
            .transpose()
    }
}

/// Extracts every `columnName` under a node, in source order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnsExtractor;

impl CollectionSegmentExtractor for ColumnsExtractor {
    type Segment = ColumnSegment;

    fn extract(
        &self,
        node: NodeRef<'_>,
        _markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Vec<ColumnSegment>> {
        get_all_descendant_nodes(node, RuleName::ColumnName)
            .into_iter()
            .map(ColumnExtractor::build)
            .collect()
    }
}
