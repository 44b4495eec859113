//! Table reference extraction

use crate::core::ExtractResult;
use crate::extractor::api::{CollectionSegmentExtractor, OptionalSegmentExtractor};
use crate::extractor::utils::{
    find_first_child_node, find_first_child_node_none_recursive, get_all_descendant_nodes,
    get_first_child_node,
};
use crate::parse::{NodeRef, ParameterMarkerIndexes, RuleName};
use crate::segment::TableSegment;

/// Extracts the first `tableName` under a node.
///
/// The schema comes from the `owner` child of `tableName`, the alias from an
/// `alias` sibling under the same parent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableExtractor;

impl TableExtractor {
    fn build(table_node: NodeRef<'_>) -> ExtractResult<TableSegment> {
        let name_node = get_first_child_node(table_node, RuleName::Name)?;
        let mut segment = TableSegment::new(table_node.span(), name_node.text());
        if let Some(owner_node) = find_first_child_node_none_recursive(table_node, RuleName::Owner) {
            segment = segment.with_owner(owner_node.text());
        }
        if let Some(alias_node) = table_node
            .parent()
            .and_then(|scope| find_first_child_node_none_recursive(scope, RuleName::Alias))
        {
            segment = segment.with_alias(alias_node.text());
        }
        Ok(segment)
    }
}

impl OptionalSegmentExtractor for TableExtractor {
    type Segment = TableSegment;

    fn target(&self) -> RuleName {
        RuleName::TableName
    }

    fn extract(
        &self,
        node: NodeRef<'_>,
        _markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Option<TableSegment>> {
        find_first_child_node(node, RuleName::TableName)
            .map(Self::build)
            .transpose()
    }
}

/// Extracts every `tableName` under a node, in source order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TablesExtractor;

impl CollectionSegmentExtractor for TablesExtractor {
    type Segment = TableSegment;

    fn extract(
        &self,
        node: NodeRef<'_>,
        _markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Vec<TableSegment>> {
        get_all_descendant_nodes(node, RuleName::TableName)
            .into_iter()
            .map(TableExtractor::build)
            .collect()
    }
}
