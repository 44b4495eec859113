//! Extractor contracts

use crate::core::{ExtractError, ExtractResult};
use crate::parse::{NodeRef, ParameterMarkerIndexes, RuleName};

/// Extracts a segment for a construct the statement may or may not use.
///
/// `Ok(None)` means the construct is absent, which is not an error.
pub trait OptionalSegmentExtractor: Send + Sync {
    type Segment;

    /// Rule of the construct this extractor looks for.
    fn target(&self) -> RuleName;

    fn extract(
        &self,
        node: NodeRef<'_>,
        markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Option<Self::Segment>>;

    /// Mandatory form of [`extract`](Self::extract) for places where the
    /// grammar guarantees the construct; absence is an internal error.
    fn extract_required(
        &self,
        node: NodeRef<'_>,
        markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Self::Segment> {
        self.extract(node, markers)?.ok_or_else(|| {
            log::error!(
                "Grammar contract broken: `{}` expected under `{}` at {}",
                self.target(),
                node.rule(),
                node.span()
            );
            ExtractError::missing_node(self.target().name(), node.rule(), node.start())
        })
    }
}

/// Extracts every occurrence of a repeatable construct, in source order.
pub trait CollectionSegmentExtractor: Send + Sync {
    type Segment;

    fn extract(
        &self,
        node: NodeRef<'_>,
        markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<Vec<Self::Segment>>;
}
