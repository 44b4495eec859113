//! Segment extractors
//!
//! Each extractor looks for one grammar construct under a node and turns it
//! into a segment. Extractors are stateless and only hold the sub-extractors
//! they delegate to.

pub mod api;
pub mod column;
pub mod engine;
pub mod expression;
pub mod limit;
pub mod table;
pub mod top;
pub mod utils;

pub use api::{CollectionSegmentExtractor, OptionalSegmentExtractor};
pub use column::{ColumnExtractor, ColumnsExtractor};
pub use engine::{SegmentsExtractorEngine, SelectSegments};
pub use expression::ExpressionExtractor;
pub use limit::LimitExtractor;
pub use table::{TableExtractor, TablesExtractor};
pub use top::TopExtractor;
