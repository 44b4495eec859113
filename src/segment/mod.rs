//! SQL segments
//!
//! Typed fragments of a statement, each tagged with the offsets it occupies
//! in the statement text. Segments are built once per statement and handed
//! to the rewriting engine, which uses the offsets to replace or annotate
//! text per shard.

pub mod column;
pub mod expr;
pub mod limit;
pub mod owner;
pub mod table;
pub mod top;

pub use column::{ColumnSegment, OwnerRef};
pub use expr::{
    ComplexExpressionSegment, ExpressionSegment, LiteralExpressionSegment, LiteralValue,
    ParameterMarkerExpressionSegment,
};
pub use limit::{LimitSegment, LimitValue, LimitValueKind, LimitValueSegment};
pub use owner::OwnerResolver;
pub use table::TableSegment;
pub use top::TopSegment;

use crate::core::Span;

/// A fragment of a statement located in the statement text.
pub trait SqlSegment {
    fn span(&self) -> Span;

    fn start_index(&self) -> usize {
        self.span().start
    }

    fn stop_index(&self) -> usize {
        self.span().stop
    }
}
