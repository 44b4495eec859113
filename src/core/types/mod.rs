pub mod span;

pub use span::{Span, ToSpan};
