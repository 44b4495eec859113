//! Column reference segment

use crate::core::{ExtractError, ExtractResult, Span};
use crate::segment::SqlSegment;
use crate::utils::exactly_value;
use serde::Serialize;

/// Separator between owner and column in a qualified name
pub const QUALIFIER_SEPARATOR: &str = ".";

/// Non-owning reference from a column to the table that owns it.
///
/// Identifies the table segment by its canonical name and start offset; the
/// table segment itself stays with the statement's table list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OwnerRef {
    name: String,
    start: usize,
}

impl OwnerRef {
    pub fn new(name: impl Into<String>, start: usize) -> Self {
        Self {
            name: name.into(),
            start,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_index(&self) -> usize {
        self.start
    }
}

/// Column reference.
///
/// The name is canonical: dialect quoting is stripped at construction. The
/// owner is not known when the column is extracted; [`OwnerResolver`] binds
/// it afterwards through [`with_owner`](Self::with_owner), exactly once.
///
/// [`OwnerResolver`]: crate::segment::OwnerResolver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSegment {
    span: Span,
    name: String,
    qualifier: Option<String>,
    owner: Option<OwnerRef>,
}

impl ColumnSegment {
    pub fn new(span: Span, raw_name: &str) -> Self {
        Self {
            span,
            name: exactly_value(raw_name),
            qualifier: None,
            owner: None,
        }
    }

    /// Records the owner text written before the column, as in `t.c`.
    pub fn with_qualifier(mut self, raw_qualifier: &str) -> Self {
        self.qualifier = Some(exactly_value(raw_qualifier));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    pub fn owner(&self) -> Option<&OwnerRef> {
        self.owner.as_ref()
    }

    /// `owner.name` once an owner is bound, the bare name before.
    pub fn qualified_name(&self) -> String {
        match &self.owner {
            Some(owner) => format!("{}{}{}", owner.name(), QUALIFIER_SEPARATOR, self.name),
            None => self.name.clone(),
        }
    }

    /// Binds the owning table. A column can be bound only once.
    pub fn with_owner(mut self, owner: OwnerRef) -> ExtractResult<Self> {
        if self.owner.is_some() {
            return Err(ExtractError::OwnerAlreadyBound {
                column: self.qualified_name(),
            });
        }
        self.owner = Some(owner);
        Ok(self)
    }
}

impl SqlSegment for ColumnSegment {
    fn span(&self) -> Span {
        self.span
    }
}
