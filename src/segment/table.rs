//! Table reference segment

use crate::core::Span;
use crate::segment::column::{OwnerRef, QUALIFIER_SEPARATOR};
use crate::segment::SqlSegment;
use crate::utils::exactly_value;
use serde::Serialize;

/// Table reference with its optional schema owner and alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSegment {
    span: Span,
    name: String,
    owner: Option<String>,
    alias: Option<String>,
}

impl TableSegment {
    pub fn new(span: Span, raw_name: &str) -> Self {
        Self {
            span,
            name: exactly_value(raw_name),
            owner: None,
            alias: None,
        }
    }

    /// Sets the schema written before the table, as in `db.t`.
    pub fn with_owner(mut self, raw_owner: &str) -> Self {
        self.owner = Some(exactly_value(raw_owner));
        self
    }

    pub fn with_alias(mut self, raw_alias: &str) -> Self {
        self.alias = Some(exactly_value(raw_alias));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn qualified_name(&self) -> String {
        match &self.owner {
            Some(owner) => format!("{}{}{}", owner, QUALIFIER_SEPARATOR, self.name),
            None => self.name.clone(),
        }
    }

    /// Reference a column keeps to this table.
    pub fn owner_ref(&self) -> OwnerRef {
        OwnerRef::new(self.name.clone(), self.span.start)
    }

    /// Whether `qualifier` is this table's alias, ignoring case.
    pub fn is_aliased_as(&self, qualifier: &str) -> bool {
        self.alias
            .as_deref()
            .is_some_and(|alias| alias.eq_ignore_ascii_case(qualifier))
    }

    /// Whether `qualifier` is this table's name, ignoring case.
    pub fn is_named(&self, qualifier: &str) -> bool {
        self.name.eq_ignore_ascii_case(qualifier)
    }
}

impl SqlSegment for TableSegment {
    fn span(&self) -> Span {
        self.span
    }
}
