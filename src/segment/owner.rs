//! Binds column segments to the tables that own them

use crate::core::ExtractResult;
use crate::segment::column::{ColumnSegment, OwnerRef};
use crate::segment::table::TableSegment;
use crate::segment::SqlSegment;

/// Resolution pass run after all segments of a statement are extracted.
///
/// - A qualifier binds to the table carrying it as alias and, when no alias
///   matches, to the table carrying it as name. So `orders.c` still binds in
///   `FROM orders AS o`. A qualifier matching no table (a derived table, say)
///   leaves the column unbound; only the qualifier text is kept.
/// - An unqualified column binds to the only table of the statement and is
///   left unbound when there are several.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerResolver;

impl OwnerResolver {
    pub fn resolve(
        &self,
        columns: Vec<ColumnSegment>,
        tables: &[TableSegment],
    ) -> ExtractResult<Vec<ColumnSegment>> {
        columns
            .into_iter()
            .map(|column| match Self::owner_for(&column, tables) {
                Some(owner) => column.with_owner(owner),
                None => Ok(column),
            })
            .collect()
    }

    fn owner_for(column: &ColumnSegment, tables: &[TableSegment]) -> Option<OwnerRef> {
        match column.qualifier() {
            Some(qualifier) => {
                let owner = tables
                    .iter()
                    .find(|table| table.is_aliased_as(qualifier))
                    .or_else(|| tables.iter().find(|table| table.is_named(qualifier)));
                if owner.is_none() {
                    log::debug!(
                        "Qualifier `{}` of column `{}` at {} matches no table",
                        qualifier,
                        column.name(),
                        column.start_index()
                    );
                }
                owner.map(TableSegment::owner_ref)
            }
            None => match tables {
                [only] => Some(only.owner_ref()),
                _ => {
                    if !tables.is_empty() {
                        log::debug!(
                            "Column `{}` at {} is ambiguous among {} tables",
                            column.name(),
                            column.start_index(),
                            tables.len()
                        );
                    }
                    None
                }
            },
        }
    }
}
