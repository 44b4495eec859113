//! Per-dialect extraction of a whole statement

use crate::config::{DatabaseType, ExtractConfig};
use crate::core::ExtractResult;
use crate::extractor::api::{CollectionSegmentExtractor, OptionalSegmentExtractor};
use crate::extractor::column::ColumnsExtractor;
use crate::extractor::limit::LimitExtractor;
use crate::extractor::table::TablesExtractor;
use crate::extractor::top::TopExtractor;
use crate::parse::{ParameterMarkerIndexes, ParseTree, Statement};
use crate::segment::{ColumnSegment, LimitSegment, OwnerResolver, TableSegment, TopSegment};
use rayon::prelude::*;
use serde::Serialize;

/// Segments of one select statement, ready for the rewriter.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SelectSegments {
    pub top: Option<TopSegment>,
    pub limit: Option<LimitSegment>,
    pub tables: Vec<TableSegment>,
    /// Columns with owners resolved against `tables`
    pub columns: Vec<ColumnSegment>,
}

/// Runs the extractors a dialect needs over a statement.
///
/// Holds no per-statement state, so one engine can serve any number of
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentsExtractorEngine {
    database_type: DatabaseType,
    top_extractor: TopExtractor,
    limit_extractor: LimitExtractor,
    tables_extractor: TablesExtractor,
    columns_extractor: ColumnsExtractor,
    owner_resolver: OwnerResolver,
}

impl SegmentsExtractorEngine {
    pub fn new(database_type: DatabaseType) -> Self {
        Self {
            database_type,
            ..Self::default()
        }
    }

    pub fn from_config(config: &ExtractConfig) -> Self {
        Self::new(config.database_type)
    }

    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    pub fn extract(
        &self,
        tree: &ParseTree,
        markers: &ParameterMarkerIndexes,
    ) -> ExtractResult<SelectSegments> {
        let root = tree.root();
        let tables = self.tables_extractor.extract(root, markers)?;
        let columns = self.columns_extractor.extract(root, markers)?;
        let columns = self.owner_resolver.resolve(columns, &tables)?;

        let (top, limit) = match self.database_type {
            DatabaseType::SqlServer => (self.top_extractor.extract(root, markers)?, None),
            DatabaseType::MySql | DatabaseType::PostgreSql | DatabaseType::H2 => {
                (None, self.limit_extractor.extract(root, markers)?)
            }
            DatabaseType::Oracle => (None, None),
        };

        log::debug!(
            "{} statement: {} table(s), {} column(s), top: {}, limit: {}",
            self.database_type,
            tables.len(),
            columns.len(),
            top.is_some(),
            limit.is_some()
        );
        Ok(SelectSegments {
            top,
            limit,
            tables,
            columns,
        })
    }

    pub fn extract_statement(&self, statement: &Statement) -> ExtractResult<SelectSegments> {
        self.extract(statement.tree(), statement.markers())
    }

    /// Extracts statements in parallel; results keep the input order.
    pub fn extract_batch(&self, statements: &[Statement]) -> Vec<ExtractResult<SelectSegments>> {
        statements
            .par_iter()
            .map(|statement| {
                self.extract_statement(statement).map_err(|error| {
                    log::warn!("Extraction failed for `{}`: {}", statement.text(), error);
                    error
                })
            })
            .collect()
    }
}
