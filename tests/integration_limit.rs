//! LIMIT 提取集成测试
//!
//! 测试范围:
//! - extractor::limit - `LIMIT offset, count` 与 `LIMIT count OFFSET offset`
//! - 参数位置按整条语句计数

mod common;

use common::assertions::{assert_err_kind, assert_ok, assert_some};
use common::statements::{mysql_limit_comma, mysql_limit_offset, mysql_limit_row_count, plain_select};
use sqlsegment::core::{ErrorKind, Span};
use sqlsegment::extractor::{LimitExtractor, OptionalSegmentExtractor};
use sqlsegment::parse::{ParameterMarkerIndexes, ParseTree};
use sqlsegment::segment::{LimitSegment, LimitValueKind, SqlSegment};

fn extract_limit(tree: &ParseTree) -> Result<Option<LimitSegment>, sqlsegment::core::ExtractError> {
    let markers = ParameterMarkerIndexes::build(tree);
    LimitExtractor::new().extract(tree.root(), &markers)
}

#[test]
fn test_limit_offset_and_count() {
    let tree = mysql_limit_comma();

    let limit = assert_ok(extract_limit(&tree));
    let limit = assert_some(&limit);
    assert_eq!(limit.span(), Span::new(39, 49));

    let offset = limit.offset().expect("offset should be present");
    assert_eq!(offset.value.kind(), LimitValueKind::Parameter(0));
    assert_eq!(offset.span, Span::at(45));

    let row_count = limit.row_count().expect("row count should be present");
    assert_eq!(row_count.value.literal(), Some(10));
    assert_eq!(row_count.span(), Span::new(48, 49));
}

#[test]
fn test_limit_offset_keyword() {
    let tree = mysql_limit_offset();

    let limit = assert_ok(extract_limit(&tree));
    let limit = assert_some(&limit);
    assert_eq!(limit.span(), Span::new(36, 52));
    assert_eq!(
        limit.row_count().map(|value| value.value.kind()),
        Some(LimitValueKind::Literal(10))
    );
    // WHERE 中的参数占用位置 0
    let offset = limit.offset().expect("offset should be present");
    assert_eq!(offset.value.parameter_index(), Some(1));
    assert_eq!(offset.start_index(), 52);
}

#[test]
fn test_limit_row_count_only() {
    let tree = mysql_limit_row_count("SELECT * FROM t LIMIT ?", |f| {
        f.leaf("parameterMarker", "QUESTION_", "?");
    });

    let limit = assert_ok(extract_limit(&tree));
    let limit = assert_some(&limit);
    assert!(limit.offset().is_none());
    assert_eq!(
        limit.row_count().and_then(|value| value.value.parameter_index()),
        Some(0)
    );
}

#[test]
fn test_no_limit_clause() {
    let tree = plain_select();
    let limit = assert_ok(extract_limit(&tree));
    assert!(limit.is_none());
}

#[test]
fn test_limit_string_is_unsupported() {
    let tree = mysql_limit_row_count("SELECT * FROM t LIMIT 'a'", |f| {
        f.leaf("stringLiterals", "STRING_", "'a'");
    });

    let error = assert_err_kind(extract_limit(&tree), ErrorKind::Unsupported);
    assert!(error.to_string().contains("LIMIT row count"));
}
