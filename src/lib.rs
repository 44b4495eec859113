//! SQLSegment - typed SQL segment extraction for sharding middleware
//!
//! Turns the grammar-produced parse tree of a statement into typed segments
//! (tables, columns, row-limiting clauses, expressions) that carry their
//! offsets in the statement text, for a rewriting and routing engine that
//! splits queries across database shards.

pub mod config;
pub mod core;
pub mod extractor;
pub mod parse;
pub mod segment;
pub mod utils;
