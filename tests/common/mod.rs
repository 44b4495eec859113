//! 集成测试共享工具模块
//!
//! Builds parse trees the way the SQL grammar front end would, by walking a
//! statement left to right and opening, closing and filling rule nodes.

#![allow(dead_code)]

pub mod assertions;
pub mod statements;

use sqlsegment::parse::{ParseTree, TreeBuilder};

/// Parse tree writer for ASCII statements.
///
/// `token` consumes the next occurrence of a piece of text, `open` starts a
/// rule node at the next non-blank character and `close` ends the innermost
/// open node at the last consumed character.
pub struct TreeFixture {
    sql: String,
    builder: TreeBuilder,
    cursor: usize,
    last_stop: usize,
}

impl TreeFixture {
    pub fn new(sql: &str) -> Self {
        assert!(sql.is_ascii(), "fixture statements must be ASCII");
        Self {
            sql: sql.to_string(),
            builder: TreeBuilder::new(sql),
            cursor: 0,
            last_stop: 0,
        }
    }

    pub fn open(&mut self, rule: &str) -> &mut Self {
        let skipped = self.sql[self.cursor..]
            .find(|c: char| !c.is_whitespace())
            .unwrap_or_else(|| panic!("no text left to open `{}`", rule));
        let start = self.cursor + skipped;
        self.builder
            .start_node(rule, start)
            .unwrap_or_else(|e| panic!("cannot open `{}`: {}", rule, e));
        self
    }

    pub fn token(&mut self, rule: &str, text: &str) -> &mut Self {
        let start = self.sql[self.cursor..]
            .find(text)
            .map(|offset| self.cursor + offset)
            .unwrap_or_else(|| panic!("`{}` not found after offset {}", text, self.cursor));
        let stop = start + text.len() - 1;
        self.builder
            .token(rule, start, stop)
            .unwrap_or_else(|e| panic!("cannot add token `{}`: {}", text, e));
        self.cursor = stop + 1;
        self.last_stop = stop;
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.builder
            .finish_node(self.last_stop)
            .unwrap_or_else(|e| panic!("cannot close node: {}", e));
        self
    }

    /// Rule node holding a single token.
    pub fn leaf(&mut self, rule: &str, token: &str, text: &str) -> &mut Self {
        self.open(rule).token(token, text).close()
    }

    /// `name` wrapping an identifier.
    pub fn name(&mut self, text: &str) -> &mut Self {
        self.leaf("name", "IDENTIFIER_", text)
    }

    /// `expr -> numberLiterals -> NUMBER_`
    pub fn number_expr(&mut self, text: &str) -> &mut Self {
        self.open("expr").leaf("numberLiterals", "NUMBER_", text).close()
    }

    /// `expr -> parameterMarker -> QUESTION_`
    pub fn marker_expr(&mut self) -> &mut Self {
        self.open("expr").leaf("parameterMarker", "QUESTION_", "?").close()
    }

    /// `expr -> columnName -> name`
    pub fn column_expr(&mut self, name: &str) -> &mut Self {
        self.open("expr").open("columnName").name(name).close().close()
    }

    /// `expr -> (number op number)`
    pub fn binary_expr(&mut self, left: &str, op: &str, right: &str) -> &mut Self {
        self.open("expr")
            .number_expr(left)
            .token("OPERATOR_", op)
            .number_expr(right)
            .close()
    }

    pub fn build(self) -> ParseTree {
        self.builder
            .finish()
            .unwrap_or_else(|e| panic!("fixture tree is incomplete: {}", e))
    }
}
