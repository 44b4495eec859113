//! Statement fixtures
//!
//! Trees shaped like the SQL Server and MySQL grammars produce them.

use super::TreeFixture;
use sqlsegment::parse::ParseTree;

pub const ROW_NUMBER_ALIAS: &str = "rownum_";

/// `SELECT TOP <bound> [PERCENT] ROW_NUMBER() OVER (ORDER BY id) AS rownum_, * FROM t`
///
/// `bound` writes everything between `TOP` and `PERCENT`/`ROW_NUMBER`.
pub fn sqlserver_top(sql: &str, bound: impl FnOnce(&mut TreeFixture), percent: bool) -> ParseTree {
    let mut f = TreeFixture::new(sql);
    f.open("select")
        .token("SELECT", "SELECT")
        .open("selectItems")
        .open("selectItem")
        .open("top")
        .token("TOP", "TOP");
    bound(&mut f);
    if percent {
        f.token("PERCENT", "PERCENT");
    }
    f.close()
        .token("ROW_NUMBER", "ROW_NUMBER")
        .token("LP_", "(")
        .token("RP_", ")")
        .token("OVER", "OVER")
        .token("LP_", "(")
        .open("orderByClause")
        .token("ORDER", "ORDER")
        .token("BY", "BY")
        .open("columnName")
        .name("id")
        .close()
        .close()
        .token("RP_", ")")
        .token("AS", "AS")
        .leaf("alias", "IDENTIFIER_", ROW_NUMBER_ALIAS)
        .close()
        .token("COMMA_", ",")
        .leaf("unqualifiedShorthand", "ASTERISK_", "*")
        .close();
    from_single_table(&mut f, "t");
    f.close();
    f.build()
}

/// `SELECT TOP 10 * FROM t` where the grammar produced no row-number alias.
pub fn sqlserver_top_without_alias() -> ParseTree {
    let mut f = TreeFixture::new("SELECT TOP 10 * FROM t");
    f.open("select")
        .token("SELECT", "SELECT")
        .open("top")
        .token("TOP", "TOP")
        .number_expr("10")
        .close()
        .open("selectItems")
        .leaf("unqualifiedShorthand", "ASTERISK_", "*")
        .close();
    from_single_table(&mut f, "t");
    f.close();
    f.build()
}

/// `SELECT * FROM t`
pub fn plain_select() -> ParseTree {
    let mut f = TreeFixture::new("SELECT * FROM t");
    f.open("select")
        .token("SELECT", "SELECT")
        .open("selectItems")
        .leaf("unqualifiedShorthand", "ASTERISK_", "*")
        .close();
    from_single_table(&mut f, "t");
    f.close();
    f.build()
}

fn from_single_table(f: &mut TreeFixture, table: &str) {
    f.open("fromClause")
        .token("FROM", "FROM")
        .open("tableFactor")
        .open("tableName")
        .name(table)
        .close()
        .close()
        .close();
}

/// `SELECT o.id, name FROM orders o, users LIMIT ?, 10`
pub fn mysql_limit_comma() -> ParseTree {
    let mut f = TreeFixture::new("SELECT o.id, name FROM orders o, users LIMIT ?, 10");
    f.open("select")
        .token("SELECT", "SELECT")
        .open("selectItems")
        .open("selectItem")
        .open("columnName")
        .leaf("owner", "IDENTIFIER_", "o")
        .token("DOT_", ".")
        .name("id")
        .close()
        .close()
        .token("COMMA_", ",")
        .open("selectItem")
        .open("columnName")
        .name("name")
        .close()
        .close()
        .close()
        .open("fromClause")
        .token("FROM", "FROM")
        .open("tableFactor")
        .open("tableName")
        .name("orders")
        .close()
        .leaf("alias", "IDENTIFIER_", "o")
        .close()
        .token("COMMA_", ",")
        .open("tableFactor")
        .open("tableName")
        .name("users")
        .close()
        .close()
        .close()
        .open("limitClause")
        .token("LIMIT", "LIMIT")
        .open("limitOffset")
        .leaf("parameterMarker", "QUESTION_", "?")
        .close()
        .token("COMMA_", ",")
        .open("limitRowCount")
        .leaf("numberLiterals", "NUMBER_", "10")
        .close()
        .close()
        .close();
    f.build()
}

/// `SELECT name FROM users WHERE id = ? LIMIT 10 OFFSET ?`
pub fn mysql_limit_offset() -> ParseTree {
    let mut f = TreeFixture::new("SELECT name FROM users WHERE id = ? LIMIT 10 OFFSET ?");
    f.open("select")
        .token("SELECT", "SELECT")
        .open("selectItems")
        .open("selectItem")
        .open("columnName")
        .name("name")
        .close()
        .close()
        .close();
    from_single_table(&mut f, "users");
    f.open("whereClause")
        .token("WHERE", "WHERE")
        .open("expr")
        .column_expr("id")
        .token("EQ_", "=")
        .marker_expr()
        .close()
        .close()
        .open("limitClause")
        .token("LIMIT", "LIMIT")
        .open("limitRowCount")
        .leaf("numberLiterals", "NUMBER_", "10")
        .close()
        .token("OFFSET", "OFFSET")
        .open("limitOffset")
        .leaf("parameterMarker", "QUESTION_", "?")
        .close()
        .close()
        .close();
    f.build()
}

/// `SELECT * FROM t LIMIT <row count>`
///
/// `row_count` writes the content of the `limitRowCount` node.
pub fn mysql_limit_row_count(sql: &str, row_count: impl FnOnce(&mut TreeFixture)) -> ParseTree {
    let mut f = TreeFixture::new(sql);
    f.open("select")
        .token("SELECT", "SELECT")
        .open("selectItems")
        .leaf("unqualifiedShorthand", "ASTERISK_", "*")
        .close();
    from_single_table(&mut f, "t");
    f.open("limitClause").token("LIMIT", "LIMIT").open("limitRowCount");
    row_count(&mut f);
    f.close().close().close();
    f.build()
}
