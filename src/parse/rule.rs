//! Grammar rule names the extractors look for

use std::fmt;

/// Rule names of the SQL grammar that segment extraction depends on.
///
/// The grammar itself lives outside this crate; these are the production
/// names it emits, so a mismatch here surfaces as a missing node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    Top,
    Expr,
    Alias,
    ParameterMarker,
    Literals,
    NumberLiterals,
    StringLiterals,
    BooleanLiterals,
    NullValueLiterals,
    ColumnName,
    TableName,
    Owner,
    Name,
    LimitClause,
    LimitOffset,
    LimitRowCount,
    /// `PERCENT` keyword token of `TOP n PERCENT`
    Percent,
}

impl RuleName {
    /// Name of the production as the grammar spells it.
    pub fn name(&self) -> &'static str {
        match self {
            RuleName::Top => "top",
            RuleName::Expr => "expr",
            RuleName::Alias => "alias",
            RuleName::ParameterMarker => "parameterMarker",
            RuleName::Literals => "literals",
            RuleName::NumberLiterals => "numberLiterals",
            RuleName::StringLiterals => "stringLiterals",
            RuleName::BooleanLiterals => "booleanLiterals",
            RuleName::NullValueLiterals => "nullValueLiterals",
            RuleName::ColumnName => "columnName",
            RuleName::TableName => "tableName",
            RuleName::Owner => "owner",
            RuleName::Name => "name",
            RuleName::LimitClause => "limitClause",
            RuleName::LimitOffset => "limitOffset",
            RuleName::LimitRowCount => "limitRowCount",
            RuleName::Percent => "PERCENT",
        }
    }

    /// Literal rules, in the order the expression resolver tries them.
    pub const LITERALS: [RuleName; 4] = [
        RuleName::NumberLiterals,
        RuleName::StringLiterals,
        RuleName::BooleanLiterals,
        RuleName::NullValueLiterals,
    ];
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
