/// Characters that dialects use to quote identifiers: MySQL backticks,
/// SQL Server brackets, ANSI double quotes and single quotes.
const QUOTE_CHARS: [char; 5] = ['`', '[', ']', '"', '\''];

/// Canonicalizes an identifier by dropping every dialect quoting character
/// and surrounding whitespace.
///
/// Applying it to an already canonical name returns the name unchanged.
pub fn exactly_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !QUOTE_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Strips the enclosing quotes of a string literal and collapses doubled
/// quote characters, e.g. `'it''s'` becomes `it's`.
///
/// National (`N'...'`) literals lose their prefix too. Text that is not a
/// quoted literal is returned as is.
pub fn unquote_string_literal(literal: &str) -> String {
    let body = literal
        .strip_prefix('N')
        .or_else(|| literal.strip_prefix('n'))
        .filter(|rest| rest.starts_with('\''))
        .unwrap_or(literal);

    for quote in ['\'', '"'] {
        if body.len() >= 2 && body.starts_with(quote) && body.ends_with(quote) {
            let inner = &body[1..body.len() - 1];
            let doubled: String = [quote, quote].iter().collect();
            return inner.replace(&doubled, &quote.to_string());
        }
    }
    literal.to_string()
}
