//! Input formatters applied as the operator types

/// Group card digits in blocks of four: `4111111111111111` -> `4111 1111 1111 1111`
///
/// Existing whitespace is stripped first, so formatting an already formatted
/// value returns it unchanged.
pub fn format_card_number(input: &str) -> String {
    let mut formatted = String::with_capacity(input.len() + input.len() / 4);
    for (i, c) in input.chars().filter(|c| !c.is_whitespace()).enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}

/// Force expiry input into `MM/YY`
///
/// Whitespace and slashes are dropped, a `/` goes after the month and
/// anything past four digits is cut off.
pub fn format_expiry(input: &str) -> String {
    let value: Vec<char> = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .collect();

    if value.len() > 2 {
        let month: String = value[..2].iter().collect();
        let year: String = value[2..value.len().min(4)].iter().collect();
        format!("{}/{}", month, year)
    } else {
        value.into_iter().collect()
    }
}

/// First `end` characters, counted in chars rather than bytes
pub fn char_prefix(s: &str, end: usize) -> &str {
    char_slice(s, 0, end)
}

/// Characters `start..end`, clamped to the string's length
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len());
    let start = byte_at(start);
    let end = byte_at(end).max(start);
    &s[start..end]
}
