//! HCL literal formatting shared by the generated blocks.

/// Quote a value as an HCL string literal.
///
/// Quotes, backslashes and newlines are escaped and `${` is written as
/// `$${` so user values never start an interpolation.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');

    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '$' if chars.peek() == Some(&'{') => quoted.push_str("$$"),
            _ => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
}

/// Render a list of strings as a multi-line HCL list.
///
/// Each entry goes on its own line, two spaces deeper than `indent`, and is
/// followed by a comma. The closing bracket sits at `indent`. An empty list is
/// still an opening and a closing bracket on separate lines.
pub fn string_list(items: &[String], indent: &str) -> String {
    let mut list = String::from("[\n");
    for item in items {
        list.push_str(indent);
        list.push_str("  ");
        list.push_str(&quote(item));
        list.push_str(",\n");
    }
    list.push_str(indent);
    list.push(']');
    list
}
