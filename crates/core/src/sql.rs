//! SQL string-literal quoting
//!
//! Value kinds render themselves as SQL literals by handing their canonical
//! string form to [`quote_string`]. The SQL text layer owns everything beyond
//! quoting (statement assembly, dialect concerns).

/// Render a string as a single-quoted SQL literal
///
/// Embedded single quotes are doubled per the SQL standard. The output can be
/// pasted into a statement to reconstruct the original value.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}
