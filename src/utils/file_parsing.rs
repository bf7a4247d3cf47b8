/// Splits one CSV line into unquoted, trimmed cells.
///
/// Only `"` quotes; a doubled `""` inside quotes is a literal quote. An
/// apostrophe is ordinary text. A trailing comma yields a trailing empty
/// cell, so a row with a blank last value keeps the header's arity.
pub fn split_csv_line(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cur.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                cur.push(ch);
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            ',' => {
                out.push(cur.trim().to_string());
                cur.clear();
            }
            _ => cur.push(ch),
        }
    }
    out.push(cur.trim().to_string());
    out
}
