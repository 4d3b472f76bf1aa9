//! Text canonicalization for column names and country names.

/// Canonicalize a column name: trim, lowercase, spaces to underscores.
///
/// Applying this twice gives the same result as applying it once.
pub fn canonical_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Title-case a piece of text after trimming it.
///
/// Each run of letters starts with an uppercase letter and continues in
/// lowercase; any non-letter (space, hyphen, apostrophe, digit) starts a
/// new run. `"democratic republic of the congo"` becomes
/// `"Democratic Republic Of The Congo"` and `"guinea-bissau"` becomes
/// `"Guinea-Bissau"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for ch in text.trim().chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                // Multi-char uppercase forms keep only their first char upper.
                let mut upper = ch.to_uppercase();
                if let Some(first) = upper.next() {
                    out.push(first);
                }
                for rest in upper {
                    out.extend(rest.to_lowercase());
                }
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

/// Format an imputed number the way it is written back into a cell.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
