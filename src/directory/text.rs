/// Trimmed value, or `None` when nothing is left after trimming.
pub fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Capitalizes the first letter of every run of letters and lower-cases the
/// rest. Any non-letter (space, hyphen, apostrophe, digit) starts a new word.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// True when `value` has no lower-case letter. A value without letters
/// ("2", "---") counts as upper-case.
pub fn is_upper(value: &str) -> bool {
    !value.chars().any(char::is_lowercase)
}
