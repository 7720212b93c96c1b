//! Entity count formatting for node labels

/// Format with comma thousands separators: `1234567` -> `1,234,567`
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Node label: the bare name, or `name (N)` when the count is non-zero
pub fn node_label(name: &str, count: Option<u64>) -> String {
    match count {
        Some(n) if n > 0 => format!("{} ({})", name, format_count(n)),
        _ => name.to_string(),
    }
}
