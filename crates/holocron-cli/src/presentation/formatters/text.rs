pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Comma-joined values, or `-` when there are none
pub fn list_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("Yoda", 10), "Yoda");
        assert_eq!(truncate("Obi-Wan Kenobi", 10), "Obi-Wan...");
    }

    #[test]
    fn test_list_or_dash() {
        assert_eq!(list_or_dash(&[]), "-");
        assert_eq!(
            list_or_dash(&["Human".to_string(), "Droid".to_string()]),
            "Human, Droid"
        );
    }
}
