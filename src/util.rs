pub fn format_score(value: f64) -> String {
    format!("{value:.3}")
}

pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let head = text.chars().take(max_chars.saturating_sub(1)).collect::<String>();
    format!("{head}…")
}
