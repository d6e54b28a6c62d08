//! Copyright year stamp.

use crate::dom::Dom;

/// Replace the first `placeholder` in `text` with `year`.
pub fn stamp_year(text: &str, placeholder: &str, year: i32) -> String {
    text.replacen(placeholder, &year.to_string(), 1)
}

/// Rewrite the element text only when the placeholder was present, so
/// untouched text keeps its exact bytes and child markup.
pub fn update<D: Dom>(dom: &mut D, node: &D::Node, placeholder: &str, year: i32) -> bool {
    let text = dom.text(node);
    if !text.contains(placeholder) {
        return false;
    }
    dom.set_text(node, &stamp_year(&text, placeholder, year));
    tracing::debug!(year, "copyright year stamped");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_only() {
        assert_eq!(stamp_year("© 2025 Example", "2025", 2026), "© 2026 Example");
        assert_eq!(stamp_year("2025-2025", "2025", 2030), "2030-2025");
        assert_eq!(stamp_year("© Example", "2025", 2026), "© Example");
    }
}
