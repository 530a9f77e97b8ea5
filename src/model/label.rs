/// Normalizes a label name: trimmed, inner spaces replaced by hyphens, lowercased.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_label_name(raw: &str) -> Option<String> {
    let normalized = raw.trim().replace(' ', "-").to_lowercase();

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
