//! Structural keys: the durable identity of a room.
//!
//! In-session ids are handles into one loaded tree and die with it. The
//! structural key is derived from a room's position in the hierarchy and is
//! the only identity that survives reloads, floor copies and version saves.

/// Derives the composite key `"{section}|{floor}|{space}|{room}"`.
///
/// Segments are trimmed; a missing section index becomes an empty segment.
/// Never fails: a room with a degenerate ancestor chain still gets a key.
///
/// The key is deliberately not unique: two same-named rooms in one space
/// share it. Callers reconcile such collisions last-match-wins in traversal
/// order (see [`save_selections`](crate::select::save_selections)).
#[must_use]
pub fn structural_key(
    section_index: Option<usize>,
    floor_label: &str,
    space_identifier: &str,
    room_name: &str,
) -> String {
    let section = section_index.map(|i| i.to_string()).unwrap_or_default();
    format!(
        "{}|{}|{}|{}",
        section,
        floor_label.trim(),
        space_identifier.trim(),
        room_name.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_inputs_yield_identical_keys() {
        let a = structural_key(Some(2), "1 этаж", "кв 3", "Кухня");
        let b = structural_key(Some(2), "1 этаж", "кв 3", "Кухня");
        assert_eq!(a, b);
        assert_eq!(a, "2|1 этаж|кв 3|Кухня");
    }

    #[test]
    fn segments_are_trimmed() {
        assert_eq!(
            structural_key(Some(0), " 1 этаж ", "кв 3 ", " Кухня"),
            "0|1 этаж|кв 3|Кухня"
        );
    }

    #[test]
    fn missing_section_becomes_empty_segment() {
        assert_eq!(
            structural_key(None, "1 этаж", "кв 3", "Кухня"),
            "|1 этаж|кв 3|Кухня"
        );
    }
}
