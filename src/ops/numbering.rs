//! Label generation for copied floors and spaces.
//!
//! Copies never reuse a label: the next label continues after the highest
//! numeric suffix already used within the same section. Labels without a
//! numeric suffix fall back to a "(copy N)" suffix, again computed from the
//! maximum in use, so repeated copies stay idempotent until inserted.

use std::collections::HashMap;

use crate::model::{Building, Floor};

/// Splits a trailing run of ASCII digits off a label.
/// `"Этаж 3"` → `("Этаж ", 3)`; `"Подвал"` → `None`.
fn split_numeric_suffix(label: &str) -> Option<(&str, u32)> {
    let bytes = label.as_bytes();
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == bytes.len() {
        return None;
    }
    let number = label[start..].parse().ok()?;
    Some((&label[..start], number))
}

/// Splits a `" (copy N)"` suffix off a label.
/// `"Подвал (copy 2)"` → `("Подвал", Some(2))`; `"Подвал"` → `("Подвал", None)`.
fn split_copy_suffix(label: &str) -> (&str, Option<u32>) {
    if let Some(idx) = label.rfind(" (copy ") {
        let rest = &label[idx..];
        if let Some(number) = rest
            .strip_prefix(" (copy ")
            .and_then(|r| r.strip_suffix(')'))
            .and_then(|n| n.parse().ok())
        {
            return (&label[..idx], Some(number));
        }
    }
    (label, None)
}

/// Derives the label for a copy of a floor labelled `base`.
///
/// Searches the floors of the same section for the highest numeric suffix
/// sharing the base's stem and returns stem + (max + 1). With no numeric
/// suffix the result is `"{base} (copy N)"`, N = highest existing copy
/// number + 1.
///
/// Pure with respect to the building: calling it twice without inserting
/// the first result returns the same label both times.
#[must_use]
pub fn next_floor_label(building: &Building, section_index: Option<usize>, base: &str) -> String {
    let base = base.trim();
    let section_labels = building
        .floors
        .iter()
        .filter(|f| f.section_index == section_index)
        .map(|f| f.label.trim());

    if let Some((stem, number)) = split_numeric_suffix(base) {
        let max = section_labels
            .filter_map(split_numeric_suffix)
            .filter(|(s, _)| *s == stem)
            .map(|(_, n)| n)
            .max()
            .unwrap_or(number);
        format!("{stem}{}", max.max(number) + 1)
    } else {
        let (stem, _) = split_copy_suffix(base);
        let max = section_labels
            .map(split_copy_suffix)
            .filter(|(s, _)| *s == stem)
            .filter_map(|(_, n)| n)
            .max()
            .unwrap_or(0);
        format!("{stem} (copy {})", max + 1)
    }
}

/// Rewrites the space identifiers of a copied floor so they continue the
/// numbering already used in the section.
///
/// Per identifier stem ("кв ", "офис "…) the copy's spaces are numbered
/// max-existing + 1, +2, … in position order. Identifiers without a numeric
/// suffix get the "(copy N)" fallback.
pub fn renumber_spaces(building: &Building, section_index: Option<usize>, floor: &mut Floor) {
    let existing: Vec<&str> = building
        .floors
        .iter()
        .filter(|f| f.section_index == section_index)
        .flat_map(|f| &f.spaces)
        .map(|s| s.identifier.trim())
        .collect();

    let mut next_by_stem: HashMap<String, u32> = HashMap::new();

    for space in &mut floor.spaces {
        let identifier = space.identifier.trim();
        if let Some((stem, _)) = split_numeric_suffix(identifier) {
            let next = next_by_stem.entry(stem.to_string()).or_insert_with(|| {
                existing
                    .iter()
                    .copied()
                    .filter_map(split_numeric_suffix)
                    .filter(|(s, _)| *s == stem)
                    .map(|(_, n)| n)
                    .max()
                    .unwrap_or(0)
                    + 1
            });
            space.identifier = format!("{stem}{next}");
            *next += 1;
        } else {
            let (stem, _) = split_copy_suffix(identifier);
            let next = next_by_stem.entry(stem.to_string()).or_insert_with(|| {
                existing
                    .iter()
                    .copied()
                    .map(split_copy_suffix)
                    .filter(|(s, _)| *s == stem)
                    .filter_map(|(_, n)| n)
                    .max()
                    .unwrap_or(0)
                    + 1
            });
            space.identifier = format!("{stem} (copy {next})");
            *next += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FloorType, Space, SpaceType};
    use pretty_assertions::assert_eq;

    fn building_with_labels(labels: &[&str]) -> Building {
        let mut building = Building::new("Дом");
        for (i, label) in labels.iter().enumerate() {
            building
                .floors
                .push(Floor::new(*label, FloorType::Residential, None, i));
        }
        building
    }

    #[test]
    fn numeric_suffix_continues_after_section_maximum() {
        let building = building_with_labels(&["Этаж 1", "Этаж 2", "Этаж 3"]);
        assert_eq!(next_floor_label(&building, None, "Этаж 3"), "Этаж 4");
    }

    #[test]
    fn label_generation_is_idempotent_until_inserted() {
        let mut building = building_with_labels(&["Этаж 1", "Этаж 2", "Этаж 3"]);

        let first = next_floor_label(&building, None, "Этаж 3");
        let second = next_floor_label(&building, None, "Этаж 3");
        assert_eq!(first, second);
        assert_eq!(first, "Этаж 4");

        building
            .floors
            .push(Floor::new(first, FloorType::Residential, None, 3));
        assert_eq!(next_floor_label(&building, None, "Этаж 3"), "Этаж 5");
    }

    #[test]
    fn sections_are_numbered_independently() {
        let mut building = building_with_labels(&["Этаж 1", "Этаж 2"]);
        for floor in &mut building.floors {
            floor.section_index = Some(0);
        }
        building
            .floors
            .push(Floor::new("Этаж 7", FloorType::Residential, Some(1), 0));

        assert_eq!(next_floor_label(&building, Some(0), "Этаж 2"), "Этаж 3");
        assert_eq!(next_floor_label(&building, Some(1), "Этаж 7"), "Этаж 8");
    }

    #[test]
    fn non_numeric_label_falls_back_to_copy_suffix() {
        let building = building_with_labels(&["Подвал"]);
        assert_eq!(
            next_floor_label(&building, None, "Подвал"),
            "Подвал (copy 1)"
        );
    }

    #[test]
    fn copy_suffix_counts_from_the_maximum_not_a_running_counter() {
        let building = building_with_labels(&["Подвал", "Подвал (copy 1)", "Подвал (copy 4)"]);
        assert_eq!(
            next_floor_label(&building, None, "Подвал"),
            "Подвал (copy 5)"
        );
        // Copying a copy lands in the same sequence.
        assert_eq!(
            next_floor_label(&building, None, "Подвал (copy 1)"),
            "Подвал (copy 5)"
        );
    }

    #[test]
    fn renumber_spaces_continues_per_stem() {
        let mut building = building_with_labels(&["1 этаж"]);
        building.floors[0].spaces.push(Space::new(
            1,
            "кв 1",
            SpaceType::Apartment,
            0,
        ));
        building.floors[0].spaces.push(Space::new(
            2,
            "кв 2",
            SpaceType::Apartment,
            1,
        ));

        let mut copy = building.floors[0].clone();
        renumber_spaces(&building, None, &mut copy);

        let identifiers: Vec<&str> = copy.spaces.iter().map(|s| s.identifier.as_str()).collect();
        assert_eq!(identifiers, vec!["кв 3", "кв 4"]);
    }
}
