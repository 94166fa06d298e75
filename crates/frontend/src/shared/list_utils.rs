//! List primitives shared by every list page: free-text search, column
//! sorting, 1-based pagination and post-mutation cache reconciliation.
//!
//! These are pure functions over the page's cached items; the visible set
//! is recomputed from scratch on every render, which is fine at dashboard
//! data volumes.

use std::cmp::Ordering;

/// Rows that support the free-text filter. `needle` arrives trimmed and
/// lowercased; implementors match it against their resource-specific
/// fields.
pub trait Searchable {
    fn matches_search(&self, needle: &str) -> bool;
}

/// Rows that support column sorting.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Rows addressable by their backend identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Case-insensitive substring filter. A blank query returns the full list.
pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_search(&needle))
        .cloned()
        .collect()
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Number of pages needed for `len` items; zero items means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items visible on a 1-based `page`.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Keep the current page in range after the filtered set shrinks. Does not
/// reset to page 1 — an out-of-range page is clamped to the last one.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Replace the cached item with the same key. Returns false when the item
/// is no longer cached (it then stays absent; no insert happens).
pub fn replace_by_key<T: Keyed>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.key() == updated.key()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the cached item with the given key.
pub fn remove_by_key<T: Keyed>(items: &mut Vec<T>, key: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.key() != key);
    items.len() != before
}

/// Sort indicator glyph for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        return "";
    }
    if ascending {
        "▲"
    } else {
        "▼"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: String,
        name: String,
    }

    impl Row {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
            }
        }
    }

    impl Searchable for Row {
        fn matches_search(&self, needle: &str) -> bool {
            self.name.to_lowercase().contains(needle)
        }
    }

    impl Keyed for Row {
        fn key(&self) -> &str {
            &self.id
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(&other.name),
                _ => Ordering::Equal,
            }
        }
    }

    fn sample(count: usize) -> Vec<Row> {
        (0..count)
            .map(|i| Row::new(&format!("id{i}"), &format!("item {i}")))
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let rows = vec![
            Row::new("1", "Mixer Grinder"),
            Row::new("2", "Electric Kettle"),
            Row::new("3", "Hand Mixer"),
        ];
        let hits = filter_items(&rows, "  MIXER ");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "1");
        assert_eq!(hits[1].id, "3");
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let rows = sample(5);
        assert_eq!(filter_items(&rows, ""), rows);
        assert_eq!(filter_items(&rows, "   "), rows);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rows = vec![
            Row::new("1", "Mixer Grinder"),
            Row::new("2", "Electric Kettle"),
            Row::new("3", "Hand Mixer"),
        ];
        let once = filter_items(&rows, "mixer");
        let twice = filter_items(&once, "mixer");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pages_reconstruct_the_filtered_list() {
        for len in 0..=25 {
            for page_size in 1..=7 {
                let rows = sample(len);
                let pages = total_pages(len, page_size);
                assert_eq!(pages, len.div_ceil(page_size));

                let mut rebuilt = Vec::new();
                for page in 1..=pages {
                    rebuilt.extend(page_slice(&rows, page, page_size));
                }
                assert_eq!(rebuilt, rows, "len={len} page_size={page_size}");
            }
        }
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let rows = sample(10);
        assert!(page_slice(&rows, 0, 6).is_empty());
        assert!(page_slice(&rows, 3, 6).is_empty());
        assert_eq!(page_slice(&rows, 2, 6).len(), 4);
    }

    #[test]
    fn test_clamp_page_keeps_position_when_valid() {
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(7, 5), 5);
        assert_eq!(clamp_page(1, 0), 1);
        assert_eq!(clamp_page(0, 5), 1);
    }

    #[test]
    fn test_replace_by_key_swaps_exactly_one_item() {
        let mut rows = sample(4);
        assert!(replace_by_key(&mut rows, Row::new("id2", "renamed")));
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows.iter().filter(|r| r.id == "id2").count(),
            1,
            "exactly one item keeps the key"
        );
        assert_eq!(rows[2].name, "renamed");
        assert!(!replace_by_key(&mut rows, Row::new("missing", "x")));
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_remove_by_key_shrinks_by_exactly_one() {
        let mut rows = sample(4);
        assert!(remove_by_key(&mut rows, "id1"));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.id != "id1"));
        assert!(!remove_by_key(&mut rows, "id1"));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_sort_list_respects_direction() {
        let mut rows = vec![
            Row::new("1", "kettle"),
            Row::new("2", "air fryer"),
            Row::new("3", "mixer"),
        ];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "air fryer");
        sort_list(&mut rows, "name", false);
        assert_eq!(rows[0].name, "mixer");
    }
}
