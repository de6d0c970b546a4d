//! Grid Filters
//!
//! Text search over name and number, plus the owned/missing toggle.

use crate::models::Item;
use crate::owned::OwnedSet;

/// Which items the grid shows relative to the owned set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OwnedFilter {
    #[default]
    All,
    Owned,
    Missing,
}

impl OwnedFilter {
    pub const ALL: [OwnedFilter; 3] = [OwnedFilter::All, OwnedFilter::Owned, OwnedFilter::Missing];

    pub fn label(self) -> &'static str {
        match self {
            OwnedFilter::All => "All",
            OwnedFilter::Owned => "Owned",
            OwnedFilter::Missing => "Missing",
        }
    }

    fn keeps(self, owned: &OwnedSet, id: u32) -> bool {
        match self {
            OwnedFilter::All => true,
            OwnedFilter::Owned => owned.contains(id),
            OwnedFilter::Missing => !owned.contains(id),
        }
    }
}

/// Case-insensitive name match or partial id match; blank search keeps all.
/// A leading '#' is ignored so "#25" finds what the card shows as "#025".
pub fn filter_items(items: &[Item], search: &str) -> Vec<Item> {
    let query = search.trim();
    if query.is_empty() {
        return items.to_vec();
    }
    let query = query.to_lowercase();
    let number_query = query.strip_prefix('#').unwrap_or(&query);

    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&query)
                || (!number_query.is_empty() && item.id.to_string().contains(number_query))
        })
        .cloned()
        .collect()
}

pub fn filter_owned(items: Vec<Item>, owned: &OwnedSet, mode: OwnedFilter) -> Vec<Item> {
    if mode == OwnedFilter::All {
        return items;
    }
    items.into_iter().filter(|item| mode.keeps(owned, item.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            sprite_url: None,
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(1, "bulbasaur"),
            make_item(25, "pikachu"),
            make_item(125, "electabuzz"),
            make_item(250, "ho-oh"),
            make_item(26, "raichu"),
            make_item(10025, "pikachu-25th"),
        ]
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_blank_query_is_identity() {
        let items = sample();
        assert_eq!(filter_items(&items, ""), items);
        assert_eq!(filter_items(&items, "   "), items);
    }

    #[test]
    fn test_numeric_query_matches_id_or_name() {
        let items = sample();
        let found = filter_items(&items, "25");
        assert_eq!(ids(&found), vec![25, 125, 250, 10025]);
        for item in &found {
            assert!(item.id.to_string().contains("25") || item.name.contains("25"));
        }
    }

    #[test]
    fn test_name_query_is_case_insensitive() {
        let items = sample();
        assert_eq!(ids(&filter_items(&items, "PIKA")), vec![25, 10025]);
        assert_eq!(ids(&filter_items(&items, "  chu ")), vec![25, 26, 10025]);
    }

    #[test]
    fn test_hash_prefix_matches_number() {
        let items = sample();
        assert_eq!(ids(&filter_items(&items, "#26")), vec![26]);
        assert!(filter_items(&items, "#").is_empty());
    }

    #[test]
    fn test_preserves_catalog_order() {
        let items = sample();
        assert_eq!(ids(&filter_items(&items, "a")), vec![1, 25, 125, 26, 10025]);
    }

    #[test]
    fn test_owned_filter() {
        let items = sample();
        let owned: OwnedSet = [25, 250].into_iter().collect();

        assert_eq!(ids(&filter_owned(items.clone(), &owned, OwnedFilter::All)), ids(&items));
        assert_eq!(ids(&filter_owned(items.clone(), &owned, OwnedFilter::Owned)), vec![25, 250]);
        assert_eq!(
            ids(&filter_owned(items, &owned, OwnedFilter::Missing)),
            vec![1, 125, 26, 10025]
        );
    }
}
