use std::cmp::Ordering;

use shelfview_types::{FilterState, Item, SortKey};

/// Compute the derived view: every active predicate applied as a logical
/// AND over the full item set, then one stable sort by the selected
/// comparator. Filter-then-sort is the fixed contract.
pub fn compute_view(items: &[Item], filters: &FilterState, sort: SortKey) -> Vec<Item> {
    let mut view: Vec<Item> = items
        .iter()
        .filter(|item| matches(item, filters))
        .cloned()
        .collect();
    sort_items(&mut view, sort);
    view
}

fn matches(item: &Item, filters: &FilterState) -> bool {
    if !filters.search.is_empty() {
        let needle = filters.search.to_lowercase();
        // OR across the designated text fields, AND with everything else.
        let hit = item.name.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }

    filters.category.matches(item)
        && filters.price.matches(item)
        && filters.rating.matches(item)
        && filters.status.matches(item)
}

fn sort_items(view: &mut [Item], sort: SortKey) {
    // `sort_by` is stable: ties keep their pre-sort relative order, so
    // repeated renders are deterministic for equal keys.
    match sort {
        SortKey::Storage => {}
        SortKey::NameAsc => view.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortKey::NameDesc => view.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
        SortKey::PriceAsc => view.sort_by(|a, b| numeric_cmp(a.price, b.price)),
        SortKey::PriceDesc => view.sort_by(|a, b| numeric_cmp(b.price, a.price)),
        SortKey::RatingAsc => view.sort_by(|a, b| numeric_cmp(a.rating, b.rating)),
        SortKey::RatingDesc => view.sort_by(|a, b| numeric_cmp(b.rating, a.rating)),
    }
}

fn name_key(item: &Item) -> String {
    item.name.to_lowercase()
}

/// Missing numeric keys sort as 0.0 so unpriced/unrated items group at the
/// low end instead of poisoning the order.
fn numeric_cmp(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shelfview_types::{
        CategoryFilter, FilterChange, ItemId, Priority, RatingFilter, StatusFilter,
    };

    fn item(name: &str, category: Option<&str>, price: Option<f64>, rating: Option<f64>) -> Item {
        Item {
            id: ItemId::new(),
            name: name.to_string(),
            description: String::new(),
            category: category.map(str::to_string),
            price,
            rating,
            in_stock: true,
            completed: false,
            priority: Priority::Low,
            image_url: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    #[test]
    fn test_price_ascending_scenario() {
        let items = vec![
            item("Apple", None, Some(10.0), None),
            item("Banana", None, Some(5.0), None),
        ];
        let view = compute_view(&items, &FilterState::default(), SortKey::PriceAsc);
        let names: Vec<&str> = view.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Banana", "Apple"]);
    }

    #[test]
    fn test_category_filter_scenario() {
        let mut items: Vec<Item> = (0..3)
            .map(|i| item(&format!("Book {}", i), Some("books"), None, None))
            .collect();
        for i in 0..5 {
            items.push(item(&format!("Other {}", i), Some("electronics"), None, None));
        }

        let mut filters = FilterState::default();
        filters.apply(FilterChange::Category(CategoryFilter::Is("books".to_string())));

        let view = compute_view(&items, &filters, SortKey::Storage);
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|i| i.category.as_deref() == Some("books")));
    }

    #[test]
    fn test_filters_combine_as_and() {
        let items = vec![
            item("Cheap book", Some("books"), Some(20.0), Some(4.5)),
            item("Pricey book", Some("books"), Some(80.0), Some(4.5)),
            item("Cheap gadget", Some("electronics"), Some(20.0), Some(4.5)),
        ];

        let mut filters = FilterState::default();
        filters.apply(FilterChange::Category(CategoryFilter::Is("books".to_string())));
        filters.apply(FilterChange::Price("0-50".parse().unwrap()));

        let view = compute_view(&items, &filters, SortKey::Storage);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Cheap book");
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let mut with_desc = item("Desk Lamp", Some("home"), None, None);
        with_desc.description = "Energy-efficient LED lighting".to_string();
        let items = vec![
            with_desc,
            item("LED Monitor", Some("electronics"), None, None),
            item("Yoga Mat", Some("sports"), None, None),
        ];

        let mut filters = FilterState::default();
        filters.apply(FilterChange::Search("led".to_string()));

        let view = compute_view(&items, &filters, SortKey::Storage);
        let names: Vec<&str> = view.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Desk Lamp", "LED Monitor"]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let items = vec![
            item("banana", None, None, None),
            item("Apple", None, None, None),
            item("cherry", None, None, None),
        ];
        let view = compute_view(&items, &FilterState::default(), SortKey::NameAsc);
        let names: Vec<&str> = view.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_stable_sort_preserves_input_order_for_equal_keys() {
        let items = vec![
            item("First", None, Some(10.0), None),
            item("Second", None, Some(10.0), None),
            item("Third", None, Some(10.0), None),
        ];
        let view = compute_view(&items, &FilterState::default(), SortKey::PriceAsc);
        let names: Vec<&str> = view.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_compute_view_is_idempotent() {
        let items = vec![
            item("Zebra", Some("books"), Some(30.0), Some(4.0)),
            item("apple", Some("books"), Some(10.0), Some(4.0)),
            item("Mango", Some("home"), Some(20.0), Some(3.0)),
        ];
        let mut filters = FilterState::default();
        filters.apply(FilterChange::Rating(RatingFilter::AtLeast(3.5)));

        let first = compute_view(&items, &filters, SortKey::NameAsc);
        let second = compute_view(&items, &filters, SortKey::NameAsc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_status_filter() {
        let mut done = item("Done", None, None, None);
        done.completed = true;
        let items = vec![done, item("Open", None, None, None)];

        let mut filters = FilterState::default();
        filters.apply(FilterChange::Status(StatusFilter::Completed));
        let view = compute_view(&items, &filters, SortKey::Storage);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Done");

        filters.apply(FilterChange::Status(StatusFilter::Pending));
        let view = compute_view(&items, &filters, SortKey::Storage);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Open");
    }

    #[test]
    fn test_unpriced_items_excluded_from_price_brackets() {
        let items = vec![
            item("Priced", None, Some(75.0), None),
            item("Unpriced", None, None, None),
        ];
        let mut filters = FilterState::default();
        filters.apply(FilterChange::Price("51-100".parse().unwrap()));

        let view = compute_view(&items, &filters, SortKey::Storage);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Priced");
    }
}
