use serde_json::Value;
use shelfview_testing::TestWorld;
use shelfview_testing::fixtures::sample_catalog;

fn catalog_world() -> TestWorld {
    let world = TestWorld::new();
    world.seed("products", &sample_catalog()).unwrap();
    world
}

fn list_json(world: &TestWorld, extra: &[&str]) -> Value {
    let mut args = vec!["--collection", "products", "list", "--format", "json"];
    args.extend_from_slice(extra);
    let result = world.run(&args).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    result.json().unwrap()
}

fn names(frame: &Value) -> Vec<String> {
    frame["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_category_filter() {
    let world = catalog_world();
    let frame = list_json(&world, &["--category", "electronics"]);

    assert_eq!(frame["matching"], 3);
    for name in names(&frame) {
        assert!(
            ["Wireless Bluetooth Headphones", "Smart Fitness Watch", "Wireless Gaming Mouse"]
                .contains(&name.as_str()),
            "unexpected item: {}",
            name
        );
    }
}

#[test]
fn test_price_bracket_upper_bound_inclusive() {
    let world = catalog_world();

    // (50, 100]: Yoga Mat 59.99, Gaming Mouse 89.99, Desk Lamp 79.99
    let frame = list_json(&world, &["--price", "51-100"]);
    assert_eq!(frame["matching"], 3);

    // Nothing above 500 in the catalog.
    let frame = list_json(&world, &["--price", "501+"]);
    assert_eq!(frame["matching"], 0);
}

#[test]
fn test_minimum_rating_filter() {
    let world = catalog_world();
    let frame = list_json(&world, &["--rating", "4.5+"]);

    assert_eq!(frame["matching"], 5);
    for item in frame["items"].as_array().unwrap() {
        assert!(item["rating"].as_f64().unwrap() >= 4.5);
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let world = catalog_world();
    let frame = list_json(&world, &["--search", "WIRELESS"]);

    assert_eq!(frame["matching"], 2);
}

#[test]
fn test_filters_combine_as_and() {
    let world = catalog_world();
    let frame = list_json(
        &world,
        &["--category", "electronics", "--price", "101-200", "--search", "wireless"],
    );

    assert_eq!(names(&frame), ["Wireless Bluetooth Headphones"]);
}

#[test]
fn test_sort_by_price() {
    let world = catalog_world();

    let frame = list_json(&world, &["--sort", "price"]);
    assert_eq!(names(&frame)[0], "Plant-Based Cookbook");

    let frame = list_json(&world, &["--sort", "price-desc"]);
    assert_eq!(names(&frame)[0], "Ergonomic Office Chair");
}

#[test]
fn test_sort_by_name_is_case_insensitive_alphabetical() {
    let world = catalog_world();
    let frame = list_json(&world, &["--sort", "name"]);

    let listed = names(&frame);
    let mut sorted = listed.clone();
    sorted.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    assert_eq!(listed, sorted);
}

#[test]
fn test_pagination_slices_the_view() {
    let world = catalog_world();

    let frame = list_json(&world, &["--page-size", "4"]);
    assert_eq!(frame["total_pages"], 3);
    assert_eq!(frame["items"].as_array().unwrap().len(), 4);

    let frame = list_json(&world, &["--page-size", "4", "--page", "3"]);
    assert_eq!(frame["page"], 3);
    assert_eq!(frame["items"].as_array().unwrap().len(), 2);
}

#[test]
fn test_out_of_range_page_is_rejected() {
    let world = catalog_world();

    let result = world
        .run(&["--collection", "products", "list", "--page-size", "4", "--page", "9"])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("out of range"));
}

#[test]
fn test_zero_page_size_is_rejected() {
    let world = catalog_world();

    let result = world
        .run(&["--collection", "products", "list", "--page-size", "0"])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("page size must be at least 1"));
}

#[test]
fn test_unknown_filter_token_is_a_usage_error() {
    let world = catalog_world();

    let result = world
        .run(&["--collection", "products", "list", "--price", "50-51"])
        .unwrap();
    assert!(!result.success());
}

#[test]
fn test_status_filter_tracks_toggles() {
    let world = catalog_world();

    let frame = list_json(&world, &["--status", "completed"]);
    assert_eq!(frame["matching"], 0);

    let listed = list_json(&world, &[]);
    let id = listed["items"][0]["id"].as_str().unwrap()[..8].to_string();
    world
        .run(&["--collection", "products", "toggle", &id])
        .unwrap();

    let frame = list_json(&world, &["--status", "completed"]);
    assert_eq!(frame["matching"], 1);
}
