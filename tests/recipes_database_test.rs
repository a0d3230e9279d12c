// ABOUTME: Integration tests for the recipe database module
// ABOUTME: Tests id assignment, round-trips, absence handling, and the listing order policy

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_test_database, draft, summer_salad};

#[tokio::test]
async fn test_create_assigns_ids_and_returns_the_stored_entity() {
    let db = create_test_database().await;

    let first = db.create_recipe(&summer_salad()).await.unwrap();
    let second = db.create_recipe(&draft("Winter Soup", 10, "PT1H")).await.unwrap();

    assert!(first.id >= 1);
    assert!(second.id > first.id);
    assert_eq!(first.name, "Summer Salad");
    assert_eq!(first.views, 265);
}

#[tokio::test]
async fn test_create_then_get_round_trips_all_non_id_fields() {
    let db = create_test_database().await;
    let submitted = summer_salad();

    let created = db.create_recipe(&submitted).await.unwrap();
    let fetched = db.get_recipe_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, submitted.name);
    assert_eq!(fetched.views, submitted.views);
    assert_eq!(fetched.cooking_time, submitted.cooking_time);
    assert_eq!(fetched.ingredients, submitted.ingredients);
    assert_eq!(fetched.description, submitted.description);
}

#[tokio::test]
async fn test_get_unknown_id_returns_none() {
    let db = create_test_database().await;

    assert!(db.get_recipe_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_on_empty_store_returns_empty_vec() {
    let db = create_test_database().await;

    let recipes = db.list_recipes_ordered().await.unwrap();
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_list_orders_by_views_descending() {
    let db = create_test_database().await;

    db.create_recipe(&draft("Low", 3, "PT10M")).await.unwrap();
    db.create_recipe(&draft("High", 100, "PT10M")).await.unwrap();
    db.create_recipe(&draft("Mid", 42, "PT10M")).await.unwrap();

    let recipes = db.list_recipes_ordered().await.unwrap();
    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, ["High", "Mid", "Low"]);
    for pair in recipes.windows(2) {
        assert!(pair[0].views >= pair[1].views);
    }
}

#[tokio::test]
async fn test_equal_views_break_ties_lexicographically_on_cooking_time() {
    let db = create_test_database().await;

    // "PT2H" sorts before "PT9M" because '2' < '9' as characters, even
    // though two hours is the longer duration. Inherited ordering policy.
    db.create_recipe(&draft("Nine Minutes", 50, "PT9M")).await.unwrap();
    db.create_recipe(&draft("Two Hours", 50, "PT2H")).await.unwrap();
    db.create_recipe(&draft("Fifteen Minutes", 50, "PT15M")).await.unwrap();

    let recipes = db.list_recipes_ordered().await.unwrap();
    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, ["Fifteen Minutes", "Two Hours", "Nine Minutes"]);
}

#[tokio::test]
async fn test_listing_order_is_stable_across_repeated_calls() {
    let db = create_test_database().await;

    db.create_recipe(&draft("A", 7, "PT30M")).await.unwrap();
    db.create_recipe(&draft("B", 7, "PT30M")).await.unwrap();
    db.create_recipe(&draft("C", 7, "PT30M")).await.unwrap();

    let first_pass = db.list_recipes_ordered().await.unwrap();
    let second_pass = db.list_recipes_ordered().await.unwrap();

    assert_eq!(first_pass, second_pass);
}
