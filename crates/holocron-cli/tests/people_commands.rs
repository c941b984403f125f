//! `people list|show|select` against the seeded fixture catalog.

use holocron_testing::TestWorld;
use holocron_testing::assertions::{assert_page, assert_person_count, assert_person_names};

fn world() -> TestWorld {
    TestWorld::new()
        .with_sample_catalog()
        .expect("Failed to seed catalog")
}

#[test]
fn test_list_first_page_unfiltered() {
    let world = world();

    let result = world.run(&["people", "list", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_person_count(&json, 10).unwrap();
    assert_page(&json, 1, 12).unwrap();
    assert_eq!(json["content"]["total_pages"], 2);
    assert_eq!(json["content"]["people"][0]["ordinal"], 1);
    assert_eq!(json["content"]["people"][0]["name"], "Luke Skywalker");
}

#[test]
fn test_list_second_page_holds_the_rest() {
    let world = world();

    let json = world
        .run(&["people", "list", "--page", "2", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    assert_person_names(&json, &["Boba Fett", "BB8"]).unwrap();
    assert_page(&json, 2, 12).unwrap();
    assert_eq!(json["content"]["people"][0]["ordinal"], 11);
}

#[test]
fn test_all_dimensions_combine() {
    let world = world();

    let result = world
        .run(&[
            "people",
            "list",
            "--species",
            "human",
            "--movie",
            "A New Hope",
            "--born-from",
            "45BBY",
            "--born-to",
            "19BBY",
            "--format",
            "json",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_person_names(
        &json,
        &["Luke Skywalker", "Darth Vader", "Leia Organa", "Han Solo"],
    )
    .unwrap();

    let filters = json["content"]["filters"].as_array().unwrap();
    assert_eq!(filters.len(), 4);
    assert_eq!(filters[0]["value"], "Human");
    assert_eq!(filters[2]["value"], "45BBY");
}

#[test]
fn test_negative_year_flag_value() {
    let world = world();

    let json = world
        .run(&["people", "list", "--born-to", "-100", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    assert_person_names(&json, &["C-3PO", "Chewbacca", "Yoda"]).unwrap();
}

#[test]
fn test_page_past_the_end_is_empty() {
    let world = world();

    let json = world
        .run(&[
            "people", "list", "--species", "2", "--page", "5", "--format", "json",
        ])
        .unwrap()
        .json()
        .unwrap();

    assert_person_count(&json, 0).unwrap();
    assert_page(&json, 5, 4).unwrap();
}

#[test]
fn test_huge_page_number_answers_immediately() {
    let world = world();
    let page = u64::MAX.to_string();

    let json = world
        .run(&["people", "list", "--page", &page, "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    assert_person_count(&json, 0).unwrap();
    assert_page(&json, u64::MAX, 12).unwrap();

    let result = world.run(&["people", "select", "0", "--page", &page]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("No character at row 0"));
}

#[test]
fn test_unknown_species_fails() {
    let world = world();

    let result = world.run(&["people", "list", "--species", "Gungan"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Unknown species 'Gungan'"));
}

#[test]
fn test_show_person_by_id_or_locator() {
    let world = world();

    let json = world
        .run(&["people", "show", "4", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["name"], "Darth Vader");
    assert_eq!(json["content"]["species"][0], "Human");

    let json = world
        .run(&[
            "people",
            "show",
            "https://swapi.dev/api/people/13/",
            "--format",
            "json",
        ])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["name"], "Chewbacca");
}

#[test]
fn test_show_unknown_id_fails() {
    let world = world();

    let result = world.run(&["people", "show", "999"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("No character with id '999'"));
}

#[test]
fn test_select_on_second_page_resolves_ordinal() {
    let world = world();

    let json = world
        .run(&["people", "select", "0", "--page", "2", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(json["content"]["ordinal"], 11);
    assert_eq!(json["content"]["id"], "22");
    assert_eq!(json["content"]["name"], "Boba Fett");
    assert_eq!(json["content"]["route"], "characters/11?swapiId=22");
}

#[test]
fn test_select_row_outside_page_fails() {
    let world = world();

    let result = world.run(&["people", "select", "2", "--page", "2"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("No character at row 2 of page 2"));
}

#[test]
fn test_plain_output_lists_rows() {
    let world = world();

    let result = world.run(&["people", "list", "--species", "droid"]).unwrap();
    assert!(result.success());

    let out = result.stdout();
    assert!(out.contains("Filters: species=Droid"));
    assert!(out.contains("Page 1/1 (4 matching)"));
    assert!(out.contains("R5-D4"));
    assert!(!out.contains("Luke Skywalker"));
}
