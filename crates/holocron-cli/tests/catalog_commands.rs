use assert_cmd::Command;
use holocron_testing::{CATALOG_FILE, TestWorld};
use predicates::prelude::*;

#[test]
fn test_species_search_is_case_insensitive() {
    let world = TestWorld::new().with_sample_catalog().unwrap();

    let json = world
        .run(&["species", "list", "--search", "WOOK", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    let species = json["content"]["species"].as_array().unwrap();
    assert_eq!(species.len(), 1);
    assert_eq!(species[0]["name"], "Wookie");
    assert_eq!(json["content"]["search"], "WOOK");
}

#[test]
fn test_species_list_without_search_lists_all() {
    let world = TestWorld::new().with_sample_catalog().unwrap();

    let json = world
        .run(&["species", "list", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    assert_eq!(json["content"]["species"].as_array().unwrap().len(), 4);
}

#[test]
fn test_movies_listed_in_episode_order() {
    let world = TestWorld::new().with_sample_catalog().unwrap();

    let json = world
        .run(&["movies", "list", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    let episodes: Vec<u64> = json["content"]["movies"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["episode"].as_u64())
        .collect();
    assert_eq!(episodes, vec![1, 4, 5, 6]);
}

#[test]
#[allow(deprecated)]
fn test_offline_without_cache_fails() {
    let world = TestWorld::new();

    let mut cmd = Command::cargo_bin("holocron").unwrap();
    world.configure_command(&mut cmd).args(["people", "list"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Catalog cache not found"))
        .stdout(predicate::str::is_empty());
}

#[test]
#[allow(deprecated)]
fn test_invalid_birth_year_rejected_by_parser() {
    let world = TestWorld::new().with_sample_catalog().unwrap();

    let mut cmd = Command::cargo_bin("holocron").unwrap();
    world
        .configure_command(&mut cmd)
        .args(["people", "list", "--born-from", "long ago"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid birth year 'long ago'"));
}

#[test]
fn test_init_page_size_applies_to_listing() {
    let world = TestWorld::new().with_sample_catalog().unwrap();

    let result = world
        .run(&["init", "--page-size", "3", "--format", "json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["page_size"], 3);
    assert_eq!(json["badge"]["level"], "success");
    assert!(world.data_dir().join("config.toml").exists());

    let json = world
        .run(&["people", "list", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["page_size"], 3);
    assert_eq!(json["content"]["total_pages"], 4);
}

#[test]
fn test_sync_refuses_offline() {
    let world = TestWorld::new();

    let result = world.run(&["sync"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("--offline"));
}

#[test]
fn test_failed_sync_keeps_cached_catalog() {
    let world = TestWorld::new()
        .with_sample_catalog()
        .unwrap()
        .with_api("http://127.0.0.1:1/api")
        .unwrap();
    let cached_before = std::fs::read_to_string(world.data_dir().join(CATALOG_FILE)).unwrap();

    let result = world.run(&["sync", "--format", "json"]).unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "warning");
    assert!(
        json["badge"]["label"]
            .as_str()
            .unwrap()
            .contains("kept the cached catalog")
    );
    assert_eq!(json["content"]["people"], 12);
    let cached_after = std::fs::read_to_string(world.data_dir().join(CATALOG_FILE)).unwrap();
    assert_eq!(cached_before, cached_after);
}

#[test]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new();

    let json = world.run(&["--format", "json"]).unwrap().json().unwrap();

    assert_eq!(json["content"]["cache_exists"], false);
    let commands: Vec<&str> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["command"].as_str())
        .collect();
    assert!(commands.contains(&"holocron sync"));
}
