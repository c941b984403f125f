use holocron_runtime::{
    CatalogCache, CatalogClient, CatalogSource, Config, Error, LoadMode, Resource, load_catalog,
};
use holocron_testing::fixtures::sample_snapshot;
use holocron_types::{FALLBACK_TEXT, Movie, PageResponse, Person, Species};
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn person(server: &MockServer, id: u32, name: &str) -> Value {
    json!({
        "name": name,
        "birth_year": "19BBY",
        "species": [format!("{}/species/1/", server.uri())],
        "films": [format!("{}/films/1/", server.uri())],
        "url": format!("{}/people/{}/", server.uri(), id),
    })
}

fn config_for(server: &MockServer) -> Config {
    Config::default().base_url(server.uri())
}

async fn mount_people(server: &MockServer) {
    let page_two = format!("{}/people/?page=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": null,
            "previous": format!("{}/people/?page=1", server.uri()),
            "results": [person(server, 3, "R2-D2")],
        })))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/people/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": page_two,
            "previous": null,
            "results": [person(server, 1, "Luke Skywalker"), person(server, 2, "C-3PO")],
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_all_follows_next_links() {
    let server = MockServer::start().await;
    mount_people(&server).await;
    let client = CatalogClient::new(&config_for(&server)).unwrap();

    let people: Vec<Person> = client.fetch_all(Resource::People).await;

    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Luke Skywalker", "C-3PO", "R2-D2"]);
    assert_eq!(people[2].id(), "3");
}

#[tokio::test]
async fn test_server_error_substitutes_fallback_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/films/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let client = CatalogClient::new(&config_for(&server)).unwrap();

    let page: PageResponse<Movie> = client
        .fetch_page(&client.resource_url(Resource::Films))
        .await;

    assert_eq!(page.count, 0);
    assert!(page.next.is_none());
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].title, FALLBACK_TEXT);
}

#[tokio::test]
async fn test_undecodable_body_substitutes_fallback_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/species/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;
    let client = CatalogClient::new(&config_for(&server)).unwrap();

    let page: PageResponse<Species> = client
        .fetch_page(&client.resource_url(Resource::Species))
        .await;
    assert_eq!(page.results[0].name, FALLBACK_TEXT);

    // The placeholder never leaks into the walked collection
    let all: Vec<Species> = client.fetch_all(Resource::Species).await;
    assert!(all.is_empty());
}

async fn mount_films(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/films/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "title": "A New Hope",
                "episode_id": 4,
                "director": "George Lucas",
                "release_date": "1977-05-25",
                "url": format!("{}/films/1/", server.uri()),
            }],
        })))
        .mount(server)
        .await;
}

async fn mount_species(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/species/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "name": "Human",
                "classification": "mammal",
                "url": format!("{}/species/1/", server.uri()),
            }],
        })))
        .mount(server)
        .await;
}

async fn mount_catalog(server: &MockServer) {
    mount_people(server).await;
    mount_species(server).await;
    mount_films(server).await;
}

#[tokio::test]
async fn test_unreachable_host_yields_empty_collections() {
    let config = Config::default().base_url("http://127.0.0.1:1/api");
    let client = CatalogClient::new(&config).unwrap();

    let fetch = client.fetch_catalog().await;

    assert!(fetch.snapshot.people.is_empty());
    assert!(fetch.snapshot.species.is_empty());
    assert!(fetch.snapshot.movies.is_empty());
    assert!(fetch.snapshot.fetched_at.is_some());
    assert_eq!(
        fetch.failed,
        vec![Resource::People, Resource::Species, Resource::Films]
    );
}

#[tokio::test]
async fn test_fetch_catalog_keeps_healthy_endpoints() {
    let server = MockServer::start().await;
    mount_people(&server).await;
    mount_films(&server).await;
    // species is not mounted: wiremock answers 404

    let client = CatalogClient::new(&config_for(&server)).unwrap();
    let fetch = client.fetch_catalog().await;

    assert_eq!(fetch.snapshot.people.len(), 3);
    assert!(fetch.snapshot.species.is_empty());
    assert_eq!(fetch.snapshot.movies[0].episode_id, 4);
    assert_eq!(fetch.failed, vec![Resource::Species]);
    assert!(!fetch.is_complete());
}

#[tokio::test]
async fn test_offline_without_cache_is_cache_missing() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CatalogCache::in_dir(temp_dir.path());

    let err = load_catalog(&Config::default(), &cache, LoadMode::Offline)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::CacheMissing(ref p) if p == cache.path()));
}

#[tokio::test]
async fn test_cache_first_fetches_once_then_reads_cache() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    let temp_dir = TempDir::new().unwrap();
    let cache = CatalogCache::in_dir(temp_dir.path());
    let config = config_for(&server);

    let fetched = load_catalog(&config, &cache, LoadMode::CacheFirst)
        .await
        .unwrap();
    assert_eq!(fetched.source, CatalogSource::Fetched);
    assert!(cache.exists());
    assert_eq!(fetched.snapshot.people.len(), 3);

    let offline = load_catalog(&config, &cache, LoadMode::Offline)
        .await
        .unwrap();
    assert_eq!(offline.source, CatalogSource::Cache);
    assert_eq!(offline.snapshot, fetched.snapshot);
}

#[tokio::test]
async fn test_complete_refresh_overwrites_cache() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    let temp_dir = TempDir::new().unwrap();
    let cache = CatalogCache::in_dir(temp_dir.path());
    cache.save(&sample_snapshot()).unwrap();

    let refreshed = load_catalog(&config_for(&server), &cache, LoadMode::Refresh)
        .await
        .unwrap();

    assert_eq!(refreshed.source, CatalogSource::Fetched);
    assert_eq!(refreshed.snapshot.people.len(), 3);
    assert_eq!(cache.load().unwrap(), Some(refreshed.snapshot));
}

#[tokio::test]
async fn test_failed_refresh_keeps_cached_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CatalogCache::in_dir(temp_dir.path());
    let seeded = sample_snapshot();
    cache.save(&seeded).unwrap();
    let config = Config::default().base_url("http://127.0.0.1:1/api");

    let loaded = load_catalog(&config, &cache, LoadMode::Refresh)
        .await
        .unwrap();

    assert!(matches!(loaded.source, CatalogSource::Stale { .. }));
    assert_eq!(loaded.snapshot.people.len(), 12);
    assert_eq!(cache.load().unwrap(), Some(seeded));
}

#[tokio::test]
async fn test_partial_refresh_keeps_cached_catalog() {
    let server = MockServer::start().await;
    mount_people(&server).await;
    mount_films(&server).await;
    let temp_dir = TempDir::new().unwrap();
    let cache = CatalogCache::in_dir(temp_dir.path());
    let seeded = sample_snapshot();
    cache.save(&seeded).unwrap();

    let loaded = load_catalog(&config_for(&server), &cache, LoadMode::Refresh)
        .await
        .unwrap();

    assert_eq!(
        loaded.source,
        CatalogSource::Stale {
            failed: vec![Resource::Species]
        }
    );
    assert_eq!(cache.load().unwrap(), Some(seeded));
}

#[tokio::test]
async fn test_failed_first_fetch_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let cache = CatalogCache::in_dir(temp_dir.path());
    let config = Config::default().base_url("http://127.0.0.1:1/api");

    let loaded = load_catalog(&config, &cache, LoadMode::CacheFirst)
        .await
        .unwrap();

    assert!(matches!(loaded.source, CatalogSource::Partial { .. }));
    assert!(loaded.snapshot.people.is_empty());
    assert!(!cache.exists());
}
