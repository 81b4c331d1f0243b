use httpmock::prelude::*;
use portfolio_page::{HttpDataProvider, LocalStorage, Section, SiteGenerator, ViewState};
use reqwest::Client;
use tempfile::TempDir;

#[tokio::test]
async fn test_end_to_end_full_portfolio() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start_async().await;
    let profile_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/entities/Profile");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{
                "id": "p1",
                "full_name": "Grace Hopper",
                "title": "Compiler Engineer",
                "bio": "Taught computers to read English.",
                "detailed_about": "Navy officer.\n\nInventor of the first compiler.",
                "location": "Arlington",
                "email": "grace@example.com"
            }]));
        })
        .await;
    let project_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/entities/Project")
                .query_param("sort", "-completion_date");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{
                "title": "A-0 System",
                "description": "First compiler.",
                "technologies": ["UNIVAC"],
                "featured": true,
                "completion_date": "1952-05-01"
            }]));
        })
        .await;
    let skill_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/entities/Skill")
                .query_param("sort", "category");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                {"name": "COBOL", "category": "technical", "proficiency": 5}
            ]));
        })
        .await;
    let experience_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/entities/Experience")
                .query_param("sort", "-start_date");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{
                "title": "Senior Mathematician",
                "company": "Eckert-Mauchly",
                "start_date": "1949-01-01",
                "end_date": "1950-12-31"
            }]));
        })
        .await;

    let provider = HttpDataProvider::new(Client::new(), &server.base_url());
    let storage = LocalStorage::new(output_path.clone());
    let mut site = SiteGenerator::new(provider, storage, "index.html");

    let location = site.run().await.unwrap();

    profile_mock.assert_async().await;
    project_mock.assert_async().await;
    skill_mock.assert_async().await;
    experience_mock.assert_async().await;

    assert!(location.ends_with("index.html"));
    assert!(matches!(site.state(), ViewState::Loaded(_)));

    let html = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert!(html.contains("Grace Hopper"));
    assert!(html.contains("id=\"skills\""));
    assert!(html.contains("A-0 System"));
    assert!(html.contains("Jan 1949 - Dec 1950"));
    assert!(html.contains("mailto:grace@example.com"));
}

#[tokio::test]
async fn test_failing_lists_degrade_to_partial_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/entities/Profile");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"full_name": "Grace Hopper"}]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/entities/Project");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"title": "A-0 System"}]));
        })
        .await;
    for kind in ["Skill", "Experience"] {
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/entities/{}", kind));
                then.status(500);
            })
            .await;
    }

    let provider = HttpDataProvider::new(Client::new(), &server.base_url());
    let mut site = SiteGenerator::new(provider, LocalStorage::new(output_path), "index.html");
    site.run().await.unwrap();

    let sections = portfolio_page::PageView::from_state(site.state())
        .sections()
        .to_vec();
    assert!(sections.contains(&Section::Projects));
    assert!(!sections.contains(&Section::Skills));
    assert!(!sections.contains(&Section::Experience));

    let html = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert!(html.contains("A-0 System"));
    assert!(!html.contains("id=\"skills\""));
}

#[tokio::test]
async fn test_unreachable_provider_writes_welcome_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    // Nothing listens on port 9 (discard) locally.
    let provider = HttpDataProvider::new(Client::new(), "http://127.0.0.1:9");
    let mut site = SiteGenerator::new(provider, LocalStorage::new(output_path), "index.html");

    assert!(site.run().await.is_ok());
    assert_eq!(site.state(), &ViewState::EmptyProfile);

    let html = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert!(html.contains("Welcome to Your Portfolio"));
}
