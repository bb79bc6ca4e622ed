use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use server::{create_router, AppState, RecommendationOrchestrator, ServerConfig};

fn create_test_server() -> TestServer {
    let orchestrator = RecommendationOrchestrator::builtin().unwrap();
    let state = AppState::new(orchestrator, ServerConfig::default());
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_pages_render() {
    let server = create_test_server();

    for (path, needle) in [
        ("/", "Welcome to the Movie Recommendation System"),
        ("/recommend", "Start typing a movie title"),
        ("/about", "About This App"),
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(response.text().contains(needle), "{path} missing '{needle}'");
    }
}

#[tokio::test]
async fn test_recommend_page_with_title() {
    let server = create_test_server();
    let response = server
        .get("/recommend")
        .add_query_param("title", "The Matrix")
        .add_query_param("count", 3)
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Recommendations for 'The Matrix':"));
    assert_eq!(html.matches("<li>🎥").count(), 3);
}

#[tokio::test]
async fn test_recommend_page_not_found() {
    let server = create_test_server();
    let response = server
        .get("/recommend")
        .add_query_param("title", "Inceptoin")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Movie not found!"));
    assert!(html.contains(">Inception</a>"));
}

#[tokio::test]
async fn test_list_movies() {
    let server = create_test_server();
    let response = server.get("/api/v1/movies").await;
    response.assert_status_ok();

    let movies: Vec<Value> = response.json();
    assert_eq!(movies.len(), 50);
    assert_eq!(movies[0]["id"], 1);
    assert_eq!(movies[0]["title"], "Inception");
    assert_eq!(movies[0]["genres"], "Sci-Fi Thriller");
}

#[tokio::test]
async fn test_api_recommend() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommend")
        .add_query_param("title", "Frozen")
        .add_query_param("count", 2)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Frozen");

    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0]["title"], "Frozen II");
    assert!(recs.iter().all(|r| r["title"] != "Frozen"));
}

#[tokio::test]
async fn test_api_recommend_default_count() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommend")
        .add_query_param("title", "Coco")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_api_recommend_unknown_title() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommend")
        .add_query_param("title", "Not A Real Movie")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Movie 'Not A Real Movie' not found");
}

#[tokio::test]
async fn test_trailing_space_is_not_found_in_page_and_api() {
    let server = create_test_server();

    let api = server
        .get("/api/v1/recommend")
        .add_query_param("title", "The Matrix ")
        .await;
    api.assert_status(StatusCode::NOT_FOUND);

    let page = server
        .get("/recommend")
        .add_query_param("title", "The Matrix ")
        .await;
    page.assert_status_ok();
    assert!(page.text().contains("Movie not found!"));
}

#[tokio::test]
async fn test_api_recommend_rejects_bad_count() {
    let server = create_test_server();
    for count in [0, 11] {
        let response = server
            .get("/api/v1/recommend")
            .add_query_param("title", "Coco")
            .add_query_param("count", count)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_api_suggest() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/suggest")
        .add_query_param("q", "Inceptoin")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["query"], "Inceptoin");
    assert_eq!(body["suggestions"][0]["title"], "Inception");
    assert_eq!(body["suggestions"][0]["score"], 78);
}

#[tokio::test]
async fn test_api_suggest_empty_query() {
    let server = create_test_server();
    let response = server.get("/api/v1/suggest").add_query_param("q", "").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["suggestions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_api_suggest_rejects_bad_threshold() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/suggest")
        .add_query_param("q", "Coco")
        .add_query_param("min_score", 150)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
