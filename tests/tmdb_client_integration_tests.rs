use fmdb::core::controller::{DetailController, ListController};
use fmdb::core::fetch_state::FetchState;
use fmdb::core::strings::{DETAIL_UNAVAILABLE, NO_MOVIES_FOUND};
use fmdb::tmdb::{FetchError, MovieSource, TmdbClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> TmdbClient {
    TmdbClient::with_options(
        "test-key".to_string(),
        server.uri(),
        "pt-BR".to_string(),
    )
}

const POPULAR_BODY: &str = r#"{
    "page": 1,
    "results": [
        {
            "id": 693134,
            "title": "Duna: Parte Dois",
            "poster_path": "/poster.jpg",
            "backdrop_path": "/back.jpg",
            "overview": "Paul Atreides une-se a Chani.",
            "release_date": "2024-02-27",
            "vote_average": 8.2,
            "genre_ids": [878, 12]
        },
        {
            "id": 823464,
            "title": "Godzilla e Kong: O Novo Império",
            "poster_path": null,
            "backdrop_path": null,
            "overview": "",
            "release_date": "",
            "vote_average": 7.2,
            "genre_ids": []
        }
    ],
    "total_pages": 500,
    "total_results": 10000
}"#;

const DETAIL_BODY: &str = r#"{
    "id": 693134,
    "title": "Duna: Parte Dois",
    "poster_path": "/poster.jpg",
    "backdrop_path": "/back.jpg",
    "overview": "Paul Atreides une-se a Chani.",
    "release_date": "2024-02-27",
    "vote_average": 8.2,
    "vote_count": 4200,
    "runtime": 167,
    "tagline": "Longa vida aos lutadores.",
    "genres": [
        { "id": 878, "name": "Ficção científica" },
        { "id": 12, "name": "Aventura" }
    ]
}"#;

// ============================================================================
// Popular
// ============================================================================

#[tokio::test]
async fn test_popular_decodes_results_and_sends_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("language", "pt-BR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POPULAR_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let movies = client_for(&mock_server).fetch_popular().await;

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, 693134);
    assert_eq!(movies[0].title, "Duna: Parte Dois");
    assert_eq!(movies[0].poster_path.as_deref(), Some("/poster.jpg"));
    assert!(movies[1].poster_path.is_none());
}

#[tokio::test]
async fn test_popular_server_error_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.fetch_popular().await.is_empty());
    assert!(matches!(
        client.popular().await,
        Err(FetchError::Upstream { status: 500 })
    ));
}

#[tokio::test]
async fn test_popular_missing_results_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"page": 1}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.fetch_popular().await.is_empty());
}

#[tokio::test]
async fn test_popular_malformed_json_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.fetch_popular().await.is_empty());
    assert!(matches!(client.popular().await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_popular_unreachable_server_is_transport_error() {
    // Nothing listens on the discard port
    let client = TmdbClient::with_options(
        "test-key".to_string(),
        "http://127.0.0.1:9".to_string(),
        "pt-BR".to_string(),
    );

    assert!(matches!(client.popular().await, Err(FetchError::Transport(_))));
    assert!(client.fetch_popular().await.is_empty());
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn test_detail_decodes_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/693134"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("language", "pt-BR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_BODY))
        .mount(&mock_server)
        .await;

    let detail = client_for(&mock_server)
        .fetch_detail(693134)
        .await
        .expect("detail should decode");

    assert_eq!(detail.summary.title, "Duna: Parte Dois");
    assert_eq!(detail.runtime_minutes, 167);
    assert_eq!(detail.vote_count, 4200);
    assert_eq!(detail.genres.len(), 2);
    assert_eq!(detail.genres[0].name, "Ficção científica");
    assert_eq!(detail.tagline.as_deref(), Some("Longa vida aos lutadores."));
}

#[tokio::test]
async fn test_detail_not_found_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"success": false, "status_code": 34, "status_message": "The resource you requested could not be found."}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.fetch_detail(1).await.is_none());
    assert!(matches!(
        client.details(1).await,
        Err(FetchError::Upstream { status: 404 })
    ));
}

#[tokio::test]
async fn test_detail_unauthorized_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/693134"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    assert!(client_for(&mock_server).fetch_detail(693134).await.is_none());
}

// ============================================================================
// Controllers over HTTP
// ============================================================================

#[tokio::test]
async fn test_list_controller_settles_from_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POPULAR_BODY))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut list = ListController::new();
    list.load(&client).await;

    assert_eq!(list.movies().len(), 2);
    assert!(matches!(list.state(), FetchState::Ready(_)));
}

#[tokio::test]
async fn test_list_controller_error_then_retry_recovers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POPULAR_BODY))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut list = ListController::new();
    list.load(&client).await;
    assert_eq!(list.state().error_message(), Some(NO_MOVIES_FOUND));

    assert!(list.retry(&client).await);
    assert_eq!(list.movies().len(), 2);
}

#[tokio::test]
async fn test_detail_controller_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut detail = DetailController::new(5);
    detail.load(&client).await;

    assert_eq!(detail.state().error_message(), Some(DETAIL_UNAVAILABLE));
}
