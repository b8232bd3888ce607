//! Integration tests for ViaCepClient using wiremock.

use cepweather_core::{Cep, CepResolver, ViaCepClient, WeatherError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ViaCepClient {
    ViaCepClient::new(server.uri(), reqwest::Client::new())
}

fn cep(raw: &str) -> Cep {
    Cep::parse(raw).expect("test cep must be valid")
}

#[tokio::test]
async fn resolves_locality_from_json_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310930/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cep": "01310-930",
            "logradouro": "Avenida Paulista",
            "localidade": "São Paulo",
            "uf": "SP"
        })))
        .mount(&mock_server)
        .await;

    let locality = client(&mock_server).resolve(&cep("01310930")).await.unwrap();

    assert_eq!(locality, "São Paulo");
}

#[tokio::test]
async fn http_404_maps_to_cep_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/99999999/json/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).resolve(&cep("99999999")).await.unwrap_err();

    assert!(matches!(err, WeatherError::CepNotFound));
    assert_eq!(err.http_status(), 404);
}

#[tokio::test]
async fn erro_flag_maps_to_cep_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "erro": true })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).resolve(&cep("99999999")).await.unwrap_err();

    assert!(matches!(err, WeatherError::CepNotFound));
}

#[tokio::test]
async fn unexpected_status_maps_to_bad_gateway() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310930/json/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).resolve(&cep("01310930")).await.unwrap_err();

    assert!(matches!(err, WeatherError::CepServiceFailed(500)));
    assert_eq!(err.http_status(), 502);
    assert_eq!(err.to_string(), "cep service error");
}

#[tokio::test]
async fn truncated_body_maps_to_invalid_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310930/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"localidade": "São"#))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).resolve(&cep("01310930")).await.unwrap_err();

    assert!(matches!(err, WeatherError::InvalidCepPayload(_)));
    assert_eq!(err.http_status(), 502);
}

#[tokio::test]
async fn missing_localidade_maps_to_invalid_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01310930/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cep": "01310-930",
            "uf": "SP"
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).resolve(&cep("01310930")).await.unwrap_err();

    assert!(matches!(err, WeatherError::InvalidCepPayload(_)));
}

#[tokio::test]
async fn unreachable_server_maps_to_unreachable() {
    // Bind-then-drop leaves an address nothing is listening on. The server
    // must be un-pooled (`builder().start()`): pooled servers from
    // `MockServer::start()` keep listening after the handle is dropped.
    let mock_server = MockServer::builder().start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = ViaCepClient::new(uri, reqwest::Client::new());
    let err = client.resolve(&cep("01310930")).await.unwrap_err();

    assert!(matches!(err, WeatherError::CepServiceUnreachable(_)));
    assert_eq!(err.to_string(), "failed to reach CEP service");
}
