use btc_lookup::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_openapi_documents_every_json_endpoint() {
    let spec = ApiDoc::openapi();

    for path in [
        "/btc_rate",
        "/transaction/{hash}",
        "/wallet/{address}",
        "/wallet/transactions/{address}",
        "/wallet/balance/{address}",
    ] {
        let item = spec
            .paths
            .paths
            .get(path)
            .unwrap_or_else(|| panic!("missing path {} in OpenAPI document", path));
        assert!(item.get.is_some(), "{} should be a GET endpoint", path);
    }
}

#[test]
fn test_openapi_declares_error_schema() {
    let spec = ApiDoc::openapi();
    let components = spec.components.expect("components should be generated");

    assert!(components.schemas.contains_key("ApiError"));
    assert!(components.schemas.contains_key("UpstreamDocument"));
}

#[test]
fn test_openapi_serializes_to_json() {
    let json = ApiDoc::openapi().to_pretty_json().unwrap();
    assert!(json.contains("\"/wallet/transactions/{address}\""));
}
