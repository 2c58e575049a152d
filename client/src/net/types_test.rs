use super::*;

#[test]
fn login_request_serializes_exactly_username_and_password() {
    let req = LoginRequest::new("alice", "s3cret");
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "username": "alice", "password": "s3cret" }));
    assert_eq!(value.as_object().map(serde_json::Map::len), Some(2));
}

#[test]
fn login_request_debug_redacts_password() {
    let req = LoginRequest::new("alice", "s3cret");
    let debug = format!("{req:?}");
    assert!(debug.contains("alice"));
    assert!(!debug.contains("s3cret"));
}

#[test]
fn http_response_success_covers_2xx_only() {
    assert!(HttpResponse::new(200, "").is_success());
    assert!(HttpResponse::new(204, "").is_success());
    assert!(HttpResponse::new(299, "").is_success());
    assert!(!HttpResponse::new(199, "").is_success());
    assert!(!HttpResponse::new(302, "").is_success());
    assert!(!HttpResponse::new(403, "").is_success());
    assert!(!HttpResponse::new(500, "").is_success());
}
