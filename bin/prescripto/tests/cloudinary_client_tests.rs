mod common;

use common::cloudinary_details;
use prescripto_core::clients::CloudinaryClient;
use prescripto_primitives::error::ApiError;
use prescripto_primitives::models::dtos::profile_dto::ImageUpload;
use serde_json::json;
use sha2::{Digest, Sha256};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn upload() -> ImageUpload {
    ImageUpload {
        file_name: "avatar.png".into(),
        content_type: Some("image/png".into()),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

#[test]
fn test_signature_sorts_parameters_and_appends_secret() {
    let signature = CloudinaryClient::sign(
        &[("timestamp", "1315060510"), ("public_id", "sample_image")],
        "abcd",
    );

    let expected = hex::encode(Sha256::digest(
        b"public_id=sample_image&timestamp=1315060510abcd",
    ));
    assert_eq!(signature, expected);
    assert_eq!(signature.len(), 64);
}

#[tokio::test]
async fn test_upload_returns_secure_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1_1/demo/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "public_id": "avatar",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/v1/avatar.png",
            "url": "http://res.cloudinary.com/demo/image/upload/v1/avatar.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        CloudinaryClient::new(reqwest::Client::new(), &cloudinary_details(&server.uri())).unwrap();

    let url = client.upload_image(upload()).await.unwrap();
    assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/v1/avatar.png");

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"api_key\""));
    assert!(body.contains("name=\"signature\""));
    assert!(body.contains("filename=\"avatar.png\""));
}

#[tokio::test]
async fn test_upload_failure_is_internal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1_1/demo/image/upload"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Invalid Signature" }
        })))
        .mount(&server)
        .await;

    let client =
        CloudinaryClient::new(reqwest::Client::new(), &cloudinary_details(&server.uri())).unwrap();

    let err = client.upload_image(upload()).await.unwrap_err();
    assert!(matches!(err, ApiError::Internal(ref m) if m == "Image upload failed"));
}
