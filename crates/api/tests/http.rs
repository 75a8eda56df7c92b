//! End-to-end HTTP tests against a server on an ephemeral port

use std::sync::Arc;

use api::{create_router, AppState, Config};
use inference_engine::LogisticModel;
use serde_json::{json, Value};

// radius_mean: min 6.98, max 28.11, mean 14.13
// texture_mean: min 10.0, max 30.0, mean 20.0
const DATASET: &str = "\
id,diagnosis,radius_mean,texture_mean,Unnamed: 32
1001,B,6.98,10.0,
1002,M,28.11,30.0,
1003,B,7.30,20.0,
";

const WEIGHTS: [f64; 2] = [1.5, -0.75];
const INTERCEPT: f64 = 0.25;

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn expected_malignant(scaled_radius: f64, scaled_texture: f64) -> f64 {
    sigmoid(INTERCEPT + WEIGHTS[0] * scaled_radius + WEIGHTS[1] * scaled_texture)
}

async fn spawn_server(with_model: bool) -> (String, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();

    let dataset_path = dir.path().join("data.csv");
    std::fs::write(&dataset_path, DATASET).unwrap();

    let model_path = dir.path().join("model.bin");
    if with_model {
        let model = LogisticModel {
            weights: WEIGHTS.to_vec(),
            intercept: INTERCEPT,
        };
        model.save(&model_path).unwrap();
    }

    let config = Config {
        bind_addr: "127.0.0.1:0".to_string(),
        dataset_path: dataset_path.display().to_string(),
        model_path: model_path.display().to_string(),
        allowed_origins: vec!["http://localhost:5173".to_string()],
    };

    let state = Arc::new(AppState::initialize(config).unwrap());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), dir)
}

#[tokio::test]
async fn test_root_liveness() {
    let (base, _dir) = spawn_server(true).await;
    let body: Value = reqwest::get(format!("{base}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Breast Cancer Prediction API is running");
}

#[tokio::test]
async fn test_health_with_model() {
    let (base, _dir) = spawn_server(true).await;
    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["model_loaded"], true);
}

#[tokio::test]
async fn test_health_without_model() {
    let (base, _dir) = spawn_server(false).await;
    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn test_feature_stats() {
    let (base, _dir) = spawn_server(true).await;
    let body: Value = reqwest::get(format!("{base}/feature-stats"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let radius = &body["radius_mean"];
    assert_eq!(radius["min"], 6.98);
    assert_eq!(radius["max"], 28.11);
    let mean = radius["mean"].as_f64().unwrap();
    assert!((mean - (6.98 + 28.11 + 7.30) / 3.0).abs() < 1e-9);
    assert!(body.get("diagnosis").is_none());
}

#[tokio::test]
async fn test_predict_with_defaults() {
    let (base, _dir) = spawn_server(true).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/predict"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();

    // Omitted fields are scored at their scaled training mean.
    let mean_radius = (6.98 + 28.11 + 7.30) / 3.0;
    let scaled_radius = (mean_radius - 6.98) / (28.11 - 6.98);
    let scaled_texture = (20.0 - 10.0) / (30.0 - 10.0);
    let p_malignant = expected_malignant(scaled_radius, scaled_texture);

    let benign = body["benign_probability"].as_f64().unwrap();
    let malignant = body["malignant_probability"].as_f64().unwrap();
    assert!((malignant - p_malignant).abs() < 1e-9);
    assert!((benign + malignant - 1.0).abs() < 1e-9);

    let expected_label = if benign > malignant { "Benign" } else { "Malicious" };
    assert_eq!(body["result"], expected_label);
}

#[tokio::test]
async fn test_predict_key_order_does_not_matter() {
    let (base, _dir) = spawn_server(true).await;
    let client = reqwest::Client::new();

    let in_order: Value = client
        .post(format!("{base}/predict"))
        .json(&json!({ "radius_mean": 10.0, "texture_mean": 25.0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let reversed: Value = client
        .post(format!("{base}/predict"))
        .json(&json!({ "texture_mean": 25.0, "radius_mean": 10.0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(in_order, reversed);

    let scaled_radius = (10.0 - 6.98) / (28.11 - 6.98);
    let scaled_texture = (25.0 - 10.0) / (30.0 - 10.0);
    let p_malignant = expected_malignant(scaled_radius, scaled_texture);
    let malignant = in_order["malignant_probability"].as_f64().unwrap();
    assert!((malignant - p_malignant).abs() < 1e-9);
}

#[tokio::test]
async fn test_predict_rejects_out_of_range() {
    let (base, _dir) = spawn_server(true).await;
    let client = reqwest::Client::new();

    // min - 1 sits exactly on the exclusive lower bound
    let response = client
        .post(format!("{base}/predict"))
        .json(&json!({ "radius_mean": 5.98 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("radius_mean"));
}

#[tokio::test]
async fn test_predict_rejects_non_numeric() {
    let (base, _dir) = spawn_server(true).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/predict"))
        .json(&json!({ "radius_mean": "big" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn test_predict_without_model_fails_gracefully() {
    let (base, _dir) = spawn_server(false).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/predict"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Model is not loaded");
}
