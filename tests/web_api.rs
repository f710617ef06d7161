use std::net::SocketAddr;

use axum::Router;
use preflop_advisor::decision::Action;
use preflop_advisor::evaluator::Tier;
use preflop_advisor::web::{self, AnalysisRecord};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tokio::time::{Duration, sleep};

async fn spawn_server() -> anyhow::Result<(String, tokio::task::JoinHandle<()>)> {
    let app: Router = web::router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    sleep(Duration::from_millis(25)).await;
    Ok((format!("http://{}", addr), server))
}

#[tokio::test]
async fn web_api_records_and_lists_decisions() -> anyhow::Result<()> {
    let (base_url, server) = spawn_server().await?;
    let client = Client::builder().build()?;

    let health = client.get(format!("{}/healthz", base_url)).send().await?;
    assert_eq!(health.status(), StatusCode::OK);

    let record: AnalysisRecord = client
        .post(format!("{}/api/decisions", base_url))
        .json(&json!({
            "cards": ["KS", "as"],
            "position": "BTN",
            "stack_bb": 100,
            "actions": ["CALL", "RAISE-4", "FOLD"]
        }))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(record.evaluation.tier, Tier::Premium);
    assert_eq!(record.evaluation.win_rate, 82);
    assert_eq!(record.decision.action, Action::Call);
    assert_eq!(record.decision.confidence, 85);
    assert_eq!(record.player_count, 6);
    assert_eq!(record.profile.total_bet, 4);
    assert_eq!(record.cards[0].to_string(), "AS");

    let history: Vec<AnalysisRecord> = client
        .get(format!("{}/api/decisions", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, record.id);

    let fetched: AnalysisRecord = client
        .get(format!("{}/api/decisions/{}", base_url, record.id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched.decision, record.decision);

    server.abort();
    let _ = server.await;
    Ok(())
}

#[tokio::test]
async fn web_api_rejects_bad_input_and_unknown_ids() -> anyhow::Result<()> {
    let (base_url, server) = spawn_server().await?;
    let client = Client::builder().build()?;

    let response = client
        .post(format!("{}/api/decisions", base_url))
        .json(&json!({
            "cards": ["AH", "KX"],
            "position": "CO",
            "stack_bb": 40
        }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert!(body["error"].as_str().unwrap_or_default().contains("Invalid suit"));

    let missing = client
        .get(format!(
            "{}/api/decisions/00000000-0000-0000-0000-000000000000",
            base_url
        ))
        .send()
        .await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    server.abort();
    let _ = server.await;
    Ok(())
}

#[tokio::test]
async fn web_api_describes_positions() -> anyhow::Result<()> {
    let (base_url, server) = spawn_server().await?;
    let client = Client::builder().build()?;

    let info: Value = client
        .get(format!("{}/api/positions/CO", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(info["position"], "CO");
    assert_eq!(info["multiplier"], 0.95);
    assert_eq!(info["category"], "Late Position");
    assert_eq!(info["stats"]["vpip_range"], "22-27%");

    let unknown = client
        .get(format!("{}/api/positions/DEALER", base_url))
        .send()
        .await?;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    server.abort();
    let _ = server.await;
    Ok(())
}
