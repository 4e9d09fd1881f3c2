//! Sends a handful of sample webhooks to a running speaker service, then polls once.
//!
//! Usage:
//!   send-test-webhooks                       # http://localhost:8080/webhook
//!   send-test-webhooks https://your-host/webhook
//!   WEBHOOK_URL=https://... send-test-webhooks

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::env;

use webhook_speaker::models::notification::{PollResponse, QueuedResponse};

const DEFAULT_URL: &str = "http://localhost:8080/webhook";
const POLL_KEY: &str = "test-key";

fn test_cases() -> Vec<(&'static str, Value)> {
    vec![
        (
            "Sale Notification",
            json!({"event_type": "sale", "amount": 4999, "customer_name": "John Doe"}),
        ),
        (
            "New Lead",
            json!({"event_type": "new_lead", "message": "New lead from Facebook Ads!"}),
        ),
        (
            "Stripe Payment",
            json!({
                "type": "payment_intent.succeeded",
                "data": {"object": {"amount": 12500, "customer_name": "Jane Smith"}}
            }),
        ),
        (
            "Custom Alert",
            json!({
                "event_type": "custom",
                "message": "Wake up! The kids just snuck out!",
                "sound": "alarm.mp3"
            }),
        ),
        (
            "Shopify Order",
            json!({
                "topic": "shopify.orders.create",
                "total_price": "149.99",
                "customer": {"first_name": "Bob"}
            }),
        ),
    ]
}

async fn send_webhook(client: &Client, url: &str, payload: &Value) -> Result<(StatusCode, String)> {
    let response = client
        .post(url)
        .json(payload)
        .send()
        .await
        .with_context(|| format!("POST {} failed", url))?;
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

async fn poll_notifications(client: &Client, url: &str) -> Result<PollResponse> {
    let response = client
        .get(url)
        .query(&[("key", POLL_KEY)])
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()?;
    Ok(response.json().await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let url = env::var("WEBHOOK_URL")
        .ok()
        .or_else(|| env::args().nth(1))
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    println!("Webhook Speaker Test Suite");
    println!("{}", "=".repeat(50));
    println!("Target: {}\n", url);

    let client = Client::new();
    let mut passed = 0;
    let mut failed = 0;

    for (name, payload) in test_cases() {
        print!("Testing: {}... ", name);
        match send_webhook(&client, &url, &payload).await {
            Ok((status, body)) => {
                let queued = serde_json::from_str::<QueuedResponse>(&body).ok();
                if status == StatusCode::OK && queued.as_ref().map_or(false, |q| q.success) {
                    println!("PASSED");
                    println!("   Response: {}\n", body);
                    passed += 1;
                } else {
                    println!("FAILED");
                    println!("   Status: {}", status);
                    println!("   Response: {}\n", body);
                    failed += 1;
                }
            }
            Err(e) => {
                println!("ERROR");
                println!("   {:#}\n", e);
                failed += 1;
            }
        }
    }

    println!("\nTesting notification polling...");
    match poll_notifications(&client, &url).await {
        Ok(poll) => {
            println!("Poll returned {} notifications", poll.count);
            if !poll.notifications.is_empty() {
                println!(
                    "   Notifications: {}",
                    serde_json::to_string_pretty(&poll.notifications)?
                );
            }
            passed += 1;
        }
        Err(e) => {
            println!("Poll failed: {:#}", e);
            failed += 1;
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("Results: {} passed, {} failed", passed, failed);
    println!("{}", "=".repeat(50));

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
