//! Shared stub servers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Configuration document with two domains, one of them secret-enabled
pub fn sample_document() -> Value {
    json!({
        "DomainAndBuckets": {
            "shop.example": "shop-bucket",
            "blog.example": "blog-bucket"
        },
        "DomainSettings": {
            "shop.example": {
                "BaseSecretKey": "projects/42/secrets/shop-%s/versions/latest",
                "GlobalKey": "epoch-7",
                "TokenValidityInMins": 30,
                "MessageExpiryInDays": 14,
                "EmailNotificationEnabled": 1,
                "PublishToIndexer": 0,
                "EnableUsrTokenAuthentication": 1
            }
        },
        "ContactFormApi": {
            "ValidDomains": ["shop.example"],
            "DomainAndServicesettings": {
                "shop.example": {
                    "MessageExpiryInDays": 7,
                    "EmailNotificationEnabled": 1,
                    "PublishToIndexer": 1
                }
            }
        },
        "SuperChatApi": { "ValidDomains": ["shop.example", "blog.example"] },
        "UserApi": null
    })
}

/// Secret Manager `versions:access` body for `value`
pub fn access_response(name: &str, value: &[u8], crc32c: i64) -> Value {
    json!({
        "name": name,
        "payload": {
            "data": STANDARD.encode(value),
            "dataCrc32c": crc32c.to_string()
        }
    })
}
