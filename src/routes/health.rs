use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check() -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Pricing runs in-process, so the only thing to report is where the
    // active rate card came from
    health
        .services
        .insert("pricing".to_string(), check_pricing_config());

    HttpResponse::Ok().json(health)
}

fn check_pricing_config() -> ServiceStatus {
    let overridden =
        env::var("PRICE_PER_MINUTE").is_ok() || env::var("MINIMUM_PRICE").is_ok();

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(
            if overridden {
                "rate card from environment"
            } else {
                "default rate card"
            }
            .to_string(),
        ),
    }
}
