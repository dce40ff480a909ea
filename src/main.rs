use std::env;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tourvoice_api::routes;
use tourvoice_api::services::pricing_service::PricingConfig;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let pricing_config = PricingConfig::from_env();
    println!("Pricing initialized with rate card: {:?}", pricing_config);

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(pricing_config.clone()))
            .route("/", web::get().to(|| async { "Tourvoice API is running" }))
            .route("/health", web::get().to(routes::health::health_check))
            .route(
                "/pricing/config",
                web::get().to(routes::tour::get_pricing_config),
            )
            .service(
                web::scope("/tours")
                    .route("/price", web::post().to(routes::tour::price_tour))
                    .route("/review", web::post().to(routes::tour::review_tour)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
