use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use tourvoice_api::routes;
use tourvoice_api::services::pricing_service::PricingConfig;

pub struct TestApp {
    pub pricing_config: PricingConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            pricing_config: PricingConfig::default(),
        }
    }

    pub fn with_config(pricing_config: PricingConfig) -> Self {
        Self { pricing_config }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.pricing_config.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
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
    }
}
