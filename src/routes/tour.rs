use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::models::tour::TourDraft;
use crate::models::validation::ValidationWarning;
use crate::services::pricing_service::{PricingConfig, PricingResult, PricingService};
use crate::services::validation_service::{ValidationService, ValidationSummary};

/*
    /tours/price
*/
pub async fn price_tour(
    config: web::Data<PricingConfig>,
    input: web::Json<TourDraft>,
) -> impl Responder {
    let config = config.into_inner();
    let draft = input.into_inner();

    HttpResponse::Ok().json(PricingService::price_tour(&draft, &config))
}

#[derive(Debug, Deserialize)]
pub struct TourReviewRequest {
    pub tour: TourDraft,
    #[serde(default)]
    pub warnings: Vec<ValidationWarning>,
}

#[derive(Debug, Serialize)]
pub struct TourReviewResponse {
    pub pricing: PricingResult,
    pub validation: ValidationSummary,
    pub can_submit: bool,
}

/*
    /tours/review (price + validation summary for the submit screen)
*/
pub async fn review_tour(
    config: web::Data<PricingConfig>,
    input: web::Json<TourReviewRequest>,
) -> impl Responder {
    let config = config.into_inner();
    let input = input.into_inner();

    println!("Reviewing tour draft '{}'...", input.tour.title);

    let pricing = PricingService::price_tour(&input.tour, &config);
    let validation = ValidationService::summarize(&input.warnings);
    let can_submit = !ValidationService::blocks_submission(&validation);

    HttpResponse::Ok().json(TourReviewResponse {
        pricing,
        validation,
        can_submit,
    })
}

/*
    /pricing/config (active rate card, for dashboard display)
*/
pub async fn get_pricing_config(config: web::Data<PricingConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}
