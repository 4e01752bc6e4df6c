use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::{AppError, Result};
use crate::modules::reports::services::ReportService;

/// Query parameters for the commission report endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionReportQuery {
    pub product_id: String,
    /// Start of the period (inclusive, format: YYYY-MM-DD)
    pub start_date: String,
    /// End of the period (inclusive, format: YYYY-MM-DD)
    pub end_date: String,
}

/// GET /api/v1/report/average-balance/{clientId}
pub async fn get_average_balance(
    service: web::Data<ReportService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let client_id = path.into_inner();
    let average = service.average_daily_balance(&client_id).await?;
    Ok(HttpResponse::Ok().json(average))
}

/// GET /api/v1/report/average-balance/{clientId}/by-product
pub async fn get_average_balance_by_product(
    service: web::Data<ReportService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let client_id = path.into_inner();
    let averages = service.average_balance_by_product(&client_id).await?;
    Ok(HttpResponse::Ok().json(averages))
}

/// GET /api/v1/report/commission-report?productId=…&startDate=…&endDate=…
pub async fn get_commission_report(
    service: web::Data<ReportService>,
    query: web::Query<CommissionReportQuery>,
) -> Result<HttpResponse> {
    let start_date = parse_date(&query.start_date, "startDate")?;
    let end_date = parse_date(&query.end_date, "endDate")?;

    if start_date > end_date {
        return Err(AppError::validation(format!(
            "startDate ({start_date}) must be before or equal to endDate ({end_date})"
        )));
    }

    let report = service
        .commission_report(&query.product_id, start_date, end_date)
        .await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /api/v1/report/consolidated/{clientId}
pub async fn get_consolidated_report(
    service: web::Data<ReportService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let client_id = path.into_inner();
    let report = service.consolidated_report(&client_id).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /api/v1/report/card/{cardId}/movements
pub async fn get_card_movements(
    service: web::Data<ReportService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let card_id = path.into_inner();
    let movements = service.last_card_movements(&card_id).await?;
    Ok(HttpResponse::Ok().json(movements))
}

fn parse_date(raw: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!("Invalid {field} '{raw}'. Expected YYYY-MM-DD"))
    })
}

/// Configure routes for the reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/report")
            .route("/average-balance/{client_id}", web::get().to(get_average_balance))
            .route(
                "/average-balance/{client_id}/by-product",
                web::get().to(get_average_balance_by_product),
            )
            .route("/commission-report", web::get().to(get_commission_report))
            .route("/consolidated/{client_id}", web::get().to(get_consolidated_report))
            .route("/card/{card_id}/movements", web::get().to(get_card_movements)),
    );
}
