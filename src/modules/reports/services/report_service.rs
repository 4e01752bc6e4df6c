use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use futures_util::future::try_join_all;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::reports::models::{CommissionReport, ConsolidatedReport};
use crate::modules::reports::services::aggregation;
use crate::modules::upstream::models::MovementRecord;
use crate::modules::upstream::services::{
    ClientFetcher, DebitCardFetcher, MovementFetcher, ProductFetcher,
};

/// How many card movements the card report returns
pub const CARD_MOVEMENT_LIMIT: usize = 10;

/// Assembles the derived reports by fanning out to the upstream services and
/// reducing their responses.
///
/// Any adapter failure is terminal for the report being computed; the
/// assembler performs no retries or fallback values.
pub struct ReportService {
    clients: Arc<dyn ClientFetcher>,
    products: Arc<dyn ProductFetcher>,
    movements: Arc<dyn MovementFetcher>,
    debit_cards: Arc<dyn DebitCardFetcher>,
}

impl ReportService {
    /// Create a new report service over the four upstream adapters
    pub fn new(
        clients: Arc<dyn ClientFetcher>,
        products: Arc<dyn ProductFetcher>,
        movements: Arc<dyn MovementFetcher>,
        debit_cards: Arc<dyn DebitCardFetcher>,
    ) -> Self {
        Self {
            clients,
            products,
            movements,
            debit_cards,
        }
    }

    /// Mean of all current-month movement amounts across the client's
    /// products.
    ///
    /// A client with no qualifying movements averages to 0.0 rather than
    /// failing; the empty month is logged.
    pub async fn average_daily_balance(&self, client_id: &str) -> Result<f64> {
        info!("Computing average daily balance for client {client_id}");

        let month_start = current_month_start();
        let products = self.products.products_by_client(client_id).await?;

        let mut amounts = Vec::new();
        for product in &products {
            let movements = self.movements.movements_by_client(client_id).await?;
            amounts.extend(
                aggregation::filter_by_product(movements, &product.id)
                    .into_iter()
                    .filter(|m| m.date > month_start)
                    .filter_map(|m| m.amount),
            );
        }

        Ok(aggregation::average(&amounts).unwrap_or_else(|| {
            warn!("No movements this month for client {client_id}, average defaults to 0.0");
            0.0
        }))
    }

    /// Current-month average of movement amounts, one entry per product the
    /// client owns. Products without qualifying movements average to 0.0.
    pub async fn average_balance_by_product(&self, client_id: &str) -> Result<HashMap<String, f64>> {
        info!("Computing per-product average balances for client {client_id}");

        let month_start = current_month_start();
        let products = self.products.products_by_client(client_id).await?;

        let mut averages = HashMap::with_capacity(products.len());
        for product in &products {
            let movements = self.movements.movements_by_client(client_id).await?;
            let amounts: Vec<f64> = aggregation::filter_by_product(movements, &product.id)
                .into_iter()
                .filter(|m| m.date > month_start)
                .filter_map(|m| m.amount)
                .collect();

            averages.insert(
                product.id.clone(),
                aggregation::average(&amounts).unwrap_or(0.0),
            );
        }

        Ok(averages)
    }

    /// Total commission charged on a product over `[start_date, end_date]`
    /// at day granularity.
    ///
    /// An empty filtered set is a `NotFound` failure, not a zero total —
    /// deliberately different from the average-balance policy.
    pub async fn commission_report(
        &self,
        product_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<CommissionReport> {
        info!("Computing commission report for product {product_id} between {start_date} and {end_date}");

        let window_start = start_date.and_time(NaiveTime::MIN);
        // end_date + 1 day at 00:00 keeps the whole end date inside the window
        let window_end = end_date
            .succ_opt()
            .ok_or_else(|| AppError::validation("end date out of range"))?
            .and_time(NaiveTime::MIN);

        let movements = self.movements.movements_by_product(product_id).await?;
        let in_window = aggregation::filter_by_window(
            aggregation::filter_by_product(movements, product_id),
            window_start,
            window_end,
        );

        let commissions: Vec<f64> = in_window
            .iter()
            .filter(|m| aggregation::has_positive_commission(m))
            .filter_map(|m| m.commission)
            .collect();

        if commissions.is_empty() {
            return Err(AppError::not_found(format!(
                "no commissions for product {product_id} in period"
            )));
        }

        Ok(CommissionReport::new(
            product_id,
            aggregation::sum(commissions),
        ))
    }

    /// Three-way concurrent fan-out with a fail-fast AND-join: the report
    /// exists only when the client, product and movement fetches all succeed.
    pub async fn consolidated_report(&self, client_id: &str) -> Result<ConsolidatedReport> {
        info!("Assembling consolidated report for client {client_id}");

        let (client, products, movements) = tokio::try_join!(
            self.clients.client_by_id(client_id),
            self.products.products_by_client(client_id),
            self.movements.movements_by_client(client_id),
        )?;

        Ok(ConsolidatedReport {
            client,
            products,
            movements,
        })
    }

    /// Last movements across every account linked to a card, newest first.
    ///
    /// Two-phase: the card lookup gates an N-way fan-out over its linked
    /// accounts; the merged result is sorted and truncated to
    /// [`CARD_MOVEMENT_LIMIT`]. A card with no linked accounts yields an
    /// empty result. Any single account fetch failing fails the report.
    pub async fn last_card_movements(&self, card_id: &str) -> Result<Vec<MovementRecord>> {
        info!("Fetching last {CARD_MOVEMENT_LIMIT} movements for card {card_id}");

        let card = self.debit_cards.card_by_id(card_id).await?;

        let per_account = try_join_all(
            card.all_account_ids()
                .map(|account_id| self.movements.movements_by_product(account_id)),
        )
        .await?;

        let merged: Vec<MovementRecord> = per_account.into_iter().flatten().collect();
        Ok(aggregation::top_k_by_time_desc(merged, CARD_MOVEMENT_LIMIT))
    }
}

/// First instant of the current calendar month
fn current_month_start() -> NaiveDateTime {
    let today = Utc::now().date_naive();
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
        .expect("first day of the current month is always valid")
        .and_time(NaiveTime::MIN)
}
