use common::summary::monthly_summary_path;
use common::{CreateTransactionRequest, MonthlySummary, Result, Transaction, TransactionFilter};
use crate::api_client;

/// Get the transactions matching a filter
pub async fn get_transactions(filter: TransactionFilter) -> Result<Vec<Transaction>> {
    let path = filter.transactions_path()?;
    log::trace!("Fetching transactions: {}", path);
    let result = api_client::get::<Vec<Transaction>>(&path).await;
    match &result {
        Ok(transactions) => log::info!("Fetched {} transactions", transactions.len()),
        Err(e) => log::error!("Failed to fetch transactions: {}", e),
    }
    result
}

/// Create a new transaction
pub async fn create_transaction(request: CreateTransactionRequest) -> Result<Transaction> {
    log::debug!("Creating new transaction: {}", request.description);
    let result = api_client::post::<Transaction, _>("/transactions/", &request).await;
    match &result {
        Ok(transaction) => log::info!(
            "Successfully created transaction: {} (ID: {})",
            transaction.description,
            transaction.id
        ),
        Err(e) => log::error!("Failed to create transaction '{}': {}", request.description, e),
    }
    result
}

/// Get per-month inflow/outflow totals of a year
pub async fn get_monthly_summary(year: i32) -> Result<MonthlySummary> {
    log::trace!("Fetching monthly summary for {}", year);
    let result = api_client::get::<MonthlySummary>(&monthly_summary_path(year)).await;
    if let Err(ref e) = result {
        log::error!("Failed to fetch monthly summary for {}: {}", year, e);
    } else {
        log::info!("Successfully fetched monthly summary for {}", year);
    }
    result
}
