use common::history::balance_history_path;
use common::{Account, BalanceHistoryPoint, Result};
use crate::api_client;

/// Get all accounts
pub async fn get_accounts() -> Result<Vec<Account>> {
    log::trace!("Fetching all accounts");
    let result = api_client::get::<Vec<Account>>("/accounts/").await;
    match &result {
        Ok(accounts) => log::info!("Fetched {} accounts", accounts.len()),
        Err(e) => log::error!("Failed to fetch accounts: {}", e),
    }
    result
}

/// Get the trailing balance history of one account
pub async fn get_balance_history(account_id: i32, days: u32) -> Result<Vec<BalanceHistoryPoint>> {
    log::trace!("Fetching {} days of balance history for account ID: {}", days, account_id);
    let result = api_client::get::<Vec<BalanceHistoryPoint>>(&balance_history_path(account_id, days)).await;
    match &result {
        Ok(points) => log::info!("Fetched {} history points for account ID: {}", points.len(), account_id),
        Err(e) => log::error!("Failed to fetch balance history for account {}: {}", account_id, e),
    }
    result
}
