//! Inventory Commands
//!
//! Listing, categories and aggregate statistics.

use super::{http, invoke_as, Call, OperationName};
use crate::error::ApiError;
use crate::models::{InventoryQuery, Item, Stats};

/// Items with a positive count, sorted and filtered by the backend.
///
/// Always served over HTTP; the desktop shell runs the same server.
pub async fn get_inventory_items(query: &InventoryQuery) -> Result<Vec<Item>, ApiError> {
    let value = http::get("get_inventory_items", &query.pairs()).await?;
    let items: Option<Vec<Item>> = serde_json::from_value(value)?;
    Ok(items.unwrap_or_default())
}

pub async fn get_categories() -> Result<Vec<String>, ApiError> {
    let categories: Option<Vec<String>> = invoke_as(Call::new(OperationName::GetCategories, vec![])).await?;
    Ok(categories.unwrap_or_default())
}

pub async fn get_stats() -> Result<Stats, ApiError> {
    let stats: Option<Stats> = invoke_as(Call::new(OperationName::GetStats, vec![])).await?;
    Ok(stats.unwrap_or_default())
}
