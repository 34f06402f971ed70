//! Item Commands
//!
//! Frontend bindings for item-related backend operations.

use serde_json::{json, Value};

use super::{invoke, invoke_as, Call, OperationName};
use crate::error::{check_status, ApiError};
use crate::models::{AddItemResponse, Item, OnlineResult};

// ========================
// Argument Structs
// ========================

/// Arguments of `add_item`
#[derive(Debug, Clone, Default)]
pub struct AddItemArgs<'a> {
    pub name: &'a str,
    pub item_type: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub initial_count: u32,
}

// ========================
// Commands
// ========================

pub async fn search_items_local(query: &str) -> Result<Vec<Item>, ApiError> {
    let call = Call::new(OperationName::SearchItemsLocal, vec![json!(query)]);
    let items: Option<Vec<Item>> = invoke_as(call).await?;
    Ok(items.unwrap_or_default())
}

pub async fn search_items_cstone(query: &str) -> Result<Vec<OnlineResult>, ApiError> {
    let call = Call::new(OperationName::SearchItemsCstone, vec![json!(query)]);
    let results: Option<Vec<OnlineResult>> = invoke_as(call).await?;
    Ok(results.unwrap_or_default())
}

/// Returns the stored item when the backend sends it back
pub async fn add_item(args: &AddItemArgs<'_>) -> Result<Option<Item>, ApiError> {
    let call = Call::new(
        OperationName::AddItem,
        vec![
            json!(args.name),
            json!(args.item_type),
            json!(args.image_url),
            json!(args.notes),
            json!(args.initial_count),
        ],
    );
    let response: AddItemResponse = invoke_as(call).await?;
    if response.success {
        Ok(response.item)
    } else {
        Err(ApiError::Rejected(
            response.error.unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }
}

/// `None` when the backend has no item with this name
pub async fn get_item(name: &str) -> Result<Option<Item>, ApiError> {
    invoke_as(Call::new(OperationName::GetItem, vec![json!(name)])).await
}

/// Counts below zero are never sent
pub async fn update_count(name: &str, count: i64) -> Result<(), ApiError> {
    let count = count.max(0);
    let result = invoke(Call::new(OperationName::UpdateCount, vec![json!(name), json!(count)])).await?;
    check_status(&result)
}

pub async fn update_notes(name: &str, notes: &str) -> Result<(), ApiError> {
    let result = invoke(Call::new(OperationName::UpdateNotes, vec![json!(name), json!(notes)])).await?;
    check_status(&result)
}

pub async fn delete_item(name: &str) -> Result<(), ApiError> {
    let result: Value = invoke(Call::new(OperationName::DeleteItem, vec![json!(name)])).await?;
    check_status(&result)
}
