//! Maintenance Commands
//!
//! Bulk operations on the inventory, the item database and the image cache.

use super::{invoke, Call, OperationName};
use crate::error::{check_status, ApiError};

async fn run(operation: OperationName) -> Result<(), ApiError> {
    let result = invoke(Call::new(operation, vec![])).await?;
    check_status(&result)
}

/// Set every count back to zero
pub async fn clear_inventory() -> Result<(), ApiError> {
    run(OperationName::ClearInventory).await
}

pub async fn delete_all_items() -> Result<(), ApiError> {
    run(OperationName::DeleteAllItems).await
}

pub async fn clear_cache() -> Result<(), ApiError> {
    run(OperationName::ClearCache).await
}
