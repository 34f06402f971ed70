//! Operation Catalogue
//!
//! The fixed set of backend operations, their parameter order, and the
//! snake_case/camelCase spellings accepted for each.

use serde_json::{Map, Value};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationName {
    SearchItemsLocal,
    SearchItemsCstone,
    AddItem,
    GetItem,
    UpdateCount,
    UpdateNotes,
    DeleteItem,
    ClearInventory,
    DeleteAllItems,
    ClearCache,
    GetStats,
    GetCategories,
}

impl OperationName {
    pub const ALL: [OperationName; 12] = [
        OperationName::SearchItemsLocal,
        OperationName::SearchItemsCstone,
        OperationName::AddItem,
        OperationName::GetItem,
        OperationName::UpdateCount,
        OperationName::UpdateNotes,
        OperationName::DeleteItem,
        OperationName::ClearInventory,
        OperationName::DeleteAllItems,
        OperationName::ClearCache,
        OperationName::GetStats,
        OperationName::GetCategories,
    ];

    /// Canonical name, used for the host function and the HTTP path
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationName::SearchItemsLocal => "search_items_local",
            OperationName::SearchItemsCstone => "search_items_cstone",
            OperationName::AddItem => "add_item",
            OperationName::GetItem => "get_item",
            OperationName::UpdateCount => "update_count",
            OperationName::UpdateNotes => "update_notes",
            OperationName::DeleteItem => "delete_item",
            OperationName::ClearInventory => "clear_inventory",
            OperationName::DeleteAllItems => "delete_all_items",
            OperationName::ClearCache => "clear_cache",
            OperationName::GetStats => "get_stats",
            OperationName::GetCategories => "get_categories",
        }
    }

    pub fn camel_case(&self) -> String {
        let mut out = String::new();
        let mut upper = false;
        for c in self.as_str().chars() {
            if c == '_' {
                upper = true;
            } else if upper {
                out.push(c.to_ascii_uppercase());
                upper = false;
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Resolve either spelling to the canonical operation
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == name || op.camel_case() == name)
    }

    /// Declared parameter order
    pub fn params(&self) -> &'static [&'static str] {
        match self {
            OperationName::SearchItemsLocal | OperationName::SearchItemsCstone => &["query"],
            OperationName::AddItem => &["name", "item_type", "image_url", "notes", "initial_count"],
            OperationName::GetItem | OperationName::DeleteItem => &["name"],
            OperationName::UpdateCount => &["name", "count"],
            OperationName::UpdateNotes => &["name", "notes"],
            OperationName::ClearInventory
            | OperationName::DeleteAllItems
            | OperationName::ClearCache
            | OperationName::GetStats
            | OperationName::GetCategories => &[],
        }
    }
}

/// A resolved call: operation plus arguments in declared order
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub operation: OperationName,
    pub args: Vec<Value>,
}

impl Call {
    pub fn new(operation: OperationName, args: Vec<Value>) -> Self {
        debug_assert_eq!(args.len(), operation.params().len());
        Self { operation, args }
    }

    /// Build from a name in either spelling and a map of named arguments.
    /// Missing arguments become `null`, unknown ones are ignored.
    pub fn from_named(name: &str, mut named: Map<String, Value>) -> Result<Self, ApiError> {
        let operation = OperationName::parse(name)
            .ok_or_else(|| ApiError::UnknownOperation(name.to_string()))?;
        let args = operation
            .params()
            .iter()
            .map(|param| named.remove(*param).unwrap_or(Value::Null))
            .collect();
        Ok(Self { operation, args })
    }

    /// JSON body for HTTP mode, keyed by parameter name
    pub fn body(&self) -> Value {
        let map: Map<String, Value> = self
            .operation
            .params()
            .iter()
            .zip(self.args.iter())
            .map(|(param, value)| (param.to_string(), value.clone()))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_spelling() {
        assert_eq!(OperationName::SearchItemsLocal.camel_case(), "searchItemsLocal");
        assert_eq!(OperationName::DeleteAllItems.camel_case(), "deleteAllItems");
        assert_eq!(OperationName::GetStats.camel_case(), "getStats");
    }

    #[test]
    fn test_both_spellings_resolve_to_same_operation() {
        for op in OperationName::ALL {
            assert_eq!(OperationName::parse(op.as_str()), Some(op));
            assert_eq!(OperationName::parse(&op.camel_case()), Some(op));
        }
        assert_eq!(OperationName::parse("get_inventory"), None);
        assert_eq!(OperationName::parse("GetItem"), None);
    }

    #[test]
    fn test_from_named_orders_arguments() {
        let named = json!({
            "initial_count": 1,
            "notes": null,
            "name": "Ether",
            "item_type": "Medical",
        });
        let Value::Object(named) = named else { unreachable!() };

        let call = Call::from_named("addItem", named).unwrap();
        assert_eq!(call.operation, OperationName::AddItem);
        assert_eq!(call.args, vec![json!("Ether"), json!("Medical"), Value::Null, Value::Null, json!(1)]);
    }

    #[test]
    fn test_from_named_rejects_unknown_operation() {
        let err = Call::from_named("drop_tables", Map::new()).unwrap_err();
        assert!(matches!(err, ApiError::UnknownOperation(name) if name == "drop_tables"));
    }

    #[test]
    fn test_body_keys_by_parameter() {
        let call = Call::new(OperationName::UpdateCount, vec![json!("Ether"), json!(4)]);
        assert_eq!(call.body(), json!({ "name": "Ether", "count": 4 }));

        let call = Call::new(OperationName::GetStats, vec![]);
        assert_eq!(call.body(), json!({}));
    }
}
