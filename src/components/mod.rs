//! UI Components
//!
//! Leptos components for the GearCrate page.

mod confirm_button;
mod search_panel;
mod search_result_row;
mod online_preview;
mod inventory_toolbar;
mod category_bar;
mod inventory_grid;
mod inventory_tile;
mod item_modal;
mod stats_panel;
mod maintenance_panel;
mod notification;

pub use confirm_button::ConfirmButton;
pub use search_panel::SearchPanel;
pub use search_result_row::SearchResultRow;
pub use online_preview::OnlinePreview;
pub use inventory_toolbar::InventoryToolbar;
pub use category_bar::CategoryBar;
pub use inventory_grid::InventoryGrid;
pub use inventory_tile::InventoryTile;
pub use item_modal::ItemModal;
pub use stats_panel::StatsPanel;
pub use maintenance_panel::MaintenancePanel;
pub use notification::Notification;
