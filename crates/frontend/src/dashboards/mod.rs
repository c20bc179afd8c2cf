pub mod d001_inventory_summary;

pub use d001_inventory_summary::ui::InventoryDashboard;
