pub mod list;

pub use list::SupplierList;
