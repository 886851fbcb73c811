pub mod details;
pub mod list;
pub mod page;
pub mod state;
pub mod view_model;

pub use page::OrdersDashboard;
