pub mod manager;
pub mod models;
pub mod repository;
pub mod transaction;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::category::Category;
pub use repository::CategoryRepository;
pub use transaction::in_transaction;
