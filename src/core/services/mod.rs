pub mod category_service;
pub mod statement_service;
pub mod transaction_service;

pub use category_service::CategoryRepository;
pub use statement_service::{Statement, StatementService};
pub use transaction_service::TransactionRepository;
