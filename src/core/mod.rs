pub mod accounting;
pub mod filter;
pub mod services;
pub mod utils;

pub use accounting::Accounting;
pub use services::{
    CategoryRepository, Statement, StatementService, TransactionRepository,
};
