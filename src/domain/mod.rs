pub mod category;
pub mod common;
pub mod filter;
pub mod summary;
pub mod transaction;

pub use category::{default_categories, DEFAULT_CATEGORIES};
pub use common::{parse_date, Displayable, DATE_FORMAT};
pub use filter::TransactionFilter;
pub use summary::Totals;
pub use transaction::{Transaction, TransactionDraft, TransactionType};
