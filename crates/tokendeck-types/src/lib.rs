pub mod catalog;
pub mod error;
pub mod token;
pub mod view_state;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use token::TokenRecord;
pub use view_state::{SortKey, ViewState};
