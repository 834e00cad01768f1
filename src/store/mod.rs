pub mod content;
pub mod portfolio_store;
