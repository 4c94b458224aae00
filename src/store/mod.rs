//! Persistence for workshop quotes

pub mod quotes;

pub use quotes::QuoteStore;
