//! Repository trait definitions for quote persistence
//!
//! The pricing engine itself is storage-ignorant; whoever owns quote
//! records implements this seam.

use crate::domain::model::Quote;
use crate::error::Result;

/// Repository for persisted quotes
pub trait QuoteRepository {
    /// Save a new or updated quote
    fn save(&mut self, quote: Quote) -> Result<Quote>;

    /// Find a quote by its id
    fn find_by_id(&self, id: &str) -> Result<Option<Quote>>;

    /// All quotes, most recent first
    fn find_all(&self) -> Result<Vec<Quote>>;

    /// Remove a quote; returns whether it existed
    fn remove(&mut self, id: &str) -> Result<bool>;
}
