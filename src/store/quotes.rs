//! JSON-file-backed quote store

use crate::domain::model::Quote;
use crate::domain::repository::QuoteRepository;
use crate::domain::service::quote_aggregator;
use crate::error::Result;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Persistent store for workshop quotes
pub struct QuoteStore {
    store_path: PathBuf,
    quotes: HashMap<String, Quote>,
}

impl QuoteStore {
    /// Create or load a quote store under `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("quotes.json");

        let quotes = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, quotes })
    }

    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.quotes)?;
        Ok(())
    }

    /// Total number of stored quotes
    pub fn count(&self) -> usize {
        self.quotes.len()
    }
}

impl QuoteRepository for QuoteStore {
    /// Save a quote, recomputing its totals from the damage record first
    ///
    /// Totals are never trusted from the caller; whatever came in is
    /// replaced by a fresh aggregation so a stored quote can't drift from
    /// its damage record.
    fn save(&mut self, mut quote: Quote) -> Result<Quote> {
        let totals = quote_aggregator::calculate_total(&quote.damage)?;
        quote.total_aw = totals.total_work_units;
        quote.price_euro = totals.total_cost;

        self.quotes.insert(quote.id.clone(), quote.clone());
        self.persist()?;
        Ok(quote)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Quote>> {
        Ok(self.quotes.get(id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Quote>> {
        let mut quotes: Vec<_> = self.quotes.values().cloned().collect();
        quotes.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(quotes)
    }

    fn remove(&mut self, id: &str) -> Result<bool> {
        let removed = self.quotes.remove(id).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }
}
