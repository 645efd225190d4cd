//! Loading the initial order collection.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::domain::Order;
use crate::store::OrderStore;

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedFile {
    Bare(Vec<Order>),
    Envelope { data: Vec<Order> },
}

/// Parses seed orders from either `[...]` or `{ "data": [...] }`.
pub fn parse_seed(json: &str) -> Result<OrderStore> {
    let orders = match serde_json::from_str::<SeedFile>(json).context("seed is not a list of orders")? {
        SeedFile::Bare(orders) | SeedFile::Envelope { data: orders } => orders,
    };

    let mut seen = HashSet::new();
    for order in &orders {
        if !seen.insert(order.id.as_str()) {
            bail!("duplicate order id in seed: {}", order.id);
        }
        if let Err(e) = order.validate() {
            bail!("invalid order {} in seed: {}", order.id, e);
        }
    }
    Ok(OrderStore::from_orders(orders))
}

pub async fn load_seed(path: &Path) -> Result<OrderStore> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let store = parse_seed(&json).with_context(|| format!("parsing seed file {}", path.display()))?;
    info!(path = %path.display(), orders = store.len(), "Seed loaded");
    Ok(store)
}
