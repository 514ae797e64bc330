//! Synthetic input lines for the benchmark

use super::batch::ItemPool;
use crate::error::BenchmarkError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

/// Quantity range of the warm-up and plain random inputs
pub const DEFAULT_QUANTITIES: RangeInclusive<u32> = 1..=1000;

/// Builds `name qty, name qty, ...` lines from item pools
pub struct InputGenerator<R> {
    catalog: Vec<String>,
    rng: R,
}

impl<R: Rng> InputGenerator<R> {
    /// `catalog` backs [`ItemPool::Catalog`]
    pub fn new(catalog: Vec<String>, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Line of `count` random catalog items with quantities in [`DEFAULT_QUANTITIES`]
    pub fn random_input(&mut self, count: usize) -> Result<String, BenchmarkError> {
        self.generate(&ItemPool::Catalog, count, &DEFAULT_QUANTITIES)
    }

    /// Line of exactly `count` clauses drawn from `pool`
    pub fn generate(
        &mut self,
        pool: &ItemPool,
        count: usize,
        quantities: &RangeInclusive<u32>,
    ) -> Result<String, BenchmarkError> {
        if quantities.is_empty() {
            return Err(BenchmarkError::InvalidDescriptor(format!(
                "empty quantity range {:?}",
                quantities
            )));
        }

        let mut input = String::with_capacity(count * 16);
        for position in 0..count {
            if position > 0 {
                input.push_str(", ");
            }
            self.push_item(pool, position, &mut input)?;
            input.push(' ');
            let quantity = self.rng.gen_range(quantities.clone());
            input.push_str(&quantity.to_string());
        }

        Ok(input)
    }

    fn push_item(&mut self, pool: &ItemPool, position: usize, out: &mut String) -> Result<(), BenchmarkError> {
        let item = match pool {
            ItemPool::Catalog => self.catalog.choose(&mut self.rng).map(String::as_str),
            ItemPool::Subset(items) => items.choose(&mut self.rng).copied(),
            ItemPool::Tiered(tiers) => pool_tier(tiers, position)
                .and_then(|items| items.choose(&mut self.rng))
                .copied(),
        };

        let item = item.ok_or_else(|| BenchmarkError::EmptyPool(pool.describe()))?;
        out.push_str(item);
        Ok(())
    }
}

/// Tier used at `position`: tiers cover consecutive spans, the last one extends past its span
fn pool_tier<'a>(tiers: &'a [(&'static [&'static str], usize)], position: usize) -> Option<&'a [&'static str]> {
    let mut end = 0;
    for (items, span) in tiers {
        end += span;
        if position < end {
            return Some(*items);
        }
    }
    tiers.last().map(|(items, _)| *items)
}
