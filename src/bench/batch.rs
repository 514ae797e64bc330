//! Batch descriptors: the shape of every benchmark category

use crate::catalog::{CHEAP_ITEMS, EXPENSIVE_ITEMS, HIGH_VALUE_ITEMS, MEDIUM_ITEMS};
use crate::error::BenchmarkError;
use std::ops::{Range, RangeInclusive};

/// Where item names are drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemPool {
    /// Every item in the price table
    Catalog,
    /// A fixed list of items
    Subset(&'static [&'static str]),
    /// Consecutive spans of positions, each drawing from its own list
    Tiered(Vec<(&'static [&'static str], usize)>),
}

impl ItemPool {
    pub fn describe(&self) -> String {
        match self {
            ItemPool::Catalog => "catalog".to_string(),
            ItemPool::Subset(items) => format!("subset of {} items", items.len()),
            ItemPool::Tiered(tiers) => format!("{} tiers", tiers.len()),
        }
    }
}

/// How many items each sample of a batch gets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchCount {
    /// Each size is run `repeats` times
    Fixed(Vec<usize>),
    /// Each repeat draws a size from the range
    Random(Range<usize>),
}

/// One benchmark category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDescriptor {
    /// Category heading printed before the samples
    pub heading: &'static str,
    /// Sample label prefix
    pub label: &'static str,
    /// Append the item count to sample labels
    pub label_with_size: bool,
    pub count: BatchCount,
    pub repeats: usize,
    pub pool: ItemPool,
    pub quantities: RangeInclusive<u32>,
}

impl BatchDescriptor {
    /// Sample label for the given size and 0-based repeat index
    pub fn sample_label(&self, size: usize, repeat: usize) -> String {
        let mut label = if self.label_with_size {
            format!("{} {} items", self.label, size)
        } else {
            self.label.to_string()
        };
        if self.repeats > 1 {
            label.push_str(&format!(" #{}", repeat + 1));
        }
        label
    }

    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.repeats == 0 {
            return Err(BenchmarkError::InvalidDescriptor(format!("{}: zero repeats", self.label)));
        }
        match &self.count {
            BatchCount::Fixed(sizes) if sizes.is_empty() => {
                return Err(BenchmarkError::InvalidDescriptor(format!("{}: no batch sizes", self.label)));
            }
            BatchCount::Random(range) if range.is_empty() => {
                return Err(BenchmarkError::InvalidDescriptor(format!(
                    "{}: empty size range {:?}",
                    self.label, range
                )));
            }
            _ => {}
        }
        if self.quantities.is_empty() {
            return Err(BenchmarkError::InvalidDescriptor(format!(
                "{}: empty quantity range {:?}",
                self.label, self.quantities
            )));
        }
        let pool_empty = match &self.pool {
            ItemPool::Catalog => false,
            ItemPool::Subset(items) => items.is_empty(),
            ItemPool::Tiered(tiers) => tiers.is_empty() || tiers.iter().any(|(items, _)| items.is_empty()),
        };
        if pool_empty {
            return Err(BenchmarkError::EmptyPool(self.label.to_string()));
        }
        Ok(())
    }
}

/// The standard categories, optionally with the 5000 and 10000 item batches
pub fn standard_batches(include_extreme: bool) -> Vec<BatchDescriptor> {
    let mut batches = vec![
        BatchDescriptor {
            heading: "SINGLE ITEM TESTS",
            label: "Single Item",
            label_with_size: false,
            count: BatchCount::Fixed(vec![1]),
            repeats: 5,
            pool: ItemPool::Catalog,
            quantities: 1..=100,
        },
        BatchDescriptor {
            heading: "SMALL BATCH TESTS (1-10 items)",
            label: "Small Batch",
            label_with_size: true,
            count: BatchCount::Fixed(vec![5, 10]),
            repeats: 3,
            pool: ItemPool::Catalog,
            quantities: 1..=1000,
        },
        BatchDescriptor {
            heading: "MEDIUM BATCH TESTS (50-100 items)",
            label: "Medium Batch",
            label_with_size: true,
            count: BatchCount::Fixed(vec![50, 100]),
            repeats: 3,
            pool: ItemPool::Catalog,
            quantities: 1..=1000,
        },
        BatchDescriptor {
            heading: "LARGE BATCH TESTS (500-1000 items)",
            label: "Large Batch",
            label_with_size: true,
            count: BatchCount::Fixed(vec![500, 1000]),
            repeats: 2,
            pool: ItemPool::Catalog,
            quantities: 1..=1000,
        },
    ];

    if include_extreme {
        batches.push(BatchDescriptor {
            heading: "EXTREME LOAD TESTS (5000+ items)",
            label: "Extreme Load",
            label_with_size: true,
            count: BatchCount::Fixed(vec![5000, 10000]),
            repeats: 1,
            pool: ItemPool::Catalog,
            quantities: 1..=1000,
        });
    }

    batches.extend([
        BatchDescriptor {
            heading: "HIGH-VALUE ITEM TESTS",
            label: "High-Value Items",
            label_with_size: false,
            count: BatchCount::Random(5..20),
            repeats: 3,
            pool: ItemPool::Subset(HIGH_VALUE_ITEMS),
            quantities: 1..=10,
        },
        BatchDescriptor {
            heading: "LARGE QUANTITY TESTS",
            label: "Large Quantities",
            label_with_size: false,
            count: BatchCount::Random(10..30),
            repeats: 3,
            pool: ItemPool::Catalog,
            quantities: 10_000..=99_999,
        },
        BatchDescriptor {
            heading: "MIXED ITEM TYPE TESTS",
            label: "Mixed Item Types",
            label_with_size: false,
            count: BatchCount::Fixed(vec![30]),
            repeats: 3,
            pool: ItemPool::Tiered(vec![(CHEAP_ITEMS, 10), (MEDIUM_ITEMS, 10), (EXPENSIVE_ITEMS, 10)]),
            quantities: 1..=1000,
        },
    ]);

    batches
}
