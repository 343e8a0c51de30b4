//! Identifier generation for newly added records.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::model::FoodId;

/// Source of unique record identifiers.
///
/// The store trusts the generator not to repeat itself and performs no
/// collision checks of its own.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> FoodId;
}

/// Random UUID v4 identifiers. The production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> FoodId {
        FoodId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic identifiers of the form `<prefix>-<n>`, counting from 1.
///
/// # Examples
///
/// ```
/// use meal_preferences::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new("food");
/// assert_eq!(ids.next_id().as_str(), "food-1");
/// assert_eq!(ids.next_id().as_str(), "food-2");
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator using `prefix` for every identifier.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> FoodId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        FoodId::new(format!("{}-{n}", self.prefix))
    }
}
