//! The preferences store: one owned snapshot plus the operations that
//! replace it.
//!
//! Every effective mutation builds a fresh [`MealPreferences`] from a copy of
//! the current one and swaps the shared handle. Published snapshots are never
//! touched again, so readers holding an older `Arc` keep a consistent view and
//! can detect change with [`Arc::ptr_eq`] or [`PreferencesStore::revision`].
//!
//! Update and remove calls with an unknown identifier leave the snapshot (and
//! the revision) exactly as they were.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalogue::{AllergySeverity, DislikeSeverity, MealCategory};
use crate::error::PreferencesError;
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::model::{DislikedFood, FoodAllergy, FoodId, FoodItem, MealPreferences};
use crate::settings::PreferencesSettings;

type Listener = Box<dyn FnMut(&Arc<MealPreferences>)>;

/// Handle returned by [`PreferencesStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single source of truth for one care recipient's meal preferences.
///
/// # Examples
///
/// ```
/// use meal_preferences::{AllergySeverity, MealCategory, PreferencesStore};
///
/// let mut store = PreferencesStore::new();
/// store.add_favorite_food("  Porridge ", Some(MealCategory::Breakfast));
/// let id = store.add_allergy("Peanuts", AllergySeverity::SevereAllergy, true);
/// store.update_allergy(&id, "Tree Nuts", AllergySeverity::ModerateIntolerance);
///
/// let snapshot = store.snapshot();
/// assert_eq!(snapshot.favorite_food[0].name, "Porridge");
/// assert_eq!(snapshot.allergies[0].name, "Tree Nuts");
/// assert!(snapshot.allergies[0].is_common());
/// ```
pub struct PreferencesStore {
    snapshot: Arc<MealPreferences>,
    revision: u64,
    ids: Arc<dyn IdGenerator>,
    settings: PreferencesSettings,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for PreferencesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PreferencesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferencesStore")
            .field("snapshot", &self.snapshot)
            .field("revision", &self.revision)
            .field("settings", &self.settings)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl PreferencesStore {
    /// Creates an empty store with UUID identifiers and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Arc::new(UuidIdGenerator), PreferencesSettings::default())
    }

    /// Creates an empty store with an injected identifier source and settings.
    #[must_use]
    pub fn with_parts(ids: Arc<dyn IdGenerator>, settings: PreferencesSettings) -> Self {
        Self {
            snapshot: Arc::new(MealPreferences::default()),
            revision: 0,
            ids,
            settings,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns a shared handle to the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<MealPreferences> {
        Arc::clone(&self.snapshot)
    }

    /// Borrows the current snapshot.
    #[must_use]
    pub fn preferences(&self) -> &MealPreferences {
        &self.snapshot
    }

    /// Number of effective mutations since the store was created.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the settings the store was built with.
    #[must_use]
    pub const fn settings(&self) -> &PreferencesSettings {
        &self.settings
    }

    /// Registers a listener called with each new snapshot.
    ///
    /// Listeners run synchronously, in registration order, after the snapshot
    /// has been replaced.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Arc<MealPreferences>) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Appends a favourite food and returns its identifier.
    pub fn add_favorite_food(&mut self, name: &str, category: Option<MealCategory>) -> FoodId {
        let id = self.ids.next_id();
        let food = FoodItem {
            id: id.clone(),
            name: name.trim().to_owned(),
            category,
        };
        self.apply("add_favorite_food", "favorite_food", &id, |prefs| {
            prefs.favorite_food.push(food);
            true
        });
        id
    }

    /// Replaces the name and category of the favourite food with `id`.
    pub fn update_favorite_food(
        &mut self,
        id: &FoodId,
        name: &str,
        category: Option<MealCategory>,
    ) {
        let trimmed = name.trim().to_owned();
        self.apply("update_favorite_food", "favorite_food", id, |prefs| {
            prefs
                .favorite_food
                .iter_mut()
                .find(|food| food.id == *id)
                .map(|food| {
                    food.name = trimmed;
                    food.category = category;
                })
                .is_some()
        });
    }

    /// Removes the favourite food with `id`.
    pub fn remove_favorite_food(&mut self, id: &FoodId) {
        self.apply("remove_favorite_food", "favorite_food", id, |prefs| {
            retain_changed(&mut prefs.favorite_food, |food| food.id != *id)
        });
    }

    /// Appends a disliked food and returns its identifier.
    pub fn add_disliked_food(
        &mut self,
        name: &str,
        severity: DislikeSeverity,
        category: Option<MealCategory>,
    ) -> FoodId {
        let id = self.ids.next_id();
        let disliked = DislikedFood {
            food: FoodItem {
                id: id.clone(),
                name: name.trim().to_owned(),
                category,
            },
            severity,
        };
        self.apply("add_disliked_food", "disliked_food", &id, |prefs| {
            prefs.disliked_food.push(disliked);
            true
        });
        id
    }

    /// Replaces the name, severity and category of the disliked food with
    /// `id`.
    pub fn update_disliked_food(
        &mut self,
        id: &FoodId,
        name: &str,
        severity: DislikeSeverity,
        category: Option<MealCategory>,
    ) {
        let trimmed = name.trim().to_owned();
        self.apply("update_disliked_food", "disliked_food", id, |prefs| {
            prefs
                .disliked_food
                .iter_mut()
                .find(|disliked| disliked.food.id == *id)
                .map(|disliked| {
                    disliked.food.name = trimmed;
                    disliked.food.category = category;
                    disliked.severity = severity;
                })
                .is_some()
        });
    }

    /// Removes the disliked food with `id`.
    pub fn remove_disliked_food(&mut self, id: &FoodId) {
        self.apply("remove_disliked_food", "disliked_food", id, |prefs| {
            retain_changed(&mut prefs.disliked_food, |disliked| disliked.food.id != *id)
        });
    }

    /// Appends an allergy and returns its identifier.
    ///
    /// `is_common` is stored as given; callers that do not track the common
    /// allergen list pass `false`.
    pub fn add_allergy(
        &mut self,
        name: &str,
        severity: AllergySeverity,
        is_common: bool,
    ) -> FoodId {
        let id = self.ids.next_id();
        let allergy = FoodAllergy {
            id: id.clone(),
            name: name.trim().to_owned(),
            severity,
            is_common: Some(is_common),
        };
        self.apply("add_allergy", "allergies", &id, |prefs| {
            prefs.allergies.push(allergy);
            true
        });
        id
    }

    /// Replaces the name and severity of the allergy with `id`.
    ///
    /// The common-allergen flag is left as it was.
    pub fn update_allergy(&mut self, id: &FoodId, name: &str, severity: AllergySeverity) {
        let trimmed = name.trim().to_owned();
        self.apply("update_allergy", "allergies", id, |prefs| {
            prefs
                .allergies
                .iter_mut()
                .find(|allergy| allergy.id == *id)
                .map(|allergy| {
                    allergy.name = trimmed;
                    allergy.severity = severity;
                })
                .is_some()
        });
    }

    /// Removes the allergy with `id`.
    pub fn remove_allergy(&mut self, id: &FoodId) {
        self.apply("remove_allergy", "allergies", id, |prefs| {
            retain_changed(&mut prefs.allergies, |allergy| allergy.id != *id)
        });
    }

    /// Replaces the special instructions verbatim.
    ///
    /// No length check happens here; see
    /// [`PreferencesStore::set_special_instructions_checked`].
    pub fn update_special_instructions(&mut self, text: &str) {
        let mut next = MealPreferences::clone(&self.snapshot);
        text.clone_into(&mut next.special_instructions);
        self.publish(next, "update_special_instructions");
    }

    /// Replaces the special instructions if they fit the configured limit.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::InstructionsTooLong`] and leaves the
    /// snapshot untouched when `text` is longer than
    /// [`PreferencesSettings::instructions_max_length`].
    pub fn set_special_instructions_checked(
        &mut self,
        text: &str,
    ) -> Result<(), PreferencesError> {
        let max = self.settings.instructions_max_length;
        if !self.settings.instructions_fit(text) {
            let length = text.chars().count();
            warn!(
                length,
                max,
                "special instructions rejected: over length limit"
            );
            return Err(PreferencesError::InstructionsTooLong { length, max });
        }
        self.update_special_instructions(text);
        Ok(())
    }

    /// Replaces everything with the blank aggregate.
    ///
    /// Irreversible. Callers confirm with the user first.
    pub fn reset_preferences(&mut self) {
        self.publish(MealPreferences::default(), "reset_preferences");
    }

    fn apply<F>(
        &mut self,
        operation: &'static str,
        collection: &'static str,
        id: &FoodId,
        mutate: F,
    ) where
        F: FnOnce(&mut MealPreferences) -> bool,
    {
        let mut next = MealPreferences::clone(&self.snapshot);
        if mutate(&mut next) {
            debug!(operation, collection, id = %id, "preferences record changed");
            self.publish(next, operation);
        } else {
            debug!(operation, collection, id = %id, "no record with id; snapshot unchanged");
        }
    }

    fn publish(&mut self, next: MealPreferences, operation: &'static str) {
        self.snapshot = Arc::new(next);
        self.revision += 1;
        debug!(
            operation,
            revision = self.revision,
            "preferences snapshot replaced"
        );
        for (_, listener) in &mut self.listeners {
            listener(&self.snapshot);
        }
    }
}

/// Retains matching items and reports whether anything was removed.
fn retain_changed<T>(items: &mut Vec<T>, keep: impl FnMut(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(keep);
    items.len() != before
}

#[cfg(test)]
mod tests;
