//! Unit tests for the preferences store.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Mutex;

use rstest::{fixture, rstest};

use super::*;
use crate::ids::SequentialIdGenerator;
use crate::validation::validate_max_length;

#[fixture]
fn store() -> PreferencesStore {
    PreferencesStore::with_parts(
        Arc::new(SequentialIdGenerator::new("id")),
        PreferencesSettings::default(),
    )
}

#[rstest]
fn starts_blank_at_revision_zero(store: PreferencesStore) {
    assert_eq!(*store.snapshot(), MealPreferences::default());
    assert_eq!(store.revision(), 0);
}

#[rstest]
fn add_favorite_food_trims_and_appends(mut store: PreferencesStore) {
    let first = store.add_favorite_food("Pizza", Some(MealCategory::Dinner));
    let second = store.add_favorite_food("  Pizza  ", None);

    let foods = &store.preferences().favorite_food;
    assert_eq!(foods.len(), 2);
    assert_ne!(first, second);
    assert_eq!(foods[0].name, "Pizza");
    assert_eq!(foods[0].category, Some(MealCategory::Dinner));
    assert_eq!(foods[1].id, second);
    assert_eq!(foods[1].name, "Pizza");
    assert_eq!(foods[1].category, None);
}

#[rstest]
fn update_favorite_food_keeps_id_and_neighbours(mut store: PreferencesStore) {
    let keep = store.add_favorite_food("Soup", Some(MealCategory::Lunch));
    let edit = store.add_favorite_food("Toast", Some(MealCategory::Breakfast));
    let before = store.snapshot();

    store.update_favorite_food(&edit, " Rye toast ", None);

    let after = store.snapshot();
    assert_eq!(after.favorite_food[0], before.favorite_food[0]);
    assert_eq!(after.favorite_food[1].id, edit);
    assert_eq!(after.favorite_food[1].name, "Rye toast");
    assert_eq!(after.favorite_food[1].category, None);
    assert_eq!(after.favorite_food[0].id, keep);
}

#[rstest]
fn update_with_unknown_id_keeps_snapshot(mut store: PreferencesStore) {
    store.add_favorite_food("Soup", None);
    let before = store.snapshot();
    let revision = store.revision();

    store.update_favorite_food(&FoodId::new("missing"), "Stew", None);
    store.update_disliked_food(
        &FoodId::new("missing"),
        "Stew",
        DislikeSeverity::Mild,
        None,
    );
    store.update_allergy(&FoodId::new("missing"), "Stew", AllergySeverity::MildIntolerance);

    assert!(Arc::ptr_eq(&before, &store.snapshot()));
    assert_eq!(store.revision(), revision);
}

#[rstest]
fn remove_is_idempotent(mut store: PreferencesStore) {
    let id = store.add_disliked_food("Liver", DislikeSeverity::Strong, None);
    store.add_disliked_food("Sprouts", DislikeSeverity::Mild, Some(MealCategory::Dinner));

    store.remove_disliked_food(&id);
    let once = store.snapshot();
    store.remove_disliked_food(&id);

    assert_eq!(once.disliked_food.len(), 1);
    assert_eq!(once.disliked_food[0].name(), "Sprouts");
    assert!(Arc::ptr_eq(&once, &store.snapshot()));
}

#[rstest]
fn update_disliked_food_replaces_all_mutable_fields(mut store: PreferencesStore) {
    let id = store.add_disliked_food("Fish", DislikeSeverity::Mild, Some(MealCategory::Lunch));

    store.update_disliked_food(&id, "Smoked fish", DislikeSeverity::Strong, None);

    let disliked = &store.preferences().disliked_food[0];
    assert_eq!(disliked.id(), &id);
    assert_eq!(disliked.name(), "Smoked fish");
    assert_eq!(disliked.severity, DislikeSeverity::Strong);
    assert_eq!(disliked.category(), None);
}

#[rstest]
#[case::flagged(true, Some(true))]
#[case::unflagged(false, Some(false))]
fn add_allergy_records_common_flag(
    mut store: PreferencesStore,
    #[case] is_common: bool,
    #[case] expected: Option<bool>,
) {
    store.add_allergy(" Eggs ", AllergySeverity::ModerateIntolerance, is_common);

    let allergy = &store.preferences().allergies[0];
    assert_eq!(allergy.name, "Eggs");
    assert_eq!(allergy.is_common, expected);
}

#[rstest]
fn update_allergy_preserves_common_flag(mut store: PreferencesStore) {
    let id = store.add_allergy("Peanuts", AllergySeverity::SevereAllergy, true);

    store.update_allergy(&id, "Tree Nuts", AllergySeverity::ModerateIntolerance);

    let allergy = &store.preferences().allergies[0];
    assert_eq!(allergy.id, id);
    assert_eq!(allergy.name, "Tree Nuts");
    assert_eq!(allergy.severity, AllergySeverity::ModerateIntolerance);
    assert_eq!(allergy.is_common, Some(true));
}

#[rstest]
fn remove_allergy_drops_only_matching_entry(mut store: PreferencesStore) {
    let soy = store.add_allergy("Soy", AllergySeverity::MildIntolerance, true);
    let fish = store.add_allergy("Fish", AllergySeverity::SevereAllergy, true);

    store.remove_allergy(&soy);

    let allergies = &store.preferences().allergies;
    assert_eq!(allergies.len(), 1);
    assert_eq!(allergies[0].id, fish);
}

#[rstest]
fn update_special_instructions_does_not_clamp(mut store: PreferencesStore) {
    let long = "x".repeat(600);

    store.update_special_instructions(&long);

    assert_eq!(store.preferences().special_instructions, long);
    assert!(!validate_max_length(
        &store.preferences().special_instructions,
        500
    ));
}

#[rstest]
fn checked_instructions_reject_over_limit(mut store: PreferencesStore) {
    store.update_special_instructions("Soft food only");
    let before = store.snapshot();

    let result = store.set_special_instructions_checked(&"x".repeat(501));

    assert_eq!(
        result,
        Err(PreferencesError::InstructionsTooLong {
            length: 501,
            max: 500
        })
    );
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[rstest]
fn checked_instructions_follow_configured_limit() {
    let settings = PreferencesSettings {
        instructions_max_length: 10,
        ..PreferencesSettings::default()
    };
    let mut store = PreferencesStore::with_parts(
        Arc::new(SequentialIdGenerator::new("id")),
        settings,
    );

    assert!(store.set_special_instructions_checked("short").is_ok());
    assert!(store.set_special_instructions_checked("much too long").is_err());
    assert_eq!(store.preferences().special_instructions, "short");
}

#[rstest]
fn stored_instructions_report_near_limit_against_store_settings() {
    let settings = PreferencesSettings {
        instructions_max_length: 40,
        near_limit_threshold: 10,
    };
    let mut store = PreferencesStore::with_parts(
        Arc::new(SequentialIdGenerator::new("id")),
        settings,
    );

    store.update_special_instructions(&"x".repeat(29));
    let text = &store.preferences().special_instructions;
    assert_eq!(store.settings().remaining_characters(text), 11);
    assert!(!store.settings().is_near_limit(text));

    store.update_special_instructions(&"x".repeat(30));
    let longer = &store.preferences().special_instructions;
    assert!(store.settings().is_near_limit(longer));
}

#[rstest]
fn reset_restores_blank_aggregate(mut store: PreferencesStore) {
    store.add_favorite_food("Soup", None);
    store.add_disliked_food("Liver", DislikeSeverity::Strong, None);
    store.add_allergy("Fish", AllergySeverity::SevereAllergy, true);
    store.update_special_instructions("Warm meals");

    store.reset_preferences();

    assert_eq!(*store.snapshot(), MealPreferences::default());
}

#[rstest]
fn mutations_never_touch_published_snapshots(mut store: PreferencesStore) {
    let id = store.add_favorite_food("Soup", None);
    let published = store.snapshot();

    store.update_favorite_food(&id, "Stew", None);
    store.add_favorite_food("Bread", None);

    assert_eq!(published.favorite_food.len(), 1);
    assert_eq!(published.favorite_food[0].name, "Soup");
    assert_eq!(store.revision(), 3);
}

#[rstest]
fn listeners_see_each_new_snapshot(mut store: PreferencesStore) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = store.subscribe(move |snapshot| {
        sink.borrow_mut().push(snapshot.favorite_food.len());
    });

    let id = store.add_favorite_food("Soup", None);
    store.remove_favorite_food(&FoodId::new("missing"));
    store.remove_favorite_food(&id);
    assert!(store.unsubscribe(subscription));
    store.add_favorite_food("Bread", None);

    assert_eq!(*seen.borrow(), vec![1, 0]);
    assert!(!store.unsubscribe(subscription));
}

#[test]
fn independent_stores_do_not_share_state() {
    let mut first = PreferencesStore::new();
    let second = PreferencesStore::new();

    first.add_favorite_food("Soup", None);

    assert!(second.preferences().favorite_food.is_empty());
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|buf| buf.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        if let Ok(mut buf) = self.0.lock() {
            buf.extend_from_slice(bytes);
        }
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
#[case::favourites("favorite_food")]
#[case::dislikes("disliked_food")]
#[case::allergies("allergies")]
fn transitions_log_the_collection(mut store: PreferencesStore, #[case] collection: &str) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || match collection {
        "favorite_food" => {
            let id = store.add_favorite_food("Soup", None);
            store.remove_favorite_food(&id);
        }
        "disliked_food" => {
            let id = store.add_disliked_food("Liver", DislikeSeverity::Strong, None);
            store.remove_disliked_food(&id);
        }
        _ => {
            let id = store.add_allergy("Soy", AllergySeverity::MildIntolerance, false);
            store.remove_allergy(&id);
        }
    });

    let output = logs.contents();
    let expected = format!("collection=\"{collection}\"");
    assert_eq!(output.matches(&expected).count(), 2, "{output}");
}
