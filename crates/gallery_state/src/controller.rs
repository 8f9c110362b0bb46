//! Explicit view-state container with change observers.

use crate::{
    store::{QueryParamStore, StoreError},
    view_state::{ViewField, ViewState},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single field transition.
pub struct StateChange {
    /// Field that changed.
    pub field: ViewField,
    /// Value before the change.
    pub previous: String,
    /// Value after the change.
    pub current: String,
}

/// Side effect run after every field change.
pub trait StateObserver {
    /// Reacts to one field transition.
    ///
    /// # Errors
    ///
    /// Returns the persistence failure, if any. The state change itself is never rolled back.
    fn on_change(&self, change: &StateChange) -> Result<(), StoreError>;
}

/// Mirrors field values into address-bar parameters through a [`QueryParamStore`].
pub struct AddressSync<S> {
    store: S,
}

impl<S: QueryParamStore> AddressSync<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Writes one field: empty values remove the parameter, anything else sets it.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn sync_field(&self, field: ViewField, value: &str) -> Result<(), StoreError> {
        self.store.write_param(field.param_name(), value)
    }

    /// Writes every field of `state`, in field order.
    ///
    /// # Errors
    ///
    /// Stops at the first store failure.
    pub fn sync_all(&self, state: &ViewState) -> Result<(), StoreError> {
        ViewField::ALL
            .into_iter()
            .try_for_each(|field| self.sync_field(field, state.get(field)))
    }
}

impl<S: QueryParamStore> StateObserver for AddressSync<S> {
    fn on_change(&self, change: &StateChange) -> Result<(), StoreError> {
        self.sync_field(change.field, &change.current)
    }
}

/// Owns the gallery [`ViewState`] and notifies observers of every change.
pub struct ViewStateController {
    state: ViewState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl ViewStateController {
    /// Creates a controller with no observers.
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// Initializes state from `store`, mirrors it back once, and keeps it synchronized.
    ///
    /// # Errors
    ///
    /// Returns the first store failure during the initial read or write.
    pub fn attach<S: QueryParamStore + 'static>(store: S) -> Result<Self, StoreError> {
        let href = store.current_href()?;
        let mut read_error = None;
        let state = ViewState::from_lookup(|key| {
            crate::location::read_param(&href, key).unwrap_or_else(|err| {
                read_error.get_or_insert(err);
                None
            })
        });
        if let Some(err) = read_error {
            return Err(err);
        }

        let sync = AddressSync::new(store);
        sync.sync_all(&state)?;

        let mut controller = Self::new(state);
        controller.observe(sync);
        Ok(controller)
    }

    /// Registers an observer.
    pub fn observe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current value of `field`.
    pub fn get(&self, field: ViewField) -> &str {
        self.state.get(field)
    }

    /// Sets one field and runs every observer.
    ///
    /// Returns `Ok(None)` when the value is unchanged; observers are not run in that case.
    ///
    /// # Errors
    ///
    /// Returns the first observer failure. The new value is kept and remaining observers still
    /// run.
    pub fn set(
        &mut self,
        field: ViewField,
        value: impl Into<String>,
    ) -> Result<Option<StateChange>, StoreError> {
        let value = value.into();
        let slot = self.state.slot_mut(field);
        if *slot == value {
            return Ok(None);
        }
        let previous = std::mem::replace(slot, value.clone());
        let change = StateChange {
            field,
            previous,
            current: value,
        };

        let mut first_error = None;
        for observer in &self.observers {
            if let Err(err) = observer.on_change(&change) {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(Some(change)),
        }
    }

    /// Applies several field updates in order.
    ///
    /// # Errors
    ///
    /// Returns the first failure after every update has been applied.
    pub fn apply(
        &mut self,
        updates: impl IntoIterator<Item = (ViewField, String)>,
    ) -> Result<Vec<StateChange>, StoreError> {
        let mut changes = Vec::new();
        let mut first_error = None;
        for (field, value) in updates {
            match self.set(field, value) {
                Ok(Some(change)) => changes.push(change),
                Ok(None) => {}
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(changes),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::MemoryQueryStore;

    fn attached(href: &str) -> (ViewStateController, MemoryQueryStore) {
        let store = MemoryQueryStore::new(href);
        let controller = ViewStateController::attach(store.clone()).expect("attach");
        (controller, store)
    }

    #[test]
    fn attach_reads_parameters_and_mirrors_non_empty_values() {
        let (controller, store) = attached("https://icons.test/?size=48&icon=home");

        assert_eq!(controller.get(ViewField::Size), "48");
        assert_eq!(controller.state().selected_icon(), Some("home"));
        assert_eq!(
            store.href(),
            "https://icons.test/?size=48&icon=home&stroke_width=2&stroke_linecap=round&stroke_linejoin=round&color=currentColor"
        );
    }

    #[test]
    fn set_round_trips_through_the_address() {
        let (mut controller, store) = attached("https://icons.test/");

        for field in ViewField::ALL {
            controller.set(field, "7").expect("set");
            assert_eq!(
                store.read_param(field.param_name()).expect("read"),
                Some("7".to_string())
            );

            controller.set(field, "").expect("clear");
            assert_eq!(store.read_param(field.param_name()).expect("read"), None);

            let reloaded = ViewStateController::attach(MemoryQueryStore::new(store.href()))
                .expect("reload");
            assert_eq!(reloaded.get(field), field.default_value());
        }
    }

    #[test]
    fn clearing_selection_removes_only_the_icon_parameter() {
        let (mut controller, store) = attached("https://icons.test/?query=nav&icon=home");
        let before = store.href();

        let change = controller
            .set(ViewField::SelectedIcon, "")
            .expect("clear")
            .expect("changed");

        assert_eq!(change.previous, "home");
        assert_eq!(controller.get(ViewField::Query), "nav");
        assert_eq!(store.href(), before.replace("&icon=home", ""));
    }

    #[test]
    fn syncing_twice_is_idempotent() {
        let (controller, store) = attached("https://icons.test/?color=%23ff0000");
        let sync = AddressSync::new(store.clone());

        sync.sync_all(controller.state()).expect("first");
        let first = store.href();
        let writes = store.replacements().len();
        sync.sync_all(controller.state()).expect("second");

        assert_eq!(store.href(), first);
        assert_eq!(store.replacements().len(), writes);
    }

    #[test]
    fn unchanged_values_do_not_notify() {
        let (mut controller, store) = attached("https://icons.test/");
        let writes = store.replacements().len();

        assert_eq!(controller.set(ViewField::Size, "24").expect("set"), None);
        assert_eq!(store.replacements().len(), writes);
    }

    #[test]
    fn batched_updates_leave_a_consistent_address() {
        let (mut controller, store) = attached("https://icons.test/");

        let changes = controller
            .apply([
                (ViewField::Size, "32".to_string()),
                (ViewField::Color, "teal".to_string()),
                (ViewField::Size, "40".to_string()),
            ])
            .expect("apply");

        assert_eq!(changes.len(), 3);
        for field in ViewField::ALL {
            let expected = Some(controller.get(field).to_string()).filter(|v| !v.is_empty());
            assert_eq!(store.read_param(field.param_name()).expect("read"), expected);
        }
    }

    struct Recorder(Rc<RefCell<Vec<StateChange>>>);

    impl StateObserver for Recorder {
        fn on_change(&self, change: &StateChange) -> Result<(), StoreError> {
            self.0.borrow_mut().push(change.clone());
            Ok(())
        }
    }

    struct Failing;

    impl StateObserver for Failing {
        fn on_change(&self, _change: &StateChange) -> Result<(), StoreError> {
            Err(StoreError::Replace("denied".to_string()))
        }
    }

    #[test]
    fn observer_failures_keep_the_new_value_and_reach_later_observers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut controller = ViewStateController::new(ViewState::default());
        controller.observe(Failing);
        controller.observe(Recorder(seen.clone()));

        let result = controller.set(ViewField::Query, "arrow");

        assert!(matches!(result, Err(StoreError::Replace(_))));
        assert_eq!(controller.get(ViewField::Query), "arrow");
        assert_eq!(
            *seen.borrow(),
            vec![StateChange {
                field: ViewField::Query,
                previous: String::new(),
                current: "arrow".to_string(),
            }]
        );
    }

    #[test]
    fn observers_can_be_invoked_directly() {
        let store = MemoryQueryStore::new("https://icons.test/?size=24");
        let sync = AddressSync::new(store.clone());

        sync.on_change(&StateChange {
            field: ViewField::Size,
            previous: "24".to_string(),
            current: "64".to_string(),
        })
        .expect("sync");

        assert_eq!(store.href(), "https://icons.test/?size=64");
    }
}
