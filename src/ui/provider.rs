//! State containers scoped to a part of the UI.
//!
//! A [`Provider`] owns the single container for its reducer. Components get
//! at it through a [`Scope`] that is passed to them explicitly; a scope that
//! was never bound to a provider, or whose provider has been dropped, yields
//! [`ContextError::ContextUnavailable`].
//!
//! Scopes and dispatch handles only hold weak references, so dropping the
//! provider destroys the state no matter how many handles are still around.

use std::sync::{Arc, Weak};

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::planner::PlannerReducer;

/// Errors returned when reaching for a container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("use_global_state must be used within a GlobalProvider")]
    ContextUnavailable,
}

pub type GlobalProvider = Provider<PlannerReducer>;
pub type GlobalScope = Scope<PlannerReducer>;
pub type GlobalDispatch = Dispatch<PlannerReducer>;
pub type GlobalContext = StoreContext<PlannerReducer>;

/// Retrieves the planner state and a dispatch handle from `scope`.
///
/// # Errors
/// Returns [`ContextError::ContextUnavailable`] if `scope` is not bound to a
/// live [`GlobalProvider`].
pub fn use_global_state(scope: &GlobalScope) -> Result<GlobalContext, ContextError> {
    scope.use_store()
}

/// Owner of one state container.
pub struct Provider<R: Reducer> {
    store: Arc<watch::Sender<R::State>>,
}

impl<R: Reducer> Provider<R> {
    /// Create a provider whose state starts at `R::State::default()`.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(R::State::default());
        debug!("provider mounted");
        Self {
            store: Arc::new(tx),
        }
    }

    /// Scope handed to everything rendered under this provider.
    ///
    /// A provider mounted further down hands out its own scope, which is what
    /// its descendants receive instead of this one.
    pub fn scope(&self) -> Scope<R> {
        Scope {
            store: Some(Arc::downgrade(&self.store)),
        }
    }

    pub fn dispatcher(&self) -> Dispatch<R> {
        Dispatch {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> R::State {
        self.store.borrow().clone()
    }

    /// Receiver that is marked changed after every dispatch that produced a
    /// new state.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.store.subscribe()
    }
}

impl<R: Reducer> Default for Provider<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Drop for Provider<R> {
    fn drop(&mut self) {
        debug!("provider unmounted");
    }
}

/// Handle to the nearest provider, passed down to components.
pub struct Scope<R: Reducer> {
    store: Option<Weak<watch::Sender<R::State>>>,
}

impl<R: Reducer> Scope<R> {
    /// A scope with no provider above it.
    pub fn detached() -> Self {
        Self { store: None }
    }

    /// True while the scope points at a provider that is still mounted.
    pub fn is_bound(&self) -> bool {
        self.store
            .as_ref()
            .is_some_and(|store| store.strong_count() > 0)
    }

    /// Snapshot of the provider's state together with a dispatch handle.
    ///
    /// # Errors
    /// Returns [`ContextError::ContextUnavailable`] if the scope is detached
    /// or its provider was dropped.
    pub fn use_store(&self) -> Result<StoreContext<R>, ContextError> {
        let weak = self.store.as_ref().ok_or(ContextError::ContextUnavailable)?;
        let store = weak.upgrade().ok_or(ContextError::ContextUnavailable)?;
        let state = store.borrow().clone();
        Ok(StoreContext {
            state,
            dispatch: Dispatch {
                store: Arc::downgrade(&store),
            },
        })
    }
}

impl<R: Reducer> Clone for Scope<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<R: Reducer> Default for Scope<R> {
    fn default() -> Self {
        Self::detached()
    }
}

/// What a component gets back from [`Scope::use_store`].
pub struct StoreContext<R: Reducer> {
    pub state: R::State,
    pub dispatch: Dispatch<R>,
}

/// Sends intents to a provider's reducer.
pub struct Dispatch<R: Reducer> {
    store: Weak<watch::Sender<R::State>>,
}

impl<R: Reducer> Dispatch<R> {
    /// Run `intent` through the reducer and publish the result.
    ///
    /// The reducer runs to completion before this returns, under the
    /// container's write lock, so dispatches never interleave. Subscribers
    /// are only notified when the reducer returned a different snapshot.
    /// Returns whether the state changed; dispatching to a dropped provider
    /// changes nothing.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        let kind = intent.kind();
        let Some(store) = self.store.upgrade() else {
            warn!(kind, "dispatch after provider was dropped, ignoring");
            return false;
        };

        let changed = store.send_if_modified(|state| {
            let previous = std::mem::take(state);
            let next = R::reduce(previous.clone(), intent);
            let changed = !next.is_same(&previous);
            *state = next;
            changed
        });
        debug!(kind, changed, "dispatched");
        changed
    }

    /// Subscribe to the provider, if it is still mounted.
    pub fn subscribe(&self) -> Option<watch::Receiver<R::State>> {
        self.store.upgrade().map(|store| store.subscribe())
    }
}

impl<R: Reducer> Clone for Dispatch<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
