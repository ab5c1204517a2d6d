//! The loan store: single owner of [`LoanState`].
//!
//! Shells read state through [`LoanStore::subscribe`] and change it only
//! through [`LoanStore::dispatch`]. Synchronous actions are reduced inline.
//! `SubmitApplication` is intercepted: it is validated, turned into
//! `SubmissionStarted`, and the network call runs on the store's runtime,
//! reporting back through `dispatch` with a success or failure action.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{LoanApi, LoanApplication};
use crate::mvi::{Action, Reducer};
use crate::persistence::LoanParamsStore;

use super::action::LoanAction;
use super::effects::persist_effect;
use super::params::LoanParams;
use super::reducer::LoanReducer;
use super::state::LoanState;

/// Failure message for submissions rejected before reaching the network.
pub const INVALID_PARAMS_MESSAGE: &str = "Invalid loan parameters";

/// Submission lifecycle as seen from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    Idle,
    Submitting,
}

/// Cloneable handle to the shared store.
#[derive(Clone)]
pub struct LoanStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    /// Source of truth. Every reduction happens under this lock.
    state: Mutex<LoanState>,
    publisher: watch::Sender<LoanState>,
    api: Arc<dyn LoanApi>,
    params: Arc<dyn LoanParamsStore>,
    runtime: Handle,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl LoanStore {
    /// Create a store with default state.
    ///
    /// Submissions are spawned on `runtime`; shells without an ambient
    /// Tokio context pass the handle of a runtime they own.
    pub fn new(api: Arc<dyn LoanApi>, params: Arc<dyn LoanParamsStore>, runtime: Handle) -> Self {
        let initial = LoanState::default();
        let (publisher, _) = watch::channel(initial.clone());
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(initial),
                publisher,
                api,
                params,
                runtime,
                in_flight: Mutex::new(None),
            }),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoanState {
        self.inner.state.lock().clone()
    }

    /// Receiver that observes every published state, starting with the current one.
    pub fn subscribe(&self) -> watch::Receiver<LoanState> {
        self.inner.publisher.subscribe()
    }

    pub fn phase(&self) -> StorePhase {
        if self.inner.state.lock().is_loading {
            StorePhase::Submitting
        } else {
            StorePhase::Idle
        }
    }

    /// The sole mutation entry point.
    pub fn dispatch(&self, action: LoanAction) {
        tracing::debug!(action = action.name(), "Dispatch");
        match action {
            LoanAction::SubmitApplication => self.submit(),
            LoanAction::LoadSavedState => {
                let saved = self.load_saved();
                let mut state = self.inner.state.lock();
                self.reduce_locked(&mut state, LoanAction::LoadSavedState, &saved);
            }
            other => {
                let mut state = self.inner.state.lock();
                self.reduce_locked(&mut state, other, &None);
            }
        }
    }

    /// Wait for the in-flight submission, if any, to report back.
    pub async fn wait_idle(&self) {
        let handle = self.inner.in_flight.lock().take();
        let Some(handle) = handle else {
            return;
        };
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Submission task did not complete");
            let mut state = self.inner.state.lock();
            if state.is_loading {
                self.reduce_locked(
                    &mut state,
                    LoanAction::SubmissionFailure("Submission was interrupted".to_string()),
                    &None,
                );
            }
        }
    }

    fn submit(&self) {
        let mut state = self.inner.state.lock();

        if state.is_loading {
            tracing::debug!("Submission already in flight, ignoring submit");
            return;
        }

        if !state.is_valid() {
            tracing::info!(
                amount = state.amount,
                period = state.period_days,
                "Rejected invalid loan parameters"
            );
            self.reduce_locked(
                &mut state,
                LoanAction::SubmissionFailure(INVALID_PARAMS_MESSAGE.to_string()),
                &None,
            );
            return;
        }

        // Snapshot taken before the loading flag flips; later edits do
        // not change what is sent.
        let application = LoanApplication::from_state(&state);
        self.reduce_locked(&mut state, LoanAction::SubmissionStarted, &None);

        let store = self.clone();
        let handle = self.inner.runtime.spawn(async move {
            let action = match store.inner.api.submit(&application).await {
                Ok(response) => {
                    tracing::info!(response_id = response.id, "Loan application accepted");
                    LoanAction::SubmissionSuccess(response.id)
                }
                Err(e) => {
                    tracing::warn!(kind = e.kind(), error = %e, "Loan application failed");
                    LoanAction::SubmissionFailure(e.to_string())
                }
            };
            store.dispatch(action);
        });

        // Recorded before the state lock is released: the task cannot report
        // back, and no later submit can start, until this handle is stored.
        *self.inner.in_flight.lock() = Some(handle);
    }

    /// Reduce, run effects and publish while the state lock is held, so
    /// publication order always matches reduction order.
    fn reduce_locked(&self, state: &mut LoanState, action: LoanAction, saved: &Option<LoanParams>) {
        let old = state.clone();
        let new = LoanReducer::reduce(old.clone(), action.clone(), saved);

        if let Some(params) = persist_effect(&action, &old, &new) {
            if let Err(e) = self.inner.params.save_params(params) {
                tracing::warn!(error = %e, "Failed to persist loan params");
            }
        }

        *state = new.clone();
        self.inner.publisher.send_replace(new);
    }

    fn load_saved(&self) -> Option<LoanParams> {
        match self.inner.params.load_params() {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load saved loan params");
                None
            }
        }
    }
}
