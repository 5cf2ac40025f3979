//! Memoizing API key checker
//!
//! Wraps one key and runs the remote check at most once until `reset()`.
//! Callers arriving while a check is running share the same request.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::domain::api_key::{ApiKey, ApiKeyError, ApiKeyFormatError, RemoteValidator};

type PendingCheck = Shared<BoxFuture<'static, Result<bool, ApiKeyError>>>;

/// Observable state of a checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerState {
    /// Nothing cached and nothing running
    Empty,
    /// A remote check is in flight
    Pending,
    /// The remote check finished with this outcome
    Settled(bool),
}

struct InFlight {
    generation: u64,
    check: PendingCheck,
}

impl std::fmt::Debug for InFlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InFlight")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct Inner {
    next_generation: u64,
    outcome: Option<bool>,
    in_flight: Option<InFlight>,
}

/// API key checker that caches one remote validation outcome
#[derive(Debug)]
pub struct ApiKeyChecker {
    key: ApiKey,
    validator: Arc<dyn RemoteValidator>,
    inner: Mutex<Inner>,
}

/// Format-check a raw key and wrap it in a checker
pub fn make_checker(
    key: &str,
    validator: Arc<dyn RemoteValidator>,
) -> Result<ApiKeyChecker, ApiKeyFormatError> {
    Ok(ApiKeyChecker::new(ApiKey::parse(key)?, validator))
}

impl ApiKeyChecker {
    pub fn new(key: ApiKey, validator: Arc<dyn RemoteValidator>) -> Self {
        Self {
            key,
            validator,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn key(&self) -> &ApiKey {
        &self.key
    }

    /// Validate the key, performing the remote check only when needed
    ///
    /// A settled outcome is returned without I/O. A running check is joined
    /// rather than duplicated. Failures are returned to every waiter and
    /// leave nothing cached.
    pub async fn validate(&self) -> Result<bool, ApiKeyError> {
        let (generation, check) = {
            let mut guard = self.lock();
            let inner = &mut *guard;

            if let Some(outcome) = inner.outcome {
                return Ok(outcome);
            }

            match &inner.in_flight {
                Some(in_flight) => (in_flight.generation, in_flight.check.clone()),
                None => {
                    let generation = inner.next_generation;
                    inner.next_generation += 1;

                    let check = self.start_check();
                    inner.in_flight = Some(InFlight {
                        generation,
                        check: check.clone(),
                    });

                    (generation, check)
                }
            }
        };

        let result = check.await;

        let mut inner = self.lock();
        let is_current = inner
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.generation == generation);

        // A check superseded by reset() or by a newer request must not touch state
        if is_current {
            inner.in_flight = None;
            if let Ok(outcome) = result {
                inner.outcome = Some(outcome);
            }
        }

        result
    }

    /// Forget the cached outcome and any in-flight check
    ///
    /// A check that is already running keeps running for the callers that
    /// are awaiting it, but its result is never cached.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.outcome = None;
        inner.in_flight = None;
    }

    pub fn state(&self) -> CheckerState {
        let inner = self.lock();

        match (inner.outcome, &inner.in_flight) {
            (Some(outcome), _) => CheckerState::Settled(outcome),
            (None, Some(_)) => CheckerState::Pending,
            (None, None) => CheckerState::Empty,
        }
    }

    /// Get the settled outcome, if any
    pub fn cached(&self) -> Option<bool> {
        self.lock().outcome
    }

    fn start_check(&self) -> PendingCheck {
        let validator = Arc::clone(&self.validator);
        let key = self.key.clone();

        async move { validator.check(&key).await.map_err(ApiKeyError::from) }
            .boxed()
            .shared()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // State is only written in short non-panicking sections
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
