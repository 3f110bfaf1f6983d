/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Single-flight coordination
//!
//! [`SingleFlight`] runs at most one instance of an async operation at a time.
//! Callers that arrive while the operation is running are queued and receive
//! a clone of its outcome instead of starting their own.
//!
//! The request pipeline uses it for token refresh: when several requests hit
//! an expired token at once, exactly one refresh call goes out and every
//! request replays with the token it produced.

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, trace, warn};

/// Why a queued caller did not receive a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightError<E> {
    /// The shared operation completed with an error
    Failed(E),
    /// The caller driving the operation was dropped before it finished
    Abandoned,
}

impl<E: fmt::Display> fmt::Display for FlightError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightError::Failed(e) => write!(f, "shared operation failed: {e}"),
            FlightError::Abandoned => write!(f, "shared operation abandoned"),
        }
    }
}

type Waiter<T, E> = oneshot::Sender<Result<T, E>>;

struct FlightState<T, E> {
    in_flight: bool,
    waiters: VecDeque<Waiter<T, E>>,
    completed: u64,
}

/// Coordinator that lets one caller run an operation while the rest wait
pub struct SingleFlight<T, E> {
    state: Mutex<FlightState<T, E>>,
}

impl<T, E> SingleFlight<T, E>
where
    T: Clone,
    E: Clone,
{
    /// Creates an idle coordinator
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FlightState {
                in_flight: false,
                waiters: VecDeque::new(),
                completed: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FlightState<T, E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// True while an operation is running
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.lock().in_flight
    }

    /// Number of callers currently queued behind the running operation
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.lock().waiters.len()
    }

    /// Number of operations that ran to completion (success or failure)
    #[must_use]
    pub fn completed(&self) -> u64 {
        self.lock().completed
    }

    /// Runs `operation`, or joins the one already running
    pub async fn run_exclusive<F, Fut>(&self, operation: F) -> Result<T, FlightError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.run_exclusive_or(|| None, operation).await
    }

    /// Like [`run_exclusive`](Self::run_exclusive), with a shortcut
    ///
    /// `shortcut` runs under the coordinator's lock when no operation is in
    /// flight. Returning `Some(value)` completes the call with `value` and
    /// skips the operation. The check and the decision to start are atomic
    /// with respect to other callers, so a caller can detect that a previous
    /// operation already produced what it needs.
    pub async fn run_exclusive_or<S, F, Fut>(
        &self,
        shortcut: S,
        operation: F,
    ) -> Result<T, FlightError<E>>
    where
        S: FnOnce() -> Option<T>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let receiver = {
            let mut state = self.lock();
            if state.in_flight {
                let (tx, rx) = oneshot::channel();
                state.waiters.push_back(tx);
                trace!("joined in-flight operation ({} waiting)", state.waiters.len());
                Some(rx)
            } else if let Some(value) = shortcut() {
                trace!("shortcut taken, operation skipped");
                return Ok(value);
            } else {
                state.in_flight = true;
                None
            }
        };

        if let Some(rx) = receiver {
            return match rx.await {
                Ok(result) => result.map_err(FlightError::Failed),
                Err(_) => Err(FlightError::Abandoned),
            };
        }

        let mut guard = LeaderGuard {
            flight: self,
            settled: false,
        };
        let result = operation().await;
        guard.settle(&result);
        result.map_err(FlightError::Failed)
    }
}

impl<T, E> Default for SingleFlight<T, E>
where
    T: Clone,
    E: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for SingleFlight<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("SingleFlight")
            .field("in_flight", &state.in_flight)
            .field("waiting", &state.waiters.len())
            .field("completed", &state.completed)
            .finish()
    }
}

/// Resets the coordinator when the leading caller finishes or is dropped
struct LeaderGuard<'a, T, E>
where
    T: Clone,
    E: Clone,
{
    flight: &'a SingleFlight<T, E>,
    settled: bool,
}

impl<T, E> LeaderGuard<'_, T, E>
where
    T: Clone,
    E: Clone,
{
    fn settle(&mut self, result: &Result<T, E>) {
        let waiters = {
            let mut state = self.flight.lock();
            state.in_flight = false;
            state.completed += 1;
            std::mem::take(&mut state.waiters)
        };
        self.settled = true;

        debug!(
            "shared operation {}, releasing {} waiter(s)",
            if result.is_ok() { "succeeded" } else { "failed" },
            waiters.len()
        );
        for waiter in waiters {
            // A waiter whose caller went away has dropped its receiver
            let _ = waiter.send(result.clone());
        }
    }
}

impl<T, E> Drop for LeaderGuard<'_, T, E>
where
    T: Clone,
    E: Clone,
{
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let waiters = {
            let mut state = self.flight.lock();
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };
        warn!(
            "shared operation dropped before completion, abandoning {} waiter(s)",
            waiters.len()
        );
        drop(waiters);
    }
}
