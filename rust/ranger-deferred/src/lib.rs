//! A thread-safe one-shot settlement handle for deferred outcomes.
//!
//! This crate provides a channel-like pair that transmits exactly one
//! *outcome* — a [`ranger_common`] success or failure — from a settler to a
//! deferred handle. Unlike general-purpose channels, settlement happens at
//! most once, and the single delivered outcome can be observed through
//! several mechanisms:
//!
//! - Blocking consumption with [`Deferred::wait`]
//! - Non-blocking inspection with [`Deferred::try_wait`]
//! - Completion callbacks with [`Deferred::observe`], which borrow the
//!   outcome without consuming it
//! - `async` composition: [`Deferred`] implements [`Future`]
//!
//! ## Settlement lifecycle
//!
//! 1. Pending: no outcome has been delivered yet
//! 2. Settled: an outcome is available
//! 3. Spent: the outcome has been consumed, or settlement was abandoned
//!
//! Settlement is abandoned when every [`Settler`] is dropped without
//! delivering an outcome, or explicitly via [`Settler::abandon`]. Consuming
//! accessors report a spent handle as the `OutcomeUnavailable` failure.
//!
//! ## Thread safety
//!
//! Both halves are `Send` and `Sync` when the carried value is `Send`, and
//! both can be cloned: cloned settlers race to deliver the single outcome,
//! and cloned handles share it, with at most one of them consuming it.

use std::{
    future::Future,
    pin::Pin,
    sync::{
        Arc, Condvar, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    task::{Context, Poll, Waker},
};

use ranger_common::error::Error;

/// The value carried by a settlement: success with a result, or failure.
pub type Outcome<T> = ranger_common::Result<T>;

/// Creates a new settlement pair.
///
/// The settler delivers at most one outcome; the deferred handle observes
/// it. Either half can be cloned — see the crate docs for the sharing
/// rules.
pub fn channel<T>() -> (Settler<T>, Deferred<T>) {
    let cell = Arc::new(SettleCell::new());
    (Settler(cell.clone()), Deferred(cell))
}

/// Creates a deferred handle that is already settled with the given outcome.
///
/// This is the constructor used by computations that complete before their
/// handle is handed out: the outcome is produced synchronously and every
/// observation mechanism sees it immediately.
pub fn settled<T>(outcome: Outcome<T>) -> Deferred<T> {
    Deferred(Arc::new(SettleCell::settled(outcome)))
}

/// The delivering half of a settlement pair.
///
/// Cloned settlers share one cell; only the first delivered outcome counts.
/// When the last settler is dropped without settling, the handle is
/// abandoned.
pub struct Settler<T>(Arc<SettleCell<T>>);

impl<T> Settler<T> {
    /// Delivers the outcome.
    ///
    /// Returns `Ok(())` if this call performed the settlement, or gives the
    /// outcome back as `Err` when the cell was already settled, spent, or
    /// abandoned.
    pub fn settle(&self, outcome: Outcome<T>) -> Result<(), Outcome<T>> {
        self.0.settle(outcome)
    }

    /// Checks whether no outcome has been delivered yet.
    pub fn is_pending(&self) -> bool {
        self.0.is_pending()
    }

    /// Abandons the settlement without delivering an outcome.
    ///
    /// Waiting and observing sides see the `OutcomeUnavailable` failure.
    pub fn abandon(&self) {
        self.0.abandon();
    }
}

impl<T> Clone for Settler<T> {
    fn clone(&self) -> Settler<T> {
        self.0.add_settler();
        Settler(self.0.clone())
    }
}

impl<T> Drop for Settler<T> {
    fn drop(&mut self) {
        self.0.drop_settler();
    }
}

/// The observing half of a settlement pair.
///
/// A handle can be waited on, polled, observed through callbacks, or
/// awaited. The outcome itself is consumed at most once across all clones
/// of the handle; observers borrow it and leave it in place.
#[derive(Clone)]
pub struct Deferred<T>(Arc<SettleCell<T>>);

impl<T> Deferred<T> {
    /// Blocks until the settlement completes and consumes the outcome.
    ///
    /// Returns the `OutcomeUnavailable` failure when the settlement was
    /// abandoned or the outcome was already consumed elsewhere.
    pub fn wait(self) -> Outcome<T> {
        self.0.wait()
    }

    /// Attempts to consume the outcome without blocking.
    ///
    /// Returns `None` while the settlement is still pending.
    pub fn try_wait(&self) -> Option<Outcome<T>> {
        self.0.try_take()
    }

    /// Blocks until the settlement completes, then runs the completion
    /// callback against the outcome by reference.
    ///
    /// Every attached observer runs exactly once, seeing either the success
    /// value or the failure — never both. The outcome stays in place, so a
    /// later [`wait`](Self::wait) still consumes it. The observer runs with
    /// the handle's internal state borrowed; it must not wait on the same
    /// handle from inside.
    pub fn observe<F>(&self, f: F)
    where
        F: FnOnce(Result<&T, &Error>),
    {
        self.0.observe(f);
    }

    /// Checks whether no outcome has been delivered yet.
    pub fn is_pending(&self) -> bool {
        self.0.is_pending()
    }
}

impl<T> Future for Deferred<T> {
    type Output = Outcome<T>;

    /// Consumes the outcome once the settlement completes.
    ///
    /// Pending polls park the task's waker; settlement or abandonment wakes
    /// every parked task.
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.0.poll_take(cx)
    }
}

/// Internal cell shared by both halves: a mutex-protected state, a condition
/// variable for the blocking paths, and a count of live settlers.
struct SettleCell<T> {
    state: Mutex<State<T>>,
    condvar: Condvar,
    settlers: AtomicUsize,
}

impl<T> SettleCell<T> {
    fn new() -> SettleCell<T> {
        SettleCell {
            state: Mutex::new(State::Pending { wakers: Vec::new() }),
            condvar: Condvar::new(),
            settlers: AtomicUsize::new(1),
        }
    }

    fn settled(outcome: Outcome<T>) -> SettleCell<T> {
        SettleCell {
            state: Mutex::new(State::Settled(outcome)),
            condvar: Condvar::new(),
            settlers: AtomicUsize::new(1),
        }
    }

    /// Transitions `Pending` to `Settled`, handing the outcome back when the
    /// transition is no longer possible. Wakes blocked and parked waiters.
    fn settle(&self, outcome: Outcome<T>) -> Result<(), Outcome<T>> {
        let mut state = self.state.lock().unwrap();
        let wakers = match &mut *state {
            State::Pending { wakers } => std::mem::take(wakers),
            State::Settled(_) | State::Spent => return Err(outcome),
        };
        *state = State::Settled(outcome);
        drop(state);
        self.condvar.notify_all();
        for waker in wakers {
            waker.wake();
        }
        Ok(())
    }

    /// Transitions `Pending` to `Spent`; settled or spent cells are left
    /// untouched.
    fn abandon(&self) {
        let mut state = self.state.lock().unwrap();
        let wakers = match &mut *state {
            State::Pending { wakers } => std::mem::take(wakers),
            State::Settled(_) | State::Spent => return,
        };
        *state = State::Spent;
        drop(state);
        self.condvar.notify_all();
        for waker in wakers {
            waker.wake();
        }
    }

    fn is_pending(&self) -> bool {
        self.state.lock().unwrap().is_pending()
    }

    /// Blocks until the cell leaves `Pending`, then consumes the outcome.
    fn wait(&self) -> Outcome<T> {
        let guard = self.state.lock().unwrap();
        let mut guard = self
            .condvar
            .wait_while(guard, |state| state.is_pending())
            .unwrap();
        guard.take_outcome()
    }

    /// Consumes the outcome if the cell already left `Pending`.
    fn try_take(&self) -> Option<Outcome<T>> {
        let mut state = self.state.lock().unwrap();
        if state.is_pending() {
            None
        } else {
            Some(state.take_outcome())
        }
    }

    /// Blocks until the cell leaves `Pending`, then lends the outcome to the
    /// observer without consuming it.
    fn observe<F>(&self, f: F)
    where
        F: FnOnce(Result<&T, &Error>),
    {
        let guard = self.state.lock().unwrap();
        let guard = self
            .condvar
            .wait_while(guard, |state| state.is_pending())
            .unwrap();
        match &*guard {
            State::Pending { .. } => {
                panic!("State::observe unexpected: outcome is not settled yet")
            }
            State::Settled(Ok(value)) => f(Ok(value)),
            State::Settled(Err(error)) => f(Err(error)),
            State::Spent => f(Err(&Error::outcome_unavailable())),
        }
    }

    /// `Future`-side access: parks the waker while pending, consumes the
    /// outcome afterwards.
    fn poll_take(&self, cx: &mut Context<'_>) -> Poll<Outcome<T>> {
        let mut state = self.state.lock().unwrap();
        match &mut *state {
            State::Pending { wakers } => {
                if !wakers.iter().any(|waker| waker.will_wake(cx.waker())) {
                    wakers.push(cx.waker().clone());
                }
                Poll::Pending
            }
            State::Settled(_) | State::Spent => Poll::Ready(state.take_outcome()),
        }
    }

    fn add_settler(&self) {
        self.settlers.fetch_add(1, Ordering::SeqCst);
    }

    /// Abandons the settlement when the last settler goes away.
    fn drop_settler(&self) {
        if self.settlers.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.abandon();
        }
    }
}

/// Internal settlement state.
///
/// Transitions are `Pending -> Settled` on delivery, `Pending -> Spent` on
/// abandonment, and `Settled -> Spent` when the outcome is consumed.
enum State<T> {
    /// No outcome delivered yet; wakers parked by pending polls.
    Pending { wakers: Vec<Waker> },
    /// An outcome is available.
    Settled(Outcome<T>),
    /// The outcome was consumed, or settlement was abandoned.
    Spent,
}

impl<T> State<T> {
    fn is_pending(&self) -> bool {
        matches!(self, State::Pending { .. })
    }

    /// Takes the outcome, leaving the state `Spent`. A spent state yields
    /// the `OutcomeUnavailable` failure.
    ///
    /// # Panics
    ///
    /// Panics if called while the state is still pending.
    fn take_outcome(&mut self) -> Outcome<T> {
        match std::mem::replace(self, State::Spent) {
            State::Pending { .. } => {
                panic!("State::take_outcome unexpected: outcome is not settled yet")
            }
            State::Settled(outcome) => outcome,
            State::Spent => Err(Error::outcome_unavailable()),
        }
    }
}
