//! Base state holder: observable state cell plus one-shot effect queue.
//!
//! A [`Store`] owns the authoritative current state for one feature and
//! a bounded queue of one-shot effects, both scoped to the owning UI's
//! lifetime. Dispatch logic lives outside the store (see
//! [`StateHolder`](crate::StateHolder)); the store only provides the
//! publish/emit/spawn primitives that logic is built from.

mod effects;
mod observe;

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::effect::UiEffect;
use crate::lifecycle::{Lifecycle, Phase};
use crate::reducer::Reducer;
use crate::state::UiState;

pub use effects::{EffectStream, EmitError};
pub use observe::StateStream;

/// Default capacity of the bounded effect queue.
pub const DEFAULT_EFFECT_CAPACITY: usize = 16;

/// Owner of one feature's current state and effect queue.
///
/// `Store` is a cheap cloneable handle; clones share the same state
/// cell, effect queue, task scope, and lifecycle, so dispatch logic can
/// move a clone into spawned business work.
///
/// Constructing a store returns the paired [`EffectStream`] — the
/// single consuming endpoint of the effect queue.
///
/// # Overflow policy
///
/// The effect queue is bounded. [`emit`](Store::emit) suspends until
/// buffer space frees; [`try_emit`](Store::try_emit) fails loudly with
/// [`EmitError::Full`] instead. Neither drops an effect that was
/// accepted.
pub struct Store<S: UiState, E: UiEffect> {
    inner: Arc<StoreInner<S, E>>,
}

struct StoreInner<S, E> {
    name: &'static str,
    state: watch::Sender<S>,
    /// Taken on destroy so the consumer observes end-of-stream.
    effects: Mutex<Option<mpsc::Sender<E>>>,
    effect_capacity: usize,
    lifecycle: Lifecycle,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl<S: UiState, E: UiEffect> Clone for Store<S, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: UiState, E: UiEffect> Store<S, E> {
    /// Create a store seeded with `initial` and the default effect
    /// capacity.
    pub fn new(initial: S) -> (Self, EffectStream<E>) {
        Self::builder().build(initial)
    }

    /// Configure name and effect capacity before construction.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// The latest published state. Always present; never blocks.
    pub fn state(&self) -> S {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state publications.
    ///
    /// The subscriber starts at the current state and is woken by every
    /// later publish.
    pub fn subscribe(&self) -> StateStream<S> {
        StateStream::new(self.inner.state.subscribe())
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.inner.lifecycle.phase()
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.lifecycle.is_destroyed()
    }

    /// Replace the current state.
    ///
    /// The new value is visible to [`state`](Store::state) and to all
    /// subscribers as soon as this returns. After destroy this is a
    /// no-op.
    pub fn publish(&self, new_state: S) {
        if self.inner.lifecycle.is_destroyed() {
            tracing::trace!(store = self.inner.name, "state publish dropped (store destroyed)");
            return;
        }
        self.inner.state.send_replace(new_state);
    }

    /// Run a reducer against the current state and publish the result.
    ///
    /// The swap is atomic with respect to other publishers; subscribers
    /// never observe an intermediate value. Sequencing across await
    /// points is still the caller's job: two tasks that each read state,
    /// await, and reduce can interleave.
    pub fn reduce<R>(&self, intent: R::Intent)
    where
        R: Reducer<State = S>,
    {
        if self.inner.lifecycle.is_destroyed() {
            tracing::trace!(store = self.inner.name, "reduce dropped (store destroyed)");
            return;
        }
        self.inner.state.send_modify(|state| {
            *state = R::reduce(std::mem::take(state), intent);
        });
    }

    /// Enqueue an effect for one-shot delivery.
    ///
    /// Suspends while the buffer is full and resumes once the consumer
    /// drains an element. Fails only once the store is destroyed —
    /// including a destroy that lands mid-wait.
    pub async fn emit(&self, effect: E) -> Result<(), EmitError> {
        let Some(sender) = self.effect_sender() else {
            return Err(EmitError::Closed);
        };
        tokio::select! {
            // Checked first so a destroy that already landed wins over a
            // racing send into the still-open buffer
            biased;
            () = self.inner.lifecycle.destroyed() => Err(EmitError::Closed),
            result = sender.send(effect) => result.map_err(|_| EmitError::Closed),
        }
    }

    /// Enqueue an effect without waiting.
    ///
    /// Fails loudly with [`EmitError::Full`] when the buffer has no
    /// space, rather than applying backpressure.
    pub fn try_emit(&self, effect: E) -> Result<(), EmitError> {
        let Some(sender) = self.effect_sender() else {
            return Err(EmitError::Closed);
        };
        sender.try_send(effect).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => EmitError::Full {
                capacity: self.inner.effect_capacity,
            },
            mpsc::error::TrySendError::Closed(_) => EmitError::Closed,
        })
    }

    /// Spawn business work scoped to this store's lifetime.
    ///
    /// The task is aborted when the store is destroyed, so a publish or
    /// emit that an aborted task never reached simply does not happen.
    /// After destroy the future is dropped without running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.inner.lifecycle.is_destroyed() {
            tracing::trace!(store = self.inner.name, "task dropped (store destroyed)");
            return;
        }
        let handle = tokio::spawn(future);
        let mut tasks = self.inner.tasks.lock();
        // Destroy may have run between the check above and taking the
        // lock; a task registered now would never be aborted.
        if self.inner.lifecycle.is_destroyed() {
            handle.abort();
            return;
        }
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }

    /// Tear down the store: cancel in-flight tasks, close the effect
    /// queue, and turn all further publishes, emits, and spawns into
    /// no-ops.
    ///
    /// Idempotent and irreversible. Effects already buffered keep
    /// draining to the consumer; the effect stream then ends.
    pub fn destroy(&self) {
        if !self.inner.lifecycle.destroy() {
            return;
        }
        // Close the queue before aborting tasks: an emit racing destroy
        // either completed fully or observes Closed, never half of each.
        self.inner.effects.lock().take();
        let mut tasks = self.inner.tasks.lock();
        for task in tasks.drain(..) {
            task.abort();
        }
        tracing::debug!(store = self.inner.name, "store destroyed");
    }

    fn effect_sender(&self) -> Option<mpsc::Sender<E>> {
        self.inner.effects.lock().clone()
    }
}

/// Configuration for a [`Store`].
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    name: &'static str,
    effect_capacity: usize,
}

impl StoreBuilder {
    fn new() -> Self {
        Self {
            name: "store",
            effect_capacity: DEFAULT_EFFECT_CAPACITY,
        }
    }

    /// Name used as the `store` field on log records.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Capacity of the bounded effect queue. Clamped to at least 1.
    pub fn effect_capacity(mut self, capacity: usize) -> Self {
        self.effect_capacity = capacity.max(1);
        self
    }

    pub fn build<S: UiState, E: UiEffect>(self, initial: S) -> (Store<S, E>, EffectStream<E>) {
        let (state_tx, _) = watch::channel(initial);
        let (effect_tx, effect_rx) = mpsc::channel(self.effect_capacity);
        let store = Store {
            inner: Arc::new(StoreInner {
                name: self.name,
                state: state_tx,
                effects: Mutex::new(Some(effect_tx)),
                effect_capacity: self.effect_capacity,
                lifecycle: Lifecycle::new(),
                tasks: Mutex::new(Vec::new()),
            }),
        };
        (store, EffectStream::new(effect_rx))
    }
}
