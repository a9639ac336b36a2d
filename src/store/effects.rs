//! Effect delivery endpoint and emission errors.

use std::pin::Pin;
use std::task::{Context, Poll};

use thiserror::Error;
use tokio::sync::mpsc;

use crate::effect::UiEffect;

/// Errors that can occur when emitting an effect.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    /// The state holder was destroyed; the queue accepts no new effects.
    #[error("effect queue closed (state holder destroyed)")]
    Closed,

    /// The bounded effect buffer is full. Returned by `try_emit` only;
    /// `emit` waits for space instead.
    #[error("effect buffer full (capacity {capacity})")]
    Full { capacity: usize },
}

/// Consuming endpoint of a store's effect queue.
///
/// Effects buffer inside the queue until this endpoint reads them and
/// are delivered in emission order, each at most once. Once the store
/// is destroyed, already-buffered effects keep draining; after that the
/// stream ends.
pub struct EffectStream<E: UiEffect> {
    receiver: mpsc::Receiver<E>,
}

impl<E: UiEffect> EffectStream<E> {
    pub(crate) fn new(receiver: mpsc::Receiver<E>) -> Self {
        Self { receiver }
    }

    /// Receive the next effect, waiting until one is emitted.
    ///
    /// Returns `None` once the store is destroyed and the buffer has
    /// drained.
    pub async fn next(&mut self) -> Option<E> {
        self.receiver.recv().await
    }

    /// Receive an already-buffered effect without waiting.
    pub fn try_next(&mut self) -> Option<E> {
        self.receiver.try_recv().ok()
    }
}

impl<E: UiEffect> futures_core::Stream for EffectStream<E> {
    type Item = E;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}
