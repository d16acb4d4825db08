use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::error::{FetchError, Result};

/// Bounded pool shared by every pipeline stage
///
/// Each fetch (with its decode) holds one slot for its whole duration, so the
/// pool capacity caps outbound HTTP calls across all leagues and events.
/// Fan-out branches do not hold a slot while they wait for their children.
#[derive(Clone)]
pub struct FetchScheduler {
    slots: Arc<Semaphore>,
    capacity: usize,
}

impl FetchScheduler {
    /// Create a new scheduler with `capacity` concurrent slots
    pub fn new(capacity: usize) -> Self {
        Self { slots: Arc::new(Semaphore::new(capacity)), capacity }
    }

    /// Run one unit of fetch work once a slot is free
    pub async fn run<F, T>(&self, work: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let _slot = self.slots.acquire().await.map_err(|_| FetchError::PoolClosed)?;
        work.await
    }

    /// Spawn one task per item and wait for every one of them
    ///
    /// A failing or panicking branch shows up as an `Err` at its index; it never
    /// cancels its siblings.
    pub async fn fan_out<I, F, Fut, T>(&self, items: I, branch: F) -> Vec<Result<T>>
    where
        I: IntoIterator,
        F: Fn(I::Item) -> Fut,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        let handles: Vec<_> =
            items.into_iter().map(|item| tokio::spawn(branch(item))).collect();
        debug!("Fanned out {} branches", handles.len());

        join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.map_err(FetchError::from).and_then(|result| result))
            .collect()
    }

    /// Configured number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently free
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }
}
