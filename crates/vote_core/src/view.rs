//! Per-product view contract and the queue that carries vote intents back to
//! the controller.

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use shared::{
    domain::{Product, ProductId},
    protocol::VoteIntent,
};

use crate::snapshot::OrderedView;

pub const DEFAULT_INTENT_QUEUE_CAPACITY: usize = 256;

/// Where a product row sends its up/down intents.
pub trait VoteCallbacks {
    fn on_upvote(&self, id: ProductId);
    fn on_downvote(&self, id: ProductId);
}

impl<F: Fn(VoteIntent)> VoteCallbacks for F {
    fn on_upvote(&self, id: ProductId) {
        self(VoteIntent::up(id))
    }

    fn on_downvote(&self, id: ProductId) {
        self(VoteIntent::down(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Up,
    Down,
}

/// Stateless view of one product. It reads fields for display and turns an
/// interaction into exactly one callback carrying the product's id.
pub struct ItemView<'a, C: VoteCallbacks + ?Sized> {
    product: &'a Product,
    callbacks: &'a C,
}

impl<'a, C: VoteCallbacks + ?Sized> ItemView<'a, C> {
    pub fn new(product: &'a Product, callbacks: &'a C) -> Self {
        Self { product, callbacks }
    }

    /// One view per product, in the order of `view`.
    pub fn list(view: &'a OrderedView, callbacks: &'a C) -> Vec<Self> {
        view.iter()
            .map(|product| Self::new(product, callbacks))
            .collect()
    }

    pub fn handle(&self, interaction: Interaction) {
        match interaction {
            Interaction::Up => self.callbacks.on_upvote(self.product.id),
            Interaction::Down => self.callbacks.on_downvote(self.product.id),
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn title(&self) -> &'a str {
        &self.product.title
    }

    pub fn description(&self) -> &'a str {
        &self.product.description
    }

    pub fn url(&self) -> &'a str {
        &self.product.url
    }

    pub fn votes(&self) -> i64 {
        self.product.votes
    }

    pub fn product_image_url(&self) -> &'a str {
        &self.product.product_image_url
    }

    pub fn submitter_avatar_url(&self) -> &'a str {
        &self.product.submitter_avatar_url
    }
}

/// Bounded FIFO of vote intents. Every interaction is queued on its own;
/// repeated clicks are never merged.
pub struct IntentQueue {
    tx: Sender<VoteIntent>,
    rx: Receiver<VoteIntent>,
    dropped: AtomicUsize,
}

impl IntentQueue {
    pub fn bounded(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity.max(1));
        Self {
            tx,
            rx,
            dropped: AtomicUsize::new(0),
        }
    }

    pub fn push(&self, intent: VoteIntent) {
        match self.tx.try_send(intent) {
            Ok(()) => tracing::trace!(
                product_id = intent.product_id.0,
                direction = intent.direction.as_str(),
                "queued vote intent"
            ),
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    product_id = intent.product_id.0,
                    "vote intent queue is full; dropping intent"
                );
            }
            // The queue owns its receiver, so this only happens during teardown.
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("vote intent queue disconnected");
            }
        }
    }

    /// Takes every queued intent in arrival order.
    pub fn drain(&self) -> Vec<VoteIntent> {
        self.rx.try_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Number of intents dropped because the queue was full, reset on read.
    pub fn take_dropped(&self) -> usize {
        self.dropped.swap(0, Ordering::Relaxed)
    }
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::bounded(DEFAULT_INTENT_QUEUE_CAPACITY)
    }
}

impl VoteCallbacks for IntentQueue {
    fn on_upvote(&self, id: ProductId) {
        self.push(VoteIntent::up(id));
    }

    fn on_downvote(&self, id: ProductId) {
        self.push(VoteIntent::down(id));
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
