//! Moves vote intents from the row queue into the list controller.

use vote_core::{IntentQueue, ListController, RenderSurface, VoteOutcome};

use crate::controller::events::UiEvent;

/// Applies every queued intent in arrival order.
pub fn apply_queued_votes<R: RenderSurface>(
    controller: &mut ListController<R>,
    queue: &IntentQueue,
) -> Vec<UiEvent> {
    let mut events = Vec::new();

    let dropped = queue.take_dropped();
    if dropped > 0 {
        tracing::warn!(dropped, "vote intents were dropped before reaching the list");
        events.push(UiEvent::IntentsDropped(dropped));
    }

    for intent in queue.drain() {
        let event = match controller.apply_intent(intent) {
            VoteOutcome::Applied {
                product_id, votes, ..
            } => UiEvent::VoteApplied {
                product_id,
                direction: intent.direction,
                votes,
            },
            VoteOutcome::UnknownProduct(product_id) => UiEvent::VoteIgnored(product_id),
        };
        events.push(event);
    }

    events
}
