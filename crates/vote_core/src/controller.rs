//! The list controller: sole owner of the product collection.

use shared::{
    domain::{Product, ProductId, VoteDirection},
    error::VoteError,
    protocol::VoteIntent,
};
use tracing::{debug, info};

use crate::{
    render::{NoRender, RenderSurface},
    snapshot::{ensure_unique_ids, OrderedView, ProductSnapshot},
};

/// Result of handing a vote to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Applied {
        product_id: ProductId,
        votes: i64,
        revision: u64,
    },
    /// The id is not in the list. Nothing changed and nothing was re-rendered.
    UnknownProduct(ProductId),
}

impl VoteOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Converts the outcome into the new score, treating an unknown id as an error.
    pub fn into_result(self) -> Result<i64, VoteError> {
        match self {
            Self::Applied { votes, .. } => Ok(votes),
            Self::UnknownProduct(id) => Err(VoteError::UnknownProduct { id }),
        }
    }
}

pub struct ListController<R: RenderSurface = NoRender> {
    current: ProductSnapshot,
    surface: R,
}

impl ListController<NoRender> {
    pub fn headless(seed: Vec<Product>) -> Result<Self, VoteError> {
        Self::new(seed, NoRender)
    }
}

impl<R: RenderSurface> ListController<R> {
    /// Takes ownership of the seed. Fails if two products share an id.
    pub fn new(seed: Vec<Product>, surface: R) -> Result<Self, VoteError> {
        ensure_unique_ids(&seed)?;
        info!(products = seed.len(), "list controller seeded");
        Ok(Self {
            current: ProductSnapshot::seeded(seed),
            surface,
        })
    }

    /// Moves one product's score by a single step.
    ///
    /// Installs a new snapshot in which only that product differs and asks the
    /// render surface to redraw once. An unknown id leaves the list untouched
    /// and does not render.
    pub fn apply_vote(&mut self, id: ProductId, direction: VoteDirection) -> VoteOutcome {
        let Some(index) = self.current.position(id) else {
            debug!(
                product_id = id.0,
                direction = direction.as_str(),
                "ignoring vote for unknown product"
            );
            return VoteOutcome::UnknownProduct(id);
        };

        let updated = self.current.entries()[index].voted(direction);
        let votes = updated.votes;
        self.current = self.current.replace(index, updated);
        let revision = self.current.revision();
        debug!(
            product_id = id.0,
            direction = direction.as_str(),
            votes,
            revision,
            "applied vote"
        );

        self.surface.request_render(&self.current);

        VoteOutcome::Applied {
            product_id: id,
            votes,
            revision,
        }
    }

    pub fn apply_intent(&mut self, intent: VoteIntent) -> VoteOutcome {
        self.apply_vote(intent.product_id, intent.direction)
    }

    /// Like [`apply_vote`](Self::apply_vote) but takes a raw delta, which must be +1 or -1.
    pub fn apply_delta(&mut self, id: ProductId, delta: i64) -> Result<VoteOutcome, VoteError> {
        let direction = VoteDirection::try_from(delta)?;
        Ok(self.apply_vote(id, direction))
    }

    /// Applies intents in the order given. Returns how many matched a product.
    pub fn apply_all(&mut self, intents: impl IntoIterator<Item = VoteIntent>) -> usize {
        intents
            .into_iter()
            .map(|intent| self.apply_intent(intent))
            .filter(VoteOutcome::is_applied)
            .count()
    }

    /// Current products, highest score first. Ties keep seed order.
    pub fn ordered_view(&self) -> OrderedView {
        self.current.ordered()
    }

    pub fn snapshot(&self) -> ProductSnapshot {
        self.current.clone()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.current.get(id)
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.current.revision()
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
