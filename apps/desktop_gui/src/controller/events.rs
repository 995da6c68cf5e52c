//! Events produced while applying queued votes, and error modeling for the status banner.

use shared::{
    domain::{ProductId, VoteDirection},
    error::{ErrorCode, VoteError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    VoteApplied {
        product_id: ProductId,
        direction: VoteDirection,
        votes: i64,
    },
    VoteIgnored(ProductId),
    IntentsDropped(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Seed,
    Validation,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    /// Seed file that could not be used; the app continues on the built-in products.
    ///
    /// Files that parsed but broke a product rule are reported under that
    /// rule's category rather than as an I/O or format problem.
    pub fn seed_failure(err: &anyhow::Error) -> Self {
        let category = err
            .downcast_ref::<VoteError>()
            .map_or(UiErrorCategory::Seed, category_for);
        Self {
            category,
            message: format!("Could not load seed ({err:#}); showing the built-in products."),
        }
    }

    /// Products the list controller refused to mount.
    pub fn rejected_seed(err: &VoteError) -> Self {
        Self {
            category: category_for(err),
            message: format!("Seed rejected ({err}); showing the built-in products."),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn category_for(err: &VoteError) -> UiErrorCategory {
    match err.code() {
        ErrorCode::NotFound => UiErrorCategory::NotFound,
        ErrorCode::Validation => UiErrorCategory::Validation,
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Seed => "Seed",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::NotFound => "Not found",
    }
}

/// One-line status text for an event, if it deserves one.
pub fn status_line(event: &UiEvent) -> Option<String> {
    match event {
        UiEvent::VoteApplied {
            product_id,
            direction,
            votes,
        } => Some(format!("Product {product_id} voted {direction}; now {votes}")),
        UiEvent::VoteIgnored(_) => None,
        UiEvent::IntentsDropped(count) => Some(format!(
            "{count} vote(s) dropped because the queue was full; please retry"
        )),
    }
}
