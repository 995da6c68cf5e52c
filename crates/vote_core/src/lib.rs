//! Client-side product voting list: a controller that owns an immutable,
//! copy-on-write product collection, derives a score-ordered view on demand,
//! and asks a render surface to redraw after every applied vote.

pub mod config;
pub mod controller;
pub mod render;
pub mod seed;
pub mod snapshot;
pub mod view;

pub use controller::{ListController, VoteOutcome};
pub use render::{NoRender, RenderCounter, RenderSurface};
pub use snapshot::{OrderedView, ProductSnapshot};
pub use view::{IntentQueue, Interaction, ItemView, VoteCallbacks};
