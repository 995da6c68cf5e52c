//! Controller layer: vote events, error modeling, and queue-to-list orchestration.

pub mod events;
pub mod orchestration;
