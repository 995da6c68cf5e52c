//! Data model shared by the list controller and every render surface.

pub mod domain;
pub mod error;
pub mod protocol;
