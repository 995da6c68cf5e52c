//! UI layer for the desktop app: window shell, product rows, and the repaint surface.

pub mod app;

pub use app::{mount_or_builtin, VoteListApp};
