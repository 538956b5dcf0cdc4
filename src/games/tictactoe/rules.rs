//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](super::Board). The board delegates to
//! these so the rules can be tested without a controller.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::has_won;
