//! Hand evaluation.
//!
//! - [`hand_type`]: the ten categories and their names/selectors
//! - [`classify`]: the precedence cascade mapping five cards to a category
//! - [`theory`]: closed-form reference probabilities

pub mod classify;
pub mod hand_type;
pub mod theory;

pub use classify::{classify, RankProfile};
pub use hand_type::HandType;
pub use theory::{exact_probability, theoretical_percentage};
