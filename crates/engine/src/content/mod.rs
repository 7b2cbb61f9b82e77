//! Built-in game content: dream cards, career suggestions and the default
//! scenario catalog.

mod careers;
mod dream_cards;
mod scenarios;

pub use careers::career_suggestions;
pub use dream_cards::{dream_card_by_id, dream_cards, recommended_dream_card, select_dream_card};
pub use scenarios::builtin_scenarios;
