pub mod deck_handlers;
pub mod presentation_handlers;
