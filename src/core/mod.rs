//! Core value types: cards, locations, RNG, configuration.
//!
//! Everything here is a plain value with no game logic beyond derived
//! properties (card color, location ranges).

pub mod card;
pub mod location;
pub mod rng;
pub mod config;

pub use card::{color_of, make_deck, Card, Color, InvalidRankError, ParseCardError, Suit, ACE, DECK_SIZE, KING};
pub use location::{
    Location, LocationError, LocationKind, CELL_COUNT, FOUNDATION_COUNT, LOCATION_COUNT, STACK_COUNT,
};
pub use rng::GameRng;
pub use config::GameConfig;
