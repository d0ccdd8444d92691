//! State carriers: the values the search engine moves between.

pub mod identity;
pub mod location;
pub mod room_state;
