pub mod card;
pub mod grid;

pub use card::{listing_card, CardOptions, CarouselState};
pub use grid::{listing_grid, GridSource};
