//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod character;
pub mod favourite_character;
pub mod favourite_film;
pub mod favourite_planet;
pub mod favourite_species;
pub mod film;
pub mod planet;
pub mod species;
pub mod user;

/// Kind-independent view of a favourite relation row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavouriteRow {
    pub id: i32,
    pub user_id: i32,
    pub target_id: i32,
}

