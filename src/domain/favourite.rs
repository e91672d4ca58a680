//! Favourite relations between users and catalog entities.

use serde::ser::{Serialize, SerializeMap, Serializer};
use utoipa::ToSchema;

use super::catalog::{Catalog, CatalogItem};

/// One favourite relation row, with the related entity attached.
///
/// Serializes as `{id, user_id, <fk>: target_id, <entity>: {id, name}}`
/// where the keys follow the relation kind, e.g. `film_id` / `film`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favourite {
    pub id: i32,
    pub user_id: i32,
    pub kind: Catalog,
    pub item: CatalogItem,
}

impl Serialize for Favourite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("user_id", &self.user_id)?;
        map.serialize_entry(self.kind.foreign_key(), &self.item.id)?;
        map.serialize_entry(self.kind.singular(), &self.item)?;
        map.end()
    }
}

/// All favourites of one user, grouped by relation kind
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, ToSchema)]
pub struct FavouriteSummary {
    pub films: Vec<CatalogItem>,
    pub planets: Vec<CatalogItem>,
    pub characters: Vec<CatalogItem>,
    pub species: Vec<CatalogItem>,
}

impl FavouriteSummary {
    /// Store the list for one relation kind
    pub fn set(&mut self, kind: Catalog, items: Vec<CatalogItem>) {
        match kind {
            Catalog::Film => self.films = items,
            Catalog::Planet => self.planets = items,
            Catalog::Character => self.characters = items,
            Catalog::Species => self.species = items,
        }
    }

    /// True when the user has no favourites of any kind
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
            && self.planets.is_empty()
            && self.characters.is_empty()
            && self.species.is_empty()
    }
}
