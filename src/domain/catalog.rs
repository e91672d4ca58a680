//! Name-keyed catalog entities: films, characters, planets and species.
//!
//! The four tables share one shape (`id`, unique `name`), so they are
//! modelled as a single item type tagged by [`Catalog`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of catalog entity.
///
/// Deserializes from the plural path segment used in URLs
/// (`films`, `characters`, `planets`, `species`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Catalog {
    #[serde(rename = "films")]
    Film,
    #[serde(rename = "characters")]
    Character,
    #[serde(rename = "planets")]
    Planet,
    #[serde(rename = "species")]
    Species,
}

impl Catalog {
    /// Every catalog kind, in the order favourites are reported
    pub const ALL: [Catalog; 4] = [
        Catalog::Film,
        Catalog::Planet,
        Catalog::Character,
        Catalog::Species,
    ];

    /// Capitalized name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Catalog::Film => "Film",
            Catalog::Character => "Character",
            Catalog::Planet => "Planet",
            Catalog::Species => "Species",
        }
    }

    /// Lowercase singular, used as a JSON key
    pub fn singular(&self) -> &'static str {
        match self {
            Catalog::Film => "film",
            Catalog::Character => "character",
            Catalog::Planet => "planet",
            Catalog::Species => "species",
        }
    }

    /// URL segment and JSON key for collections
    pub fn collection(&self) -> &'static str {
        match self {
            Catalog::Film => "films",
            Catalog::Character => "characters",
            Catalog::Planet => "planets",
            Catalog::Species => "species",
        }
    }

    /// Foreign-key column of the matching favourite relation
    pub fn foreign_key(&self) -> &'static str {
        match self {
            Catalog::Film => "film_id",
            Catalog::Character => "character_id",
            Catalog::Planet => "planet_id",
            Catalog::Species => "specie_id",
        }
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection())
    }
}

/// A film, character, planet or species row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogItem {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "A New Hope")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plural_path_segments() {
        let kinds: Vec<Catalog> =
            serde_json::from_str(r#"["films", "characters", "planets", "species"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![Catalog::Film, Catalog::Character, Catalog::Planet, Catalog::Species]
        );
    }

    #[test]
    fn rejects_unknown_segments() {
        assert!(serde_json::from_str::<Catalog>(r#""starships""#).is_err());
        assert!(serde_json::from_str::<Catalog>(r#""film""#).is_err());
    }

    #[test]
    fn species_keeps_its_legacy_foreign_key() {
        assert_eq!(Catalog::Species.foreign_key(), "specie_id");
        assert_eq!(Catalog::Film.foreign_key(), "film_id");
    }

    #[test]
    fn display_matches_collection_segment() {
        for kind in Catalog::ALL {
            assert_eq!(kind.to_string(), kind.collection());
        }
    }
}
