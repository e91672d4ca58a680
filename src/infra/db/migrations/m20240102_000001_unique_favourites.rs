//! Migration: one relation row per `(user, target)` pair.
//!
//! The add-favourite path checks for an existing row before inserting; these
//! indexes reject the second of two concurrent inserts that both passed it.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in indexes() {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(table)
                        .col(Favourite::UserId)
                        .col(column)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in indexes() {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}

fn indexes() -> [(&'static str, Favourite, Favourite); 4] {
    [
        ("idx_favourites_films_user_film", Favourite::FilmsTable, Favourite::FilmId),
        ("idx_favourites_planets_user_planet", Favourite::PlanetsTable, Favourite::PlanetId),
        (
            "idx_favourites_characters_user_character",
            Favourite::CharactersTable,
            Favourite::CharacterId,
        ),
        ("idx_favourites_species_user_specie", Favourite::SpeciesTable, Favourite::SpecieId),
    ]
}

#[derive(Iden, Clone, Copy)]
enum Favourite {
    #[iden = "favourites_films"]
    FilmsTable,
    #[iden = "favourites_planets"]
    PlanetsTable,
    #[iden = "favourites_characters"]
    CharactersTable,
    #[iden = "favourites_species"]
    SpeciesTable,
    UserId,
    FilmId,
    PlanetId,
    CharacterId,
    SpecieId,
}
