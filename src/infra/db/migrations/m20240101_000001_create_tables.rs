//! Migration: base entity tables and favourite relation tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Maximum length of `name` and `email` columns
const NAME_LENGTH: u32 = 120;

/// Maximum length of the plain-text password column
const PASSWORD_LENGTH: u32 = 80;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(NAME_LENGTH)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Password)
                            .string_len(PASSWORD_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::IsActive).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        for table in [Catalog::Films, Catalog::Characters, Catalog::Planets, Catalog::Species] {
            manager.create_table(catalog_table(table)).await?;
        }

        for (table, column, target) in relations() {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Favourite::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Favourite::UserId).integer().not_null())
                        .col(ColumnDef::new(column).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .from(table, Favourite::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .from(table, column)
                                .to(target, Catalog::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        // Combined relation: one optional reference of each kind per row.
        // No request path reads or writes it.
        manager
            .create_table(
                Table::create()
                    .table(Favourites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favourite::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favourite::UserId).integer())
                    .col(ColumnDef::new(Favourite::FilmId).integer())
                    .col(ColumnDef::new(Favourite::PlanetId).integer())
                    .col(ColumnDef::new(Favourite::SpecieId).integer())
                    .col(ColumnDef::new(Favourite::CharacterId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Favourites::Table, Favourite::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Favourites::Table, Favourite::FilmId)
                            .to(Catalog::Films, Catalog::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Favourites::Table, Favourite::PlanetId)
                            .to(Catalog::Planets, Catalog::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Favourites::Table, Favourite::SpecieId)
                            .to(Catalog::Species, Catalog::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Favourites::Table, Favourite::CharacterId)
                            .to(Catalog::Characters, Catalog::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favourites::Table).if_exists().to_owned())
            .await?;

        for (table, _, _) in relations() {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }

        for table in [Catalog::Films, Catalog::Characters, Catalog::Planets, Catalog::Species] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await
    }
}

/// `(id, unique name)` table shared by films, characters, planets and species
fn catalog_table(table: Catalog) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(Catalog::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Catalog::Name)
                .string_len(NAME_LENGTH)
                .not_null()
                .unique_key(),
        )
        .to_owned()
}

/// Relation table, its target column, and the table that column references
fn relations() -> [(Favourite, Favourite, Catalog); 4] {
    [
        (Favourite::FilmsTable, Favourite::FilmId, Catalog::Films),
        (Favourite::PlanetsTable, Favourite::PlanetId, Catalog::Planets),
        (Favourite::CharactersTable, Favourite::CharacterId, Catalog::Characters),
        (Favourite::SpeciesTable, Favourite::SpecieId, Catalog::Species),
    ]
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    IsActive,
}

#[derive(Iden, Clone, Copy)]
enum Catalog {
    #[iden = "films"]
    Films,
    #[iden = "characters"]
    Characters,
    #[iden = "planets"]
    Planets,
    #[iden = "species"]
    Species,
    Id,
    Name,
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
    Id,
    UserId,
    FilmId,
    PlanetId,
    CharacterId,
    SpecieId,
}

#[derive(Iden)]
enum Favourites {
    Table,
}
