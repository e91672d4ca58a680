//! Shared query helpers for the catalog and favourite tables.
//!
//! Films, characters, planets and species have identical columns, and so do
//! their four favourite relations. The traits below name the columns each
//! entity plays those roles with; the generic functions run the queries once
//! for every table.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Related,
};

use super::entities::{
    character, favourite_character, favourite_film, favourite_planet, favourite_species, film,
    planet, species, FavouriteRow,
};
use crate::domain::{Catalog, CatalogItem, Favourite};
use crate::errors::{AppError, AppResult, OptionExt};

/// A name-keyed catalog table (`id`, unique `name`)
pub trait CatalogEntity: EntityTrait {
    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
}

/// A favourite relation table (`id`, `user_id`, target foreign key)
pub trait FavouriteEntity: EntityTrait {
    /// Catalog table the relation points at
    type Target: CatalogEntity;

    fn id_column() -> Self::Column;
    fn user_column() -> Self::Column;
    fn target_column() -> Self::Column;
}

macro_rules! impl_catalog_entity {
    ($($module:ident),+ $(,)?) => {
        $(
            impl CatalogEntity for $module::Entity {
                fn id_column() -> Self::Column {
                    $module::Column::Id
                }

                fn name_column() -> Self::Column {
                    $module::Column::Name
                }
            }
        )+
    };
}

impl_catalog_entity!(film, character, planet, species);

macro_rules! impl_favourite_entity {
    ($($module:ident => $target:ident . $column:ident),+ $(,)?) => {
        $(
            impl FavouriteEntity for $module::Entity {
                type Target = $target::Entity;

                fn id_column() -> Self::Column {
                    $module::Column::Id
                }

                fn user_column() -> Self::Column {
                    $module::Column::UserId
                }

                fn target_column() -> Self::Column {
                    $module::Column::$column
                }
            }
        )+
    };
}

impl_favourite_entity!(
    favourite_film => film.FilmId,
    favourite_character => character.CharacterId,
    favourite_planet => planet.PlanetId,
    favourite_species => species.SpecieId,
);

/// Bind `$entity` to the catalog table of `$kind` and evaluate `$body`.
macro_rules! with_catalog_entity {
    ($kind:expr, $entity:ident => $body:expr) => {
        match $kind {
            $crate::domain::Catalog::Film => {
                type $entity = $crate::infra::repositories::entities::film::Entity;
                $body
            }
            $crate::domain::Catalog::Character => {
                type $entity = $crate::infra::repositories::entities::character::Entity;
                $body
            }
            $crate::domain::Catalog::Planet => {
                type $entity = $crate::infra::repositories::entities::planet::Entity;
                $body
            }
            $crate::domain::Catalog::Species => {
                type $entity = $crate::infra::repositories::entities::species::Entity;
                $body
            }
        }
    };
}

/// Bind `$entity` to the favourite relation table of `$kind` and evaluate `$body`.
macro_rules! with_favourite_entity {
    ($kind:expr, $entity:ident => $body:expr) => {
        match $kind {
            $crate::domain::Catalog::Film => {
                type $entity = $crate::infra::repositories::entities::favourite_film::Entity;
                $body
            }
            $crate::domain::Catalog::Character => {
                type $entity = $crate::infra::repositories::entities::favourite_character::Entity;
                $body
            }
            $crate::domain::Catalog::Planet => {
                type $entity = $crate::infra::repositories::entities::favourite_planet::Entity;
                $body
            }
            $crate::domain::Catalog::Species => {
                type $entity = $crate::infra::repositories::entities::favourite_species::Entity;
                $body
            }
        }
    };
}

pub(crate) use with_catalog_entity;
pub(crate) use with_favourite_entity;

// =============================================================================
// Catalog queries
// =============================================================================

/// All rows in insertion order
pub(crate) async fn list_items<E, C>(db: &C) -> AppResult<Vec<CatalogItem>>
where
    E: CatalogEntity,
    E::Model: Into<CatalogItem>,
    C: ConnectionTrait,
{
    let models = E::find().order_by_asc(E::id_column()).all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

/// Row by primary key
pub(crate) async fn find_item<E, C>(db: &C, id: i32) -> AppResult<Option<CatalogItem>>
where
    E: CatalogEntity,
    E::Model: Into<CatalogItem>,
    C: ConnectionTrait,
{
    let model = E::find().filter(E::id_column().eq(id)).one(db).await?;
    Ok(model.map(Into::into))
}

/// Insert a row; a taken name is a conflict
pub(crate) async fn insert_item<E, C>(db: &C, kind: Catalog, name: String) -> AppResult<CatalogItem>
where
    E: CatalogEntity,
    E::Model: Into<CatalogItem> + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    let mut active = <E::ActiveModel as ActiveModelTrait>::default();
    active.set(E::name_column(), name.into());

    let model = active
        .insert(db)
        .await
        .map_err(|e| AppError::from_write(e, || AppError::conflict(kind.label())))?;

    Ok(model.into())
}

/// Replace the name of an existing row
pub(crate) async fn rename_item<E, C>(
    db: &C,
    kind: Catalog,
    id: i32,
    name: String,
) -> AppResult<CatalogItem>
where
    E: CatalogEntity,
    E::Model: Into<CatalogItem> + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    let model = E::find()
        .filter(E::id_column().eq(id))
        .one(db)
        .await?
        .ok_or_not_found(kind.label())?;

    let mut active = model.into_active_model();
    active.set(E::name_column(), name.into());

    let model = active
        .update(db)
        .await
        .map_err(|e| AppError::from_write(e, || AppError::conflict(kind.label())))?;

    Ok(model.into())
}

/// Delete a row and return it as it was
pub(crate) async fn delete_item<E, C>(db: &C, kind: Catalog, id: i32) -> AppResult<CatalogItem>
where
    E: CatalogEntity,
    E::Model: Into<CatalogItem>,
    C: ConnectionTrait,
{
    let item = find_item::<E, C>(db, id)
        .await?
        .ok_or_not_found(kind.label())?;

    E::delete_many()
        .filter(E::id_column().eq(id))
        .exec(db)
        .await?;

    Ok(item)
}

// =============================================================================
// Favourite queries
// =============================================================================

fn attach(
    kind: Catalog,
    row: FavouriteRow,
    item: Option<CatalogItem>,
) -> AppResult<Favourite> {
    let item = item.ok_or_else(|| {
        AppError::internal(format!(
            "{} relation {} points at missing {} {}",
            kind.label(),
            row.id,
            kind.singular(),
            row.target_id
        ))
    })?;

    Ok(Favourite {
        id: row.id,
        user_id: row.user_id,
        kind,
        item,
    })
}

/// Relation rows of one user joined with their targets, in insertion order
pub(crate) async fn list_favourites<F, C>(
    db: &C,
    kind: Catalog,
    user_id: i32,
) -> AppResult<Vec<Favourite>>
where
    F: FavouriteEntity + Related<F::Target>,
    F::Model: Into<FavouriteRow>,
    <F::Target as EntityTrait>::Model: Into<CatalogItem>,
    C: ConnectionTrait,
{
    let rows = F::find()
        .filter(F::user_column().eq(user_id))
        .order_by_asc(F::id_column())
        .find_also_related(<F::Target as Default>::default())
        .all(db)
        .await?;

    rows.into_iter()
        .map(|(row, item)| attach(kind, row.into(), item.map(Into::into)))
        .collect()
}

/// Relation row for one `(user, target)` pair, joined with its target
pub(crate) async fn find_favourite<F, C>(
    db: &C,
    kind: Catalog,
    user_id: i32,
    target_id: i32,
) -> AppResult<Option<Favourite>>
where
    F: FavouriteEntity + Related<F::Target>,
    F::Model: Into<FavouriteRow>,
    <F::Target as EntityTrait>::Model: Into<CatalogItem>,
    C: ConnectionTrait,
{
    let found = F::find()
        .filter(F::user_column().eq(user_id))
        .filter(F::target_column().eq(target_id))
        .order_by_asc(F::id_column())
        .find_also_related(<F::Target as Default>::default())
        .one(db)
        .await?;

    found
        .map(|(row, item)| attach(kind, row.into(), item.map(Into::into)))
        .transpose()
}

/// Insert a relation row pointing at `item`
pub(crate) async fn insert_favourite<F, C>(
    db: &C,
    kind: Catalog,
    user_id: i32,
    item: CatalogItem,
) -> AppResult<Favourite>
where
    F: FavouriteEntity,
    F::Model: Into<FavouriteRow> + IntoActiveModel<F::ActiveModel>,
    F::ActiveModel: ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    let mut active = <F::ActiveModel as ActiveModelTrait>::default();
    active.set(F::user_column(), user_id.into());
    active.set(F::target_column(), item.id.into());

    let model = active.insert(db).await.map_err(|e| {
        AppError::from_write(e, || AppError::DuplicateFavourite(kind.label().to_string()))
    })?;

    attach(kind, model.into(), Some(item))
}

/// Delete a relation row by its own id
pub(crate) async fn delete_favourite<F, C>(db: &C, id: i32) -> AppResult<()>
where
    F: FavouriteEntity,
    C: ConnectionTrait,
{
    F::delete_many()
        .filter(F::id_column().eq(id))
        .exec(db)
        .await?;
    Ok(())
}
