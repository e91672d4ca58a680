//! Service tests against a migrated in-memory database.

use std::sync::Arc;

use starwars_api::domain::{Catalog, NewUser, UserPatch};
use starwars_api::errors::AppError;
use starwars_api::infra::{Database, Persistence, UnitOfWork};
use starwars_api::services::{
    CatalogManager, CatalogService, FavouriteManager, FavouriteService, UserManager, UserService,
};
use starwars_api::Config;

struct Fixture {
    uow: Arc<Persistence>,
    users: UserManager<Persistence>,
    catalog: CatalogManager<Persistence>,
    favourites: FavouriteManager<Persistence>,
}

async fn fixture() -> Fixture {
    let db = Database::connect(&Config::with_database_url("sqlite::memory:"))
        .await
        .unwrap();
    let uow = Arc::new(Persistence::new(db.get_connection()));

    Fixture {
        users: UserManager::new(uow.clone()),
        catalog: CatalogManager::new(uow.clone()),
        favourites: FavouriteManager::new(uow.clone()),
        uow,
    }
}

fn luke() -> NewUser {
    NewUser {
        email: "luke@tatooine.org".to_string(),
        password: "x".to_string(),
    }
}

#[tokio::test]
async fn create_then_get_returns_equal_value() {
    let f = fixture().await;

    let created = f.users.create_user(luke()).await.unwrap();
    assert!(created.is_active);
    assert_eq!(f.users.get_user(created.id).await.unwrap(), created);

    let film = f
        .catalog
        .create(Catalog::Film, "Return of the Jedi".to_string())
        .await
        .unwrap();
    assert_eq!(f.catalog.get(Catalog::Film, film.id).await.unwrap(), film);
}

#[tokio::test]
async fn second_creation_with_same_key_is_a_conflict() {
    let f = fixture().await;

    f.users.create_user(luke()).await.unwrap();
    let err = f.users.create_user(luke()).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    f.catalog
        .create(Catalog::Species, "Hutt".to_string())
        .await
        .unwrap();
    let err = f
        .catalog
        .create(Catalog::Species, "Hutt".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Same name in another collection is fine
    f.catalog
        .create(Catalog::Planet, "Hutt".to_string())
        .await
        .unwrap();
}

#[tokio::test]
async fn empty_patch_leaves_user_untouched() {
    let f = fixture().await;
    let user = f.users.create_user(luke()).await.unwrap();

    let updated = f
        .users
        .update_user(user.id, UserPatch::default())
        .await
        .unwrap();
    assert_eq!(updated, user);
}

#[tokio::test]
async fn failed_update_rolls_back() {
    let f = fixture().await;
    let first = f.users.create_user(luke()).await.unwrap();
    let second = f
        .users
        .create_user(NewUser {
            email: "leia@alderaan.org".to_string(),
            password: "y".to_string(),
        })
        .await
        .unwrap();

    let err = f
        .users
        .update_user(
            second.id,
            UserPatch {
                email: Some(first.email.clone()),
                password: Some("changed".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    assert_eq!(f.users.get_user(second.id).await.unwrap(), second);
}

#[tokio::test]
async fn add_checks_user_before_target() {
    let f = fixture().await;

    let err = f.favourites.add(1, Catalog::Film, 1).await.unwrap_err();
    assert_eq!(err.to_string(), "User not found");

    let user = f.users.create_user(luke()).await.unwrap();
    let err = f.favourites.add(user.id, Catalog::Film, 1).await.unwrap_err();
    assert_eq!(err.to_string(), "Film not found");
}

#[tokio::test]
async fn adding_twice_keeps_one_row() {
    let f = fixture().await;
    let user = f.users.create_user(luke()).await.unwrap();
    let planet = f
        .catalog
        .create(Catalog::Planet, "Dagobah".to_string())
        .await
        .unwrap();

    let favourite = f
        .favourites
        .add(user.id, Catalog::Planet, planet.id)
        .await
        .unwrap();
    assert_eq!(favourite.user_id, user.id);
    assert_eq!(favourite.item, planet);

    let err = f
        .favourites
        .add(user.id, Catalog::Planet, planet.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateFavourite(_)));

    let items = f.favourites.list(user.id, Catalog::Planet).await.unwrap();
    assert_eq!(items, vec![planet]);
}

#[tokio::test]
async fn unique_index_rejects_a_second_raw_insert() {
    let f = fixture().await;
    let user = f.users.create_user(luke()).await.unwrap();
    let film = f
        .catalog
        .create(Catalog::Film, "The Phantom Menace".to_string())
        .await
        .unwrap();

    // Skips the service's existence check, as a concurrent add would
    let user_id = user.id;
    let target = film.clone();
    let result = starwars_api::with_transaction!(f.uow, |ctx| {
        let favourites = ctx.favourites(Catalog::Film);
        favourites.insert(user_id, target.clone()).await?;
        favourites.insert(user_id, target).await
    });

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::DuplicateFavourite(_)));
    assert_eq!(err.to_string(), "Film is already in favourites");

    // The failed transaction is rolled back as a whole
    assert!(f.favourites.list(user.id, Catalog::Film).await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_then_get_is_not_found() {
    let f = fixture().await;
    let user = f.users.create_user(luke()).await.unwrap();
    let character = f
        .catalog
        .create(Catalog::Character, "Han Solo".to_string())
        .await
        .unwrap();

    f.favourites
        .add(user.id, Catalog::Character, character.id)
        .await
        .unwrap();
    let found = f
        .favourites
        .get(user.id, Catalog::Character, character.id)
        .await
        .unwrap();
    assert_eq!(found.item, character);

    let remaining = f
        .favourites
        .remove(user.id, Catalog::Character, character.id)
        .await
        .unwrap();
    assert!(remaining.is_empty());

    let err = f
        .favourites
        .get(user.id, Catalog::Character, character.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::FavouriteNotFound(_)));

    let err = f
        .favourites
        .remove(user.id, Catalog::Character, character.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::FavouriteNotFound(_)));
}

#[tokio::test]
async fn user_without_relations_has_empty_lists() {
    let f = fixture().await;
    let user = f.users.create_user(luke()).await.unwrap();

    for kind in Catalog::ALL {
        assert!(f.favourites.list(user.id, kind).await.unwrap().is_empty());
    }
    assert!(f.favourites.summary(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_user_or_target_cascades_to_favourites() {
    let f = fixture().await;
    let user = f.users.create_user(luke()).await.unwrap();
    let film = f
        .catalog
        .create(Catalog::Film, "A New Hope".to_string())
        .await
        .unwrap();
    let species = f
        .catalog
        .create(Catalog::Species, "Wookiee".to_string())
        .await
        .unwrap();

    f.favourites.add(user.id, Catalog::Film, film.id).await.unwrap();
    f.favourites
        .add(user.id, Catalog::Species, species.id)
        .await
        .unwrap();

    f.catalog.delete(Catalog::Film, film.id).await.unwrap();
    let summary = f.favourites.summary(user.id).await.unwrap();
    assert!(summary.films.is_empty());
    assert_eq!(summary.species, vec![species.clone()]);

    // A recreated user may get the freed id; no rows may survive the delete
    f.users.delete_user(user.id).await.unwrap();
    let again = f.users.create_user(luke()).await.unwrap();
    assert!(f.favourites.summary(again.id).await.unwrap().is_empty());
}
