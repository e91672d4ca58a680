//! Transaction-bound user repository.

use sea_orm::{ActiveModelTrait, DatabaseTransaction, EntityTrait, QueryOrder, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User, UserPatch};
use crate::errors::{AppError, AppResult, OptionExt};

const ENTITY: &str = "User";

/// User repository executing every statement inside the borrowed transaction.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    /// Create new transaction-aware repository
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// List all users in insertion order
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(self.txn)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(self.txn).await?;
        Ok(result.map(User::from))
    }

    /// Find user by ID, failing with `NotFound` when absent
    pub async fn get(&self, id: i32) -> AppResult<User> {
        self.find_by_id(id).await?.ok_or_not_found(ENTITY)
    }

    /// Create a new active user; a taken email is a conflict
    pub async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            email: Set(new_user.email),
            password: Set(new_user.password),
            is_active: Set(true),
            ..Default::default()
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(|e| AppError::from_write(e, || AppError::conflict(ENTITY)))?;

        Ok(User::from(model))
    }

    /// Write the fields present in `patch`
    pub async fn update(&self, id: i32, patch: UserPatch) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(self.txn)
            .await?
            .ok_or_not_found(ENTITY)?;

        if patch.is_empty() {
            return Ok(User::from(model));
        }

        let mut active: ActiveModel = model.into();
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(password) = patch.password {
            active.password = Set(password);
        }

        let model = active
            .update(self.txn)
            .await
            .map_err(|e| AppError::from_write(e, || AppError::conflict(ENTITY)))?;

        Ok(User::from(model))
    }

    /// Delete user and return the removed row
    pub async fn delete(&self, id: i32) -> AppResult<User> {
        let user = self.get(id).await?;

        UserEntity::delete_by_id(id).exec(self.txn).await?;

        Ok(user)
    }
}
