//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, User, UserPatch};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Create an active user
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Write the fields present in `patch`
    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<User>;

    /// Delete user, returning the removed row
    async fn delete_user(&self, id: i32) -> AppResult<User>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        crate::with_transaction!(self.uow, |ctx| ctx.users().list().await)
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        crate::with_transaction!(self.uow, |ctx| ctx.users().get(id).await)
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let user = crate::with_transaction!(self.uow, |ctx| ctx.users().create(new_user).await)?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<User> {
        crate::with_transaction!(self.uow, |ctx| ctx.users().update(id, patch).await)
    }

    async fn delete_user(&self, id: i32) -> AppResult<User> {
        let user = crate::with_transaction!(self.uow, |ctx| ctx.users().delete(id).await)?;
        tracing::info!(user_id = id, "User deleted");
        Ok(user)
    }
}
