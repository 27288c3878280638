//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::users::{
        data::NewUser,
        errors::UsersServiceError,
        records::{UserRecord, UserUuid},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    #[tracing::instrument(
        name = "users.service.create_user",
        skip(self, user),
        fields(user_uuid = %user.uuid),
        err
    )]
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    #[tracing::instrument(
        name = "users.service.update_preferences",
        skip(self, preferences),
        fields(user_uuid = %user),
        err
    )]
    async fn update_preferences(
        &self,
        user: UserUuid,
        preferences: Option<String>,
    ) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_preferences(&mut tx, user, preferences)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

/// Customers placing orders. Guests are identified only by mobile number.
#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Registers a user.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Replaces the user's free-text ordering preferences.
    async fn update_preferences(
        &self,
        user: UserUuid,
        preferences: Option<String>,
    ) -> Result<UserRecord, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers};

    use super::*;

    #[tokio::test]
    async fn create_user_defaults_preferences_to_none() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = UserUuid::new();

        let user = ctx
            .users
            .create_user(NewUser {
                uuid,
                mobile_number: "5550100".to_string(),
                name: Some("Ada".to_string()),
                is_guest: false,
            })
            .await?;

        assert_eq!(user.uuid, uuid);
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert!(!user.is_guest);
        assert!(user.preferences.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_user_with_taken_mobile_number_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        helpers::create_user(&ctx, "5550101").await?;

        let result = helpers::create_user(&ctx, "5550101").await;

        assert!(
            matches!(result, Err(UsersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_user_with_overlong_mobile_number_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = helpers::create_user(&ctx, "5550101555010155501").await;

        assert!(
            matches!(result, Err(UsersServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_user_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.users.get_user(UserUuid::new()).await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_preferences_replaces_value() -> TestResult {
        let ctx = TestContext::new().await;
        let user = helpers::create_user(&ctx, "5550102").await?;

        ctx.users
            .update_preferences(user.uuid, Some("no onions".to_string()))
            .await?;

        let fetched = ctx.users.get_user(user.uuid).await?;

        assert_eq!(fetched.preferences.as_deref(), Some("no onions"));
        assert!(fetched.updated_at >= user.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_preferences_unknown_user_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .users
            .update_preferences(UserUuid::new(), Some("vegan".to_string()))
            .await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
