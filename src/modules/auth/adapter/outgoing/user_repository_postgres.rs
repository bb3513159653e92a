use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::user_repository::{CreateUserData, UserResult};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    applicant_profiles, recruiter_profiles,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_err(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    /// Every role owns exactly one empty profile row from the moment it signs up.
    async fn insert_empty_profile(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<(), DbErr> {
        match role {
            UserRole::Applicant => {
                let profile = applicant_profiles::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    ..Default::default()
                };
                applicant_profiles::Entity::insert(profile)
                    .exec_without_returning(txn)
                    .await?;
            }
            UserRole::Recruiter => {
                let profile = recruiter_profiles::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    ..Default::default()
                };
                recruiter_profiles::Entity::insert(profile)
                    .exec_without_returning(txn)
                    .await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user_with_profile(
        &self,
        data: CreateUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_err)?;

        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        // Dropping the transaction on an early return rolls it back.
        let inserted = active_user.insert(&txn).await.map_err(Self::map_err)?;

        Self::insert_empty_profile(&txn, inserted.id, data.role)
            .await
            .map_err(Self::map_err)?;

        txn.commit().await.map_err(Self::map_err)?;

        debug!(user_id = %inserted.id, role = %data.role, "User and profile created");

        Ok(UserResult {
            id: inserted.id,
            email: inserted.email,
            role: data.role,
            created_at: inserted.created_at.with_timezone(&chrono::Utc),
        })
    }
}
