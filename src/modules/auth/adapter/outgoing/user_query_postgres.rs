use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::user_query::{UserQueryError, UserQueryResult};
use crate::modules::auth::application::ports::outgoing::UserQuery;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_query_result(model: UserModel) -> Result<UserQueryResult, UserQueryError> {
        let role = model
            .role
            .parse::<UserRole>()
            .map_err(|e| UserQueryError::CorruptRecord(e.to_string()))?;

        Ok(UserQueryResult {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            role,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        })
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }
}
