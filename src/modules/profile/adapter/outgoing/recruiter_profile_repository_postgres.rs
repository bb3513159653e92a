use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use super::mapping::{map_db_err, owner_from_model, recruiter_from_model, set_list, set_nullable};
use super::sea_orm_entity::recruiter_profiles::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profile::application::domain::entities::RecruiterProfile;
use crate::modules::profile::application::ports::outgoing::{
    PatchRecruiterProfileData, ProfileRepositoryError, RecruiterProfileRepository,
};
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct RecruiterProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecruiterProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecruiterProfileRepository for RecruiterProfileRepositoryPostgres {
    async fn find_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<RecruiterProfile>, ProfileRepositoryError> {
        let Some(profile) = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let owner = users::Entity::find_by_id(profile.user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|u| owner_from_model(u, true))
            .transpose()?;

        recruiter_from_model(profile, owner).map(Some)
    }

    async fn patch_by_user(
        &self,
        user_id: UserId,
        data: PatchRecruiterProfileData,
    ) -> Result<RecruiterProfile, ProfileRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        set_nullable(&mut model.first_name, data.first_name);
        set_nullable(&mut model.last_name, data.last_name);
        set_nullable(&mut model.phone_number, data.phone_number);
        set_nullable(&mut model.company, data.company);
        set_nullable(&mut model.position, data.position);
        set_nullable(&mut model.department, data.department);
        set_nullable(
            &mut model.company_size,
            match data.company_size {
                PatchField::Unset => PatchField::Unset,
                PatchField::Null => PatchField::Null,
                PatchField::Value(size) => PatchField::Value(size.as_str().to_string()),
            },
        );
        set_nullable(&mut model.industry, data.industry);
        set_nullable(&mut model.linkedin_url, data.linkedin_url);
        set_nullable(&mut model.company_url, data.company_url);
        set_list(&mut model.hiring_sectors, data.hiring_sectors)?;
        set_list(&mut model.experience_levels, data.experience_levels)?;
        set_nullable(&mut model.other, data.other);

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::UserId.eq(user_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ProfileRepositoryError::NotFound)?;

        recruiter_from_model(updated, None)
    }
}
