use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::mapping::{
    applicant_from_model, map_db_err, owner_from_model, set_list, set_nullable,
};
use super::sea_orm_entity::applicant_profiles::{ActiveModel, Column, Entity};
use super::sea_orm_entity::work_experiences;
use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profile::application::domain::entities::ApplicantProfile;
use crate::modules::profile::application::ports::outgoing::{
    ApplicantProfileRepository, PatchApplicantProfileData, ProfileRepositoryError,
};
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct ApplicantProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ApplicantProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn work_experience_of(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<work_experiences::Model>, ProfileRepositoryError> {
        work_experiences::Entity::find()
            .filter(work_experiences::Column::ApplicantProfileId.eq(profile_id))
            .order_by_desc(work_experiences::Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl ApplicantProfileRepository for ApplicantProfileRepositoryPostgres {
    async fn find_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<ApplicantProfile>, ProfileRepositoryError> {
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

        let work = self.work_experience_of(profile.id).await?;

        applicant_from_model(profile, work, owner).map(Some)
    }

    async fn find_id_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Uuid>, ProfileRepositoryError> {
        Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .select_only()
            .column(Column::Id)
            .into_tuple::<Uuid>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn patch_by_user(
        &self,
        user_id: UserId,
        data: PatchApplicantProfileData,
    ) -> Result<ApplicantProfile, ProfileRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        set_nullable(&mut model.first_name, data.first_name);
        set_nullable(&mut model.last_name, data.last_name);
        set_nullable(&mut model.phone_number, data.phone_number);
        set_nullable(&mut model.university, data.university);
        set_nullable(&mut model.major, data.major);
        set_nullable(&mut model.graduation_year, data.graduation_year);
        set_nullable(&mut model.gpa, data.gpa);
        set_nullable(&mut model.portfolio_url, data.portfolio_url);
        set_nullable(&mut model.linkedin_url, data.linkedin_url);
        set_nullable(&mut model.github_url, data.github_url);
        set_list(&mut model.skills, data.skills)?;
        set_list(&mut model.interests, data.interests)?;
        set_nullable(
            &mut model.experience_level,
            match data.experience_level {
                PatchField::Unset => PatchField::Unset,
                PatchField::Null => PatchField::Null,
                PatchField::Value(level) => PatchField::Value(level.as_str().to_string()),
            },
        );
        set_list(&mut model.preferred_locations, data.preferred_locations)?;
        set_nullable(&mut model.salary_expectation, data.salary_expectation);
        set_nullable(&mut model.availability, data.availability);
        set_nullable(&mut model.other, data.other);

        // Always touched, so an empty patch still returns the current row.
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

        let work = self.work_experience_of(updated.id).await?;

        applicant_from_model(updated, work, None)
    }
}
