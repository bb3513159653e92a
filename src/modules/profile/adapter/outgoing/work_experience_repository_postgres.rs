use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QuerySelect, RelationTrait, Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::mapping::{map_db_err, work_experience_from_model};
use super::sea_orm_entity::applicant_profiles;
use super::sea_orm_entity::work_experiences::{self, ActiveModel, Entity, Relation};
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::WorkExperience;
use crate::modules::profile::application::domain::work_experience::WorkExperienceInput;
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepositoryError, WorkExperienceRepository,
};

#[derive(Clone)]
pub struct WorkExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WorkExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_owned(
        &self,
        owner: UserId,
        experience_id: Uuid,
    ) -> Result<work_experiences::Model, ProfileRepositoryError> {
        owned(owner, experience_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProfileRepositoryError::NotFound)
    }
}

/// `id == experience_id AND applicant_profiles.user_id == owner`
fn owned(owner: UserId, experience_id: Uuid) -> Select<Entity> {
    Entity::find_by_id(experience_id)
        .join(JoinType::InnerJoin, Relation::ApplicantProfiles.def())
        .filter(applicant_profiles::Column::UserId.eq(owner.value()))
}

#[async_trait]
impl WorkExperienceRepository for WorkExperienceRepositoryPostgres {
    async fn create(
        &self,
        applicant_profile_id: Uuid,
        input: WorkExperienceInput,
    ) -> Result<WorkExperience, ProfileRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            applicant_profile_id: Set(applicant_profile_id),
            company_name: Set(input.company_name),
            location: Set(input.location),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            role_description: Set(input.role_description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(work_experience_from_model(inserted))
    }

    async fn update_owned(
        &self,
        owner: UserId,
        experience_id: Uuid,
        input: WorkExperienceInput,
    ) -> Result<WorkExperience, ProfileRepositoryError> {
        let existing = self.find_owned(owner, experience_id).await?;

        let mut model: ActiveModel = existing.into();
        model.company_name = Set(input.company_name);
        model.location = Set(input.location);
        model.start_date = Set(input.start_date);
        model.end_date = Set(input.end_date);
        model.role_description = Set(input.role_description);
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(work_experience_from_model(updated))
    }

    async fn delete_owned(
        &self,
        owner: UserId,
        experience_id: Uuid,
    ) -> Result<(), ProfileRepositoryError> {
        let existing = self.find_owned(owner, experience_id).await?;

        let result = Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

    use crate::modules::profile::adapter::outgoing::mapping::test_models::work_model;

    fn input() -> WorkExperienceInput {
        WorkExperienceInput {
            company_name: "Globex".to_string(),
            location: Some("Remote".to_string()),
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2022, 6, 30),
            role_description: None,
        }
    }

    #[tokio::test]
    async fn create_inserts_under_profile() {
        let pid = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![work_model(Uuid::new_v4(), pid, (2021, 1, 1))]])
            .into_connection();

        let repo = WorkExperienceRepositoryPostgres::new(Arc::new(db));
        let created = repo.create(pid, input()).await.unwrap();

        assert_eq!(created.applicant_profile_id, pid);
    }

    #[tokio::test]
    async fn update_replaces_editable_fields() {
        let owner = Uuid::new_v4();
        let exp_id = Uuid::new_v4();
        let pid = Uuid::new_v4();

        let mut after = work_model(exp_id, pid, (2021, 1, 1));
        after.company_name = "Globex".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![work_model(exp_id, pid, (2019, 1, 1))]])
            .append_query_results(vec![vec![after]])
            .into_connection();

        let repo = WorkExperienceRepositoryPostgres::new(Arc::new(db));
        let updated = repo
            .update_owned(UserId::from(owner), exp_id, input())
            .await
            .unwrap();

        assert_eq!(updated.company_name, "Globex");
    }

    #[test]
    fn ownership_is_part_of_the_lookup() {
        let owner = Uuid::new_v4();
        let sql = owned(UserId::from(owner), Uuid::new_v4())
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"INNER JOIN "applicant_profiles""#), "{}", sql);
        assert!(
            sql.contains(&format!(r#""applicant_profiles"."user_id" = '{}'"#, owner)),
            "{}",
            sql
        );
    }

    #[tokio::test]
    async fn update_of_foreign_record_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<work_experiences::Model>::new()])
            .into_connection();

        let repo = WorkExperienceRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_owned(UserId::from(Uuid::new_v4()), Uuid::new_v4(), input())
            .await;

        assert_eq!(result.unwrap_err(), ProfileRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn delete_removes_owned_record() {
        let exp_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![work_model(exp_id, Uuid::new_v4(), (2020, 1, 1))]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = WorkExperienceRepositoryPostgres::new(Arc::new(db));
        assert_eq!(
            repo.delete_owned(UserId::from(Uuid::new_v4()), exp_id).await,
            Ok(())
        );
    }

    #[tokio::test]
    async fn delete_of_missing_record_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<work_experiences::Model>::new()])
            .into_connection();

        let repo = WorkExperienceRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .delete_owned(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert_eq!(result, Err(ProfileRepositoryError::NotFound));
    }
}
