// src/modules/search/adapter/outgoing/applicant_search_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profile::adapter::outgoing::mapping::{applicant_from_model, owner_from_model};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::applicant_profiles::{
    self, Column, Entity,
};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::work_experiences;
use crate::modules::profile::application::domain::entities::ApplicantProfile;
use crate::modules::profile::application::ports::outgoing::ProfileRepositoryError;
use crate::modules::search::application::domain::{ApplicantSearchFilter, SearchPage};
use crate::modules::search::application::ports::outgoing::{
    ApplicantSearchError, ApplicantSearchPage, ApplicantSearchQuery,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ApplicantSearchQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ApplicantSearchQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attaches work experience (newest first) and the owner projection
    /// to each profile, keeping the input order.
    async fn hydrate(
        &self,
        profiles: Vec<applicant_profiles::Model>,
    ) -> Result<Vec<ApplicantProfile>, ApplicantSearchError> {
        if profiles.is_empty() {
            return Ok(Vec::new());
        }

        let profile_ids: Vec<Uuid> = profiles.iter().map(|p| p.id).collect();
        let user_ids: Vec<Uuid> = profiles.iter().map(|p| p.user_id).collect();

        let mut work_by_profile: HashMap<Uuid, Vec<work_experiences::Model>> = HashMap::new();
        for work in work_experiences::Entity::find()
            .filter(work_experiences::Column::ApplicantProfileId.is_in(profile_ids))
            .order_by_desc(work_experiences::Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            work_by_profile
                .entry(work.applicant_profile_id)
                .or_default()
                .push(work);
        }

        let owners: HashMap<Uuid, users::Model> = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        profiles
            .into_iter()
            .map(|profile| {
                let work = work_by_profile.remove(&profile.id).unwrap_or_default();
                let owner = owners
                    .get(&profile.user_id)
                    .cloned()
                    .map(|u| owner_from_model(u, false))
                    .transpose()
                    .map_err(map_profile_err)?;

                applicant_from_model(profile, work, owner).map_err(map_profile_err)
            })
            .collect()
    }
}

#[async_trait]
impl ApplicantSearchQuery for ApplicantSearchQueryPostgres {
    async fn search(
        &self,
        filter: &ApplicantSearchFilter,
        page: SearchPage,
    ) -> Result<ApplicantSearchPage, ApplicantSearchError> {
        let condition = build_condition(filter);

        let matching_page = page_query(condition.clone(), page).all(&*self.db);
        let matching_count = Entity::find().filter(condition).count(&*self.db);

        let (profiles, total_count) =
            tokio::try_join!(matching_page, matching_count).map_err(map_db_err)?;

        Ok(ApplicantSearchPage {
            applicants: self.hydrate(profiles).await?,
            total_count,
        })
    }

    async fn find_by_id(
        &self,
        applicant_id: Uuid,
    ) -> Result<Option<ApplicantProfile>, ApplicantSearchError> {
        let Some(profile) = Entity::find_by_id(applicant_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![profile]).await?.pop())
    }
}

// ============================================================================
// Predicate composition
// ============================================================================

/// AND of one clause per supplied filter field. An empty filter yields an
/// empty condition, which matches every profile.
pub fn build_condition(filter: &ApplicantSearchFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(year) = filter.graduation_year {
        condition = condition.add(Column::GraduationYear.eq(year));
    }
    if let Some(major) = &filter.major {
        condition = condition.add(contains_insensitive(Column::Major, major));
    }
    if let Some(university) = &filter.university {
        condition = condition.add(contains_insensitive(Column::University, university));
    }
    if let Some(level) = filter.experience_level {
        condition = condition.add(Column::ExperienceLevel.eq(level.as_str()));
    }
    if let Some(min) = filter.min_gpa {
        condition = condition.add(Column::Gpa.gte(min));
    }
    if let Some(max) = filter.max_gpa {
        condition = condition.add(Column::Gpa.lte(max));
    }
    if !filter.skills.is_empty() {
        condition = condition.add(holds_any(Column::Skills, &filter.skills));
    }
    if !filter.preferred_locations.is_empty() {
        condition = condition.add(holds_any(
            Column::PreferredLocations,
            &filter.preferred_locations,
        ));
    }

    condition
}

fn page_query(condition: Condition, page: SearchPage) -> Select<Entity> {
    Entity::find()
        .filter(condition)
        .order_by_desc(Column::UpdatedAt)
        .order_by_desc(Column::CreatedAt)
        .offset(page.offset())
        .limit(page.limit())
}

fn contains_insensitive(column: Column, needle: &str) -> SimpleExpr {
    Expr::col(column).ilike(format!("%{}%", escape_like(needle)))
}

/// JSONB array column shares at least one element with `values`.
fn holds_any(column: Column, values: &[String]) -> Condition {
    values.iter().fold(Condition::any(), |any, value| {
        any.add(Expr::col(column).contains(Expr::val(json!([value]))))
    })
}

/// Backslash is the default LIKE escape character in Postgres.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn map_db_err(e: DbErr) -> ApplicantSearchError {
    ApplicantSearchError::DatabaseError(e.to_string())
}

fn map_profile_err(e: ProfileRepositoryError) -> ApplicantSearchError {
    match e {
        ProfileRepositoryError::DatabaseError(msg) => ApplicantSearchError::DatabaseError(msg),
        other => ApplicantSearchError::SerializationError(other.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
