use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::{Caller, UserRole};
use crate::modules::search::application::domain::{ApplicantSearchParams, PaginationMeta};
use crate::modules::search::application::ports::incoming::use_cases::{
    ApplicantSearchResult, SearchApplicantsError, SearchApplicantsUseCase,
};
use crate::modules::search::application::ports::outgoing::ApplicantSearchQuery;

pub struct SearchApplicantsService<Q>
where
    Q: ApplicantSearchQuery,
{
    query: Q,
}

impl<Q> SearchApplicantsService<Q>
where
    Q: ApplicantSearchQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SearchApplicantsUseCase for SearchApplicantsService<Q>
where
    Q: ApplicantSearchQuery,
{
    async fn execute(
        &self,
        caller: Caller,
        query: Vec<(String, String)>,
    ) -> Result<ApplicantSearchResult, SearchApplicantsError> {
        if !caller.is(UserRole::Recruiter) {
            warn!(user_id = %caller.user_id, role = %caller.role, "Search denied");
            return Err(SearchApplicantsError::Forbidden);
        }

        let params = ApplicantSearchParams::from_pairs(query)
            .map_err(|e| SearchApplicantsError::InvalidParams(e.to_string()))?;

        let page = self
            .query
            .search(&params.filter, params.page)
            .await
            .map_err(|e| {
                error!(user_id = %caller.user_id, error = %e, "Applicant search failed");
                SearchApplicantsError::RepositoryError(e.to_string())
            })?;

        let pagination = PaginationMeta::new(params.page, page.total_count);

        info!(
            user_id = %caller.user_id,
            returned = page.applicants.len(),
            total = page.total_count,
            page = pagination.current_page,
            "Applicant search completed"
        );

        Ok(ApplicantSearchResult {
            applicants: page.applicants,
            pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::modules::profile::application::domain::entities::ExperienceLevel;
    use crate::modules::search::application::domain::{ApplicantSearchFilter, SearchPage};
    use crate::modules::search::application::ports::outgoing::{
        ApplicantSearchError, ApplicantSearchPage,
    };
    use crate::modules::search::application::service::test_mocks::MockSearchQuery;
    use crate::tests::support::profile_test_fixtures::sample_applicant_profile;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn recruiter() -> Caller {
        Caller::new(Uuid::new_v4(), UserRole::Recruiter)
    }

    #[tokio::test]
    async fn parsed_filter_and_page_reach_the_query() {
        let profile = sample_applicant_profile(Uuid::new_v4());
        let returned = profile.clone();

        let mut query = MockSearchQuery::new();
        query
            .expect_search()
            .withf(|filter: &ApplicantSearchFilter, page: &SearchPage| {
                filter.experience_level == Some(ExperienceLevel::Junior)
                    && filter.skills == vec!["Rust".to_string(), "Go".to_string()]
                    && *page == SearchPage::new(Some(2), Some(1))
            })
            .times(1)
            .returning(move |_, _| {
                Ok(ApplicantSearchPage {
                    applicants: vec![returned.clone()],
                    total_count: 3,
                })
            });

        let result = SearchApplicantsService::new(query)
            .execute(
                recruiter(),
                pairs(&[
                    ("experienceLevel", "junior"),
                    ("skills", "Rust"),
                    ("skills[]", "Go"),
                    ("page", "2"),
                    ("limit", "1"),
                ]),
            )
            .await
            .unwrap();

        assert_eq!(result.applicants, vec![profile]);
        assert_eq!(
            result.pagination,
            PaginationMeta {
                current_page: 2,
                total_pages: 3,
                total_count: 3,
                has_next_page: true,
                has_prev_page: true,
                limit: 1,
            }
        );
    }

    #[tokio::test]
    async fn applicant_is_forbidden_before_any_parsing_or_query() {
        let mut query = MockSearchQuery::new();
        query.expect_search().never();

        let err = SearchApplicantsService::new(query)
            .execute(
                Caller::new(Uuid::new_v4(), UserRole::Applicant),
                pairs(&[("graduationYear", "not-a-year")]),
            )
            .await
            .unwrap_err();

        assert_eq!(err, SearchApplicantsError::Forbidden);
    }

    #[tokio::test]
    async fn invalid_parameters_never_reach_the_query() {
        let mut query = MockSearchQuery::new();
        query.expect_search().never();

        let err = SearchApplicantsService::new(query)
            .execute(recruiter(), pairs(&[("minGpa", "abc")]))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SearchApplicantsError::InvalidParams("minGpa must be a number, got: abc".to_string())
        );
    }

    #[tokio::test]
    async fn query_failure_is_a_repository_error() {
        let mut query = MockSearchQuery::new();
        query
            .expect_search()
            .returning(|_, _| Err(ApplicantSearchError::DatabaseError("timeout".to_string())));

        let err = SearchApplicantsService::new(query)
            .execute(recruiter(), vec![])
            .await
            .unwrap_err();

        assert!(matches!(err, SearchApplicantsError::RepositoryError(msg) if msg.contains("timeout")));
    }
}
