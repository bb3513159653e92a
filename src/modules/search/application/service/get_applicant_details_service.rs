use async_trait::async_trait;
use tracing::{error, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Caller, UserRole};
use crate::modules::profile::application::domain::entities::ApplicantProfile;
use crate::modules::search::application::ports::incoming::use_cases::{
    GetApplicantDetailsError, GetApplicantDetailsUseCase,
};
use crate::modules::search::application::ports::outgoing::ApplicantSearchQuery;

pub struct GetApplicantDetailsService<Q>
where
    Q: ApplicantSearchQuery,
{
    query: Q,
}

impl<Q> GetApplicantDetailsService<Q>
where
    Q: ApplicantSearchQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetApplicantDetailsUseCase for GetApplicantDetailsService<Q>
where
    Q: ApplicantSearchQuery,
{
    async fn execute(
        &self,
        caller: Caller,
        applicant_id: Uuid,
    ) -> Result<ApplicantProfile, GetApplicantDetailsError> {
        if !caller.is(UserRole::Recruiter) {
            warn!(user_id = %caller.user_id, %applicant_id, "Applicant details denied");
            return Err(GetApplicantDetailsError::Forbidden);
        }

        self.query
            .find_by_id(applicant_id)
            .await
            .map_err(|e| {
                error!(%applicant_id, error = %e, "Failed to load applicant details");
                GetApplicantDetailsError::RepositoryError(e.to_string())
            })?
            .ok_or(GetApplicantDetailsError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::search::application::ports::outgoing::ApplicantSearchError;
    use crate::modules::search::application::service::test_mocks::MockSearchQuery;
    use crate::tests::support::profile_test_fixtures::sample_applicant_profile;

    #[tokio::test]
    async fn recruiter_sees_any_applicant() {
        let profile = sample_applicant_profile(Uuid::new_v4());
        let applicant_id = profile.id;
        let returned = profile.clone();

        let mut query = MockSearchQuery::new();
        query
            .expect_find_by_id()
            .withf(move |id| *id == applicant_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let result = GetApplicantDetailsService::new(query)
            .execute(Caller::new(Uuid::new_v4(), UserRole::Recruiter), applicant_id)
            .await
            .unwrap();

        assert_eq!(result, profile);
    }

    #[tokio::test]
    async fn applicant_caller_is_forbidden() {
        let mut query = MockSearchQuery::new();
        query.expect_find_by_id().never();

        let err = GetApplicantDetailsService::new(query)
            .execute(Caller::new(Uuid::new_v4(), UserRole::Applicant), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, GetApplicantDetailsError::Forbidden);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut query = MockSearchQuery::new();
        query.expect_find_by_id().returning(|_| Ok(None));

        let err = GetApplicantDetailsService::new(query)
            .execute(Caller::new(Uuid::new_v4(), UserRole::Recruiter), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, GetApplicantDetailsError::NotFound);
    }

    #[tokio::test]
    async fn query_failure_is_propagated() {
        let mut query = MockSearchQuery::new();
        query
            .expect_find_by_id()
            .returning(|_| Err(ApplicantSearchError::SerializationError("bad level".to_string())));

        let err = GetApplicantDetailsService::new(query)
            .execute(Caller::new(Uuid::new_v4(), UserRole::Recruiter), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, GetApplicantDetailsError::RepositoryError(_)));
    }
}
