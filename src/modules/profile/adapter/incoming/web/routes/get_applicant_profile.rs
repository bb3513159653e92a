use actix_web::{get, web, Responder};
use tracing::error;

use super::ProfileBody;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile/applicant")]
pub async fn get_applicant_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .get_applicant
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(profile) => ApiResponse::success(ProfileBody { profile }),

        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(GetProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to fetch applicant profile");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserRole;
    use crate::modules::profile::application::domain::entities::{
        ApplicantProfile, ProfileOwner,
    };
    use crate::modules::profile::application::ports::incoming::use_cases::GetApplicantProfileUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::profile_test_fixtures::sample_applicant_profile;

    #[derive(Clone)]
    struct MockGetApplicant {
        result: Result<ApplicantProfile, GetProfileError>,
    }

    #[async_trait]
    impl GetApplicantProfileUseCase for MockGetApplicant {
        async fn execute(&self, _user_id: UserId) -> Result<ApplicantProfile, GetProfileError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockGetApplicant, auth: Option<String>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_get_applicant_profile(mock)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_applicant_profile_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/api/profile/applicant");
        if let Some(h) = auth {
            req = req.insert_header(("Authorization", h));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_profile_with_work_experience_and_owner() {
        let uid = Uuid::new_v4();
        let mut profile = sample_applicant_profile(uid);
        profile.user = Some(ProfileOwner {
            email: "a@x.com".to_string(),
            role: Some(UserRole::Applicant),
            created_at: profile.created_at,
        });

        let (status, body) = call(
            MockGetApplicant { result: Ok(profile) },
            Some(bearer(uid, UserRole::Applicant)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let p = &body["data"]["profile"];
        assert_eq!(p["userId"], uid.to_string());
        assert_eq!(p["graduationYear"], 2024);
        assert_eq!(p["workExperience"][0]["companyName"], "Acme");
        assert_eq!(p["user"]["email"], "a@x.com");
        assert_eq!(p["user"]["role"], "applicant");
    }

    #[actix_web::test]
    async fn missing_profile_is_404() {
        let (status, body) = call(
            MockGetApplicant {
                result: Err(GetProfileError::NotFound),
            },
            Some(bearer(Uuid::new_v4(), UserRole::Recruiter)),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "PROFILE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn requires_a_token() {
        let (status, body) = call(
            MockGetApplicant {
                result: Err(GetProfileError::NotFound),
            },
            None,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "MISSING_AUTH_HEADER");
    }
}
