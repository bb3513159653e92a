use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use super::{work_experience_error_response, MessageBody};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/profile/applicant/work-experience/{experience_id}")]
pub async fn delete_work_experience_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let experience_id = path.into_inner();

    match data
        .profile
        .delete_work_experience
        .execute(user.caller(), experience_id)
        .await
    {
        Ok(()) => {
            info!(
                user_id = %user.user_id,
                work_experience_id = %experience_id,
                "Work experience deleted"
            );
            ApiResponse::success(MessageBody {
                message: "Work experience deleted successfully",
            })
        }
        Err(e) => work_experience_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::auth::application::domain::entities::{Caller, UserRole};
    use crate::modules::profile::application::ports::incoming::use_cases::{
        DeleteWorkExperienceUseCase, WorkExperienceError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};

    #[derive(Clone)]
    struct MockDeleteWorkExperience {
        result: Result<(), WorkExperienceError>,
    }

    #[async_trait]
    impl DeleteWorkExperienceUseCase for MockDeleteWorkExperience {
        async fn execute(
            &self,
            _caller: Caller,
            _experience_id: Uuid,
        ) -> Result<(), WorkExperienceError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockDeleteWorkExperience) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_delete_work_experience(mock)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_work_experience_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!(
                "/api/profile/applicant/work-experience/{}",
                Uuid::new_v4()
            ))
            .insert_header(("Authorization", bearer(Uuid::new_v4(), UserRole::Applicant)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn delete_confirms_with_message() {
        let (status, body) = call(MockDeleteWorkExperience { result: Ok(()) }).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["message"], "Work experience deleted successfully");
    }

    #[actix_web::test]
    async fn unknown_entry_is_404() {
        let (status, body) = call(MockDeleteWorkExperience {
            result: Err(WorkExperienceError::NotFound),
        })
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "WORK_EXPERIENCE_NOT_FOUND");
        assert_eq!(body["message"], "Work experience not found");
    }
}
