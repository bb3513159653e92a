use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    SignupError, SignupRequest, SignupResult, SignupUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct SignupUserService<Q, R, H>
where
    Q: UserQuery,
    R: UserRepository,
    H: PasswordHasher,
{
    user_query: Q,
    user_repository: R,
    password_hasher: H,
}

impl<Q, R, H> SignupUserService<Q, R, H>
where
    Q: UserQuery,
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_query: Q, user_repository: R, password_hasher: H) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R, H> SignupUserUseCase for SignupUserService<Q, R, H>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, request: SignupRequest) -> Result<SignupResult, SignupError> {
        let existing = self
            .user_query
            .find_by_email(request.email())
            .await
            .map_err(|e| SignupError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            warn!("Signup rejected: email already registered");
            return Err(SignupError::UserAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| SignupError::HashingFailed(e.to_string()))?;

        // A concurrent signup can still win the race; the unique index catches it.
        let created = self
            .user_repository
            .create_user_with_profile(CreateUserData {
                email: request.email().to_string(),
                password_hash,
                role: request.role(),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => SignupError::UserAlreadyExists,
                UserRepositoryError::DatabaseError(msg) => SignupError::RepositoryError(msg),
            })?;

        info!(user_id = %created.id, role = %created.role, "User signed up");

        Ok(SignupResult {
            user_id: created.id,
            email: created.email,
            role: created.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::outgoing::{
        HashError, UserQueryError, UserQueryResult, UserResult,
    };

    mock! {
        pub Query {}
        #[async_trait]
        impl UserQuery for Query {
            async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
        }
    }

    mock! {
        pub Repo {}
        #[async_trait]
        impl UserRepository for Repo {
            async fn create_user_with_profile(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;
        }
    }

    mock! {
        pub Hasher {}
        #[async_trait]
        impl PasswordHasher for Hasher {
            async fn hash_password(&self, password: &str) -> Result<String, HashError>;
            async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
        }
    }

    fn request(role: &str) -> SignupRequest {
        SignupRequest::new(
            Some("A@X.com".to_string()),
            Some("pw123456".to_string()),
            Some(role.to_string()),
        )
        .unwrap()
    }

    fn empty_query() -> MockQuery {
        let mut query = MockQuery::new();
        query
            .expect_find_by_email()
            .withf(|email: &str| email == "a@x.com")
            .times(1)
            .returning(|_| Ok(None));
        query
    }

    fn hasher() -> MockHasher {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash_password()
            .returning(|_| Ok("hashed".to_string()));
        hasher
    }

    // =====================================================
    // Success
    // =====================================================

    #[tokio::test]
    async fn creates_user_with_hashed_password_and_role() {
        let user_id = Uuid::new_v4();

        let mut repo = MockRepo::new();
        repo.expect_create_user_with_profile()
            .withf(|data: &CreateUserData| {
                data.email == "a@x.com"
                    && data.password_hash == "hashed"
                    && data.role == UserRole::Recruiter
            })
            .times(1)
            .returning(move |data| {
                Ok(UserResult {
                    id: user_id,
                    email: data.email,
                    role: data.role,
                    created_at: Utc::now(),
                })
            });

        let service = SignupUserService::new(empty_query(), repo, hasher());
        let result = service.execute(request("recruiter")).await.unwrap();

        assert_eq!(result.user_id, user_id);
        assert_eq!(result.email, "a@x.com");
        assert_eq!(result.role, UserRole::Recruiter);
    }

    // =====================================================
    // Error mapping
    // =====================================================

    #[tokio::test]
    async fn existing_email_short_circuits_before_hashing() {
        let mut query = MockQuery::new();
        query.expect_find_by_email().returning(|_| {
            Ok(Some(UserQueryResult {
                id: Uuid::new_v4(),
                email: "a@x.com".to_string(),
                password_hash: "h".to_string(),
                role: UserRole::Applicant,
                created_at: Utc::now(),
            }))
        });

        let mut hasher = MockHasher::new();
        hasher.expect_hash_password().never();

        let mut repo = MockRepo::new();
        repo.expect_create_user_with_profile().never();

        let service = SignupUserService::new(query, repo, hasher);
        let err = service.execute(request("applicant")).await.unwrap_err();

        assert_eq!(err, SignupError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn unique_violation_from_repository_maps_to_already_exists() {
        let mut repo = MockRepo::new();
        repo.expect_create_user_with_profile()
            .returning(|_| Err(UserRepositoryError::UserAlreadyExists));

        let service = SignupUserService::new(empty_query(), repo, hasher());
        let err = service.execute(request("applicant")).await.unwrap_err();

        assert_eq!(err, SignupError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn hashing_failure_is_reported() {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash_password()
            .returning(|_| Err(HashError::TaskFailed));

        let mut repo = MockRepo::new();
        repo.expect_create_user_with_profile().never();

        let service = SignupUserService::new(empty_query(), repo, hasher);
        let err = service.execute(request("applicant")).await.unwrap_err();

        assert!(matches!(err, SignupError::HashingFailed(_)));
    }

    #[tokio::test]
    async fn database_error_maps_to_repository_error() {
        let mut repo = MockRepo::new();
        repo.expect_create_user_with_profile()
            .returning(|_| Err(UserRepositoryError::DatabaseError("tx aborted".to_string())));

        let service = SignupUserService::new(empty_query(), repo, hasher());
        let err = service.execute(request("applicant")).await.unwrap_err();

        assert_eq!(err, SignupError::RepositoryError("tx aborted".to_string()));
    }

    #[tokio::test]
    async fn lookup_failure_maps_to_repository_error() {
        let mut query = MockQuery::new();
        query
            .expect_find_by_email()
            .returning(|_| Err(UserQueryError::DatabaseError("down".to_string())));

        let service = SignupUserService::new(query, MockRepo::new(), MockHasher::new());
        let err = service.execute(request("applicant")).await.unwrap_err();

        assert!(matches!(err, SignupError::RepositoryError(msg) if msg.contains("down")));
    }
}
