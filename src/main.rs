mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, profile, search};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::incoming::use_cases::{LoginUserUseCase, SignupUserUseCase};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::service::{LoginUserService, SignupUserService};
use crate::profile::adapter::outgoing::{
    ApplicantProfileRepositoryPostgres, RecruiterProfileRepositoryPostgres,
    WorkExperienceRepositoryPostgres,
};
use crate::profile::application::domain::policies::RecruiterProfilePolicy;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    AddWorkExperienceService, DeleteWorkExperienceService, GetApplicantProfileService,
    GetRecruiterProfileService, UpdateApplicantProfileService, UpdateRecruiterProfileService,
    UpdateWorkExperienceService,
};
use crate::search::adapter::outgoing::ApplicantSearchQueryPostgres;
use crate::search::application::search_use_cases::SearchUseCases;
use crate::search::application::service::{GetApplicantDetailsService, SearchApplicantsService};
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::config::{load_env_files, ServerConfig};

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub signup_user_use_case: Arc<dyn SignupUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub profile: ProfileUseCases,
    pub search: SearchUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    load_env_files();

    let config = ServerConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let password_hasher = Argon2Hasher::from_env()?;

    info!("Starting talent search API...");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None).await?;
    }

    let db_arc = Arc::new(conn);
    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let signup_user_use_case =
        SignupUserService::new(user_query.clone(), user_repo, password_hasher.clone());
    let login_user_use_case =
        LoginUserService::new(user_query, password_hasher, Arc::clone(&token_provider));

    // Profiles
    let applicant_repo = ApplicantProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let recruiter_repo = RecruiterProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_repo = WorkExperienceRepositoryPostgres::new(Arc::clone(&db_arc));

    let profile = ProfileUseCases {
        get_applicant: Arc::new(GetApplicantProfileService::new(applicant_repo.clone())),
        update_applicant: Arc::new(UpdateApplicantProfileService::new(applicant_repo.clone())),
        add_work_experience: Arc::new(AddWorkExperienceService::new(
            applicant_repo.clone(),
            experience_repo.clone(),
        )),
        update_work_experience: Arc::new(UpdateWorkExperienceService::new(
            applicant_repo.clone(),
            experience_repo.clone(),
        )),
        delete_work_experience: Arc::new(DeleteWorkExperienceService::new(
            applicant_repo,
            experience_repo,
        )),
        get_recruiter: Arc::new(GetRecruiterProfileService::new(recruiter_repo.clone())),
        update_recruiter: Arc::new(UpdateRecruiterProfileService::new(
            recruiter_repo,
            RecruiterProfilePolicy::default(),
        )),
    };

    // Search
    let search_query = ApplicantSearchQueryPostgres::new(Arc::clone(&db_arc));
    let search = SearchUseCases {
        search_applicants: Arc::new(SearchApplicantsService::new(search_query.clone())),
        get_applicant_details: Arc::new(GetApplicantDetailsService::new(search_query)),
    };

    let state = AppState {
        signup_user_use_case: Arc::new(signup_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        profile,
        search,
    };

    let bind_address = config.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_applicant_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_applicant_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::add_work_experience_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_work_experience_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::delete_work_experience_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_recruiter_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_recruiter_profile_handler);
    // Search
    cfg.service(crate::search::adapter::incoming::web::routes::search_applicants_handler);
    cfg.service(crate::search::adapter::incoming::web::routes::get_applicant_details_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
