pub mod login_user_service;
pub mod signup_user_service;

pub use login_user_service::LoginUserService;
pub use signup_user_service::SignupUserService;
