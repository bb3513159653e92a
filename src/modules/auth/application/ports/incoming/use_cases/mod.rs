pub mod login_user;
pub mod signup_user;

pub use login_user::{LoginError, LoginRequest, LoginRequestError, LoginResult, LoginUserUseCase};
pub use signup_user::{
    SignupError, SignupRequest, SignupRequestError, SignupResult, SignupUserUseCase,
};
