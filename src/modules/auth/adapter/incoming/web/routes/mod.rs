pub mod login_user;
pub mod signup_user;

pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo};
pub use signup_user::{signup_user_handler, SignupRequestDto, SignupResponse, SignedUpUser};
