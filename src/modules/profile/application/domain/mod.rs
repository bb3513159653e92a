pub mod entities;
pub mod policies;
pub mod work_experience;
