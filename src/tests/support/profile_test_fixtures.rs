use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{
    ApplicantProfile, CompanySize, ExperienceLevel, RecruiterProfile, WorkExperience,
};

pub fn sample_work_experience(applicant_profile_id: Uuid) -> WorkExperience {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    WorkExperience {
        id: Uuid::new_v4(),
        applicant_profile_id,
        company_name: "Acme".to_string(),
        location: Some("Berlin".to_string()),
        start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
        end_date: None,
        role_description: Some("Backend engineer".to_string()),
        created_at: ts,
        updated_at: ts,
    }
}

pub fn sample_applicant_profile(user_id: Uuid) -> ApplicantProfile {
    let id = Uuid::new_v4();
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    ApplicantProfile {
        id,
        user_id: UserId::from(user_id),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        phone_number: None,
        university: Some("State University".to_string()),
        major: Some("Computer Science".to_string()),
        graduation_year: Some(2024),
        gpa: Some(3.7),
        portfolio_url: None,
        linkedin_url: None,
        github_url: None,
        skills: vec!["Rust".to_string(), "SQL".to_string()],
        interests: vec![],
        experience_level: Some(ExperienceLevel::Junior),
        preferred_locations: vec!["Remote".to_string()],
        salary_expectation: None,
        availability: None,
        other: None,
        created_at: ts,
        updated_at: ts,
        work_experience: vec![sample_work_experience(id)],
        user: None,
    }
}

pub fn sample_recruiter_profile(user_id: Uuid) -> RecruiterProfile {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    RecruiterProfile {
        id: Uuid::new_v4(),
        user_id: UserId::from(user_id),
        first_name: Some("Grace".to_string()),
        last_name: Some("Hopper".to_string()),
        phone_number: None,
        company: Some("Initech".to_string()),
        position: Some("Talent Lead".to_string()),
        department: None,
        company_size: Some(CompanySize::Medium),
        industry: Some("Software".to_string()),
        linkedin_url: None,
        company_url: Some("https://initech.example".to_string()),
        hiring_sectors: vec!["Engineering".to_string()],
        experience_levels: vec![ExperienceLevel::Entry, ExperienceLevel::Junior],
        other: None,
        created_at: ts,
        updated_at: ts,
        user: None,
    }
}
