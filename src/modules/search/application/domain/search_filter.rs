use super::pagination::SearchPage;
use crate::modules::profile::application::domain::entities::ExperienceLevel;

/// Conjunction of optional predicates over applicant profiles.
/// A `None` or empty field contributes no clause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantSearchFilter {
    pub graduation_year: Option<i32>,
    /// Case-insensitive substring
    pub major: Option<String>,
    /// Case-insensitive substring
    pub university: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub min_gpa: Option<f64>,
    pub max_gpa: Option<f64>,
    /// Matches profiles holding at least one of these skills
    pub skills: Vec<String>,
    /// Matches profiles preferring at least one of these locations
    pub preferred_locations: Vec<String>,
}

impl ApplicantSearchFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchParamError {
    #[error("{name} must be a number, got: {value}")]
    NotANumber { name: &'static str, value: String },

    #[error("Invalid experience level: {0}. Allowed values: entry, junior, mid, senior")]
    InvalidExperienceLevel(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantSearchParams {
    pub filter: ApplicantSearchFilter,
    pub page: SearchPage,
}

impl ApplicantSearchParams {
    /// Builds the search from raw query-string pairs.
    ///
    /// - list keys accept both `skills=a&skills=b` and `skills[]=a`
    /// - blank values count as absent
    /// - for scalar keys the first non-blank occurrence wins
    /// - unknown keys are ignored
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, SearchParamError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = ApplicantSearchFilter::default();
        let mut page: Option<i64> = None;
        let mut limit: Option<i64> = None;

        for (key, value) in pairs {
            let key = key.as_ref();
            let key = key.strip_suffix("[]").unwrap_or(key);
            let value = value.as_ref().trim();

            if value.is_empty() {
                continue;
            }

            match key {
                "graduationYear" if filter.graduation_year.is_none() => {
                    filter.graduation_year = Some(parse_number("graduationYear", value)?);
                }
                "major" if filter.major.is_none() => filter.major = Some(value.to_string()),
                "university" if filter.university.is_none() => {
                    filter.university = Some(value.to_string())
                }
                "experienceLevel" if filter.experience_level.is_none() => {
                    filter.experience_level = Some(
                        value
                            .parse::<ExperienceLevel>()
                            .map_err(SearchParamError::InvalidExperienceLevel)?,
                    );
                }
                "minGpa" if filter.min_gpa.is_none() => {
                    filter.min_gpa = Some(parse_gpa("minGpa", value)?);
                }
                "maxGpa" if filter.max_gpa.is_none() => {
                    filter.max_gpa = Some(parse_gpa("maxGpa", value)?);
                }
                "skills" => push_unique(&mut filter.skills, value),
                "preferredLocations" => push_unique(&mut filter.preferred_locations, value),
                "page" if page.is_none() => page = Some(parse_number("page", value)?),
                "limit" if limit.is_none() => limit = Some(parse_number("limit", value)?),
                _ => {}
            }
        }

        Ok(Self {
            filter,
            page: SearchPage::new(page, limit),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: &str,
) -> Result<T, SearchParamError> {
    value.parse::<T>().map_err(|_| SearchParamError::NotANumber {
        name,
        value: value.to_string(),
    })
}

fn parse_gpa(name: &'static str, value: &str) -> Result<f64, SearchParamError> {
    // "NaN" and "inf" parse as f64 but are not usable bounds
    parse_number::<f64>(name, value).and_then(|v| {
        if v.is_finite() {
            Ok(v)
        } else {
            Err(SearchParamError::NotANumber {
                name,
                value: value.to_string(),
            })
        }
    })
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &[(&str, &str)]) -> Result<ApplicantSearchParams, SearchParamError> {
        ApplicantSearchParams::from_pairs(query.iter().copied())
    }

    #[test]
    fn no_parameters_means_match_everything() {
        let params = parse(&[]).unwrap();
        assert!(params.filter.is_empty());
        assert_eq!(params.page, SearchPage::default());
    }

    #[test]
    fn every_parameter_contributes() {
        let params = parse(&[
            ("graduationYear", "2024"),
            ("major", "computer"),
            ("university", "state"),
            ("experienceLevel", "junior"),
            ("minGpa", "3.0"),
            ("maxGpa", "3.8"),
            ("skills", "Rust"),
            ("preferredLocations", "Remote"),
            ("page", "2"),
            ("limit", "5"),
        ])
        .unwrap();

        assert_eq!(
            params.filter,
            ApplicantSearchFilter {
                graduation_year: Some(2024),
                major: Some("computer".to_string()),
                university: Some("state".to_string()),
                experience_level: Some(ExperienceLevel::Junior),
                min_gpa: Some(3.0),
                max_gpa: Some(3.8),
                skills: vec!["Rust".to_string()],
                preferred_locations: vec!["Remote".to_string()],
            }
        );
        assert_eq!(params.page, SearchPage::new(Some(2), Some(5)));
    }

    #[test]
    fn list_keys_accept_repeats_and_brackets() {
        let params = parse(&[
            ("skills", "Rust"),
            ("skills[]", "Go"),
            ("skills", "Rust"),
            ("preferredLocations[]", "Berlin"),
        ])
        .unwrap();

        assert_eq!(params.filter.skills, vec!["Rust", "Go"]);
        assert_eq!(params.filter.preferred_locations, vec!["Berlin"]);
    }

    #[test]
    fn blank_values_are_absent() {
        let params = parse(&[("graduationYear", ""), ("major", "  "), ("page", "")]).unwrap();
        assert!(params.filter.is_empty());
        assert_eq!(params.page.page(), 1);
    }

    #[test]
    fn first_scalar_occurrence_wins() {
        let params = parse(&[("graduationYear", "2023"), ("graduationYear", "2025")]).unwrap();
        assert_eq!(params.filter.graduation_year, Some(2023));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert_eq!(
            parse(&[("graduationYear", "twenty")]).unwrap_err(),
            SearchParamError::NotANumber {
                name: "graduationYear",
                value: "twenty".to_string()
            }
        );
        assert!(parse(&[("minGpa", "high")]).is_err());
        assert!(parse(&[("maxGpa", "NaN")]).is_err());
        assert!(parse(&[("page", "1.5")]).is_err());
        assert!(parse(&[("limit", "ten")]).is_err());
    }

    #[test]
    fn unknown_experience_level_is_rejected() {
        let err = parse(&[("experienceLevel", "lead")]).unwrap_err();
        assert_eq!(err, SearchParamError::InvalidExperienceLevel("lead".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid experience level: lead. Allowed values: entry, junior, mid, senior"
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = parse(&[("sort", "name"), ("userId", "x")]).unwrap();
        assert!(params.filter.is_empty());
    }

    #[test]
    fn oversized_limit_is_clamped_not_rejected() {
        let params = parse(&[("limit", "1000")]).unwrap();
        assert_eq!(params.page.limit(), 50);
    }
}
