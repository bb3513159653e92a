use serde::Deserialize;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// - Unset: key absent from the body => keep DB value
// - Null: key present with null => clear the column
// - Value(v): replace with v
//
// Fields must carry #[serde(default)] so an absent key becomes Unset.
//

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Converts the carried value while keeping Unset/Null as they are.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<PatchField<U>, E> {
        Ok(match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        major: PatchField<String>,
        #[serde(default)]
        gpa: PatchField<f64>,
    }

    #[test]
    fn absent_key_is_unset() {
        let body: Body = serde_json::from_str(r#"{"major":"CS"}"#).unwrap();
        assert_eq!(body.major, PatchField::Value("CS".to_string()));
        assert!(body.gpa.is_unset());
    }

    #[test]
    fn explicit_null_is_distinct_from_absent() {
        let body: Body = serde_json::from_str(r#"{"gpa":null}"#).unwrap();
        assert_eq!(body.gpa, PatchField::Null);
        assert!(body.major.is_unset());
    }

    #[test]
    fn try_map_preserves_null_and_unset() {
        let parse = |s: String| s.parse::<i32>();

        assert_eq!(
            PatchField::Value("12".to_string()).try_map(parse).unwrap(),
            PatchField::Value(12)
        );
        assert_eq!(
            PatchField::<String>::Null.try_map(parse).unwrap(),
            PatchField::Null
        );
        assert!(PatchField::Value("x".to_string()).try_map(parse).is_err());
    }
}
