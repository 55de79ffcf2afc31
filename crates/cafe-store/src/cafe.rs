//! Cafe record types and the input normalization applied to them.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// A persisted cafe row.
///
/// Field order matches the JSON shape returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    /// Store-assigned identifier, never reused.
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    /// Free-form capacity text such as `"20-30"`.
    pub seats: String,
    /// Free-form price text such as `"£2.50"`.
    pub coffee_price: Option<String>,
}

/// Raw input for a new cafe, as submitted by a client.
///
/// Every field is optional at this level. The facility flags hold the raw
/// submitted text and are coerced with [`is_truthy`] on insert; the
/// required text fields are checked by [`NewCafe::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCafe {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    #[serde(rename = "loc")]
    pub location: Option<String>,
    pub sockets: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub calls: Option<String>,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

/// A [`NewCafe`] whose required fields are present and whose flags are
/// already coerced.
#[derive(Debug, Clone)]
pub(crate) struct ValidCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl NewCafe {
    /// Check required fields and coerce the facility flags.
    pub(crate) fn validate(self) -> StoreResult<ValidCafe> {
        fn required(value: Option<String>, field: &'static str) -> StoreResult<String> {
            value.ok_or(StoreError::MissingField(field))
        }

        let has_sockets = is_truthy(self.sockets.as_deref());
        let has_toilet = is_truthy(self.toilet.as_deref());
        let has_wifi = is_truthy(self.wifi.as_deref());
        let can_take_calls = is_truthy(self.calls.as_deref());

        Ok(ValidCafe {
            name: required(self.name, "name")?,
            map_url: required(self.map_url, "map_url")?,
            img_url: required(self.img_url, "img_url")?,
            location: required(self.location, "loc")?,
            seats: required(self.seats, "seats")?,
            has_sockets,
            has_toilet,
            has_wifi,
            can_take_calls,
            coffee_price: self.coffee_price,
        })
    }
}

/// Truthiness of a raw form value: any non-empty text is `true`.
///
/// The literal text `"false"` is non-empty and therefore `true`.
pub fn is_truthy(raw: Option<&str>) -> bool {
    matches!(raw, Some(s) if !s.is_empty())
}

/// Title-case `input`: the first letter of each run of letters is
/// upper-cased and the rest of the run lower-cased. Any non-letter
/// starts a new run.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

// ── tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_follows_emptiness() {
        assert!(is_truthy(Some("true")));
        assert!(is_truthy(Some("false")));
        assert!(is_truthy(Some("0")));
        assert!(!is_truthy(Some("")));
        assert!(!is_truthy(None));
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("london"), "London");
        assert_eq!(title_case("PARIS"), "Paris");
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("sHoReDiTcH"), "Shoreditch");
    }

    #[test]
    fn title_case_punctuation_starts_new_word() {
        assert_eq!(title_case("o'hara"), "O'Hara");
        assert_eq!(title_case("st.ives"), "St.Ives");
        assert_eq!(title_case("bethnal-green"), "Bethnal-Green");
        assert_eq!(title_case("3rd street"), "3Rd Street");
    }

    #[test]
    fn title_case_empty_and_unicode() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("ÉCOLE"), "École");
    }

    #[test]
    fn validate_coerces_flags() {
        let input = NewCafe {
            name: Some("Test Cafe".into()),
            map_url: Some("http://x".into()),
            img_url: Some("http://y".into()),
            location: Some("london".into()),
            sockets: Some("true".into()),
            toilet: Some(String::new()),
            wifi: Some("true".into()),
            calls: None,
            seats: Some("10".into()),
            coffee_price: Some("£3.00".into()),
        };

        let valid = input.validate().unwrap();
        assert!(valid.has_sockets);
        assert!(!valid.has_toilet);
        assert!(valid.has_wifi);
        assert!(!valid.can_take_calls);
        assert_eq!(valid.location, "london");
        assert_eq!(valid.coffee_price.as_deref(), Some("£3.00"));
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let input = NewCafe {
            name: Some("Half".into()),
            map_url: Some("http://x".into()),
            img_url: Some("http://y".into()),
            location: Some("London".into()),
            ..Default::default()
        };

        let err = input.validate().unwrap_err();
        assert!(matches!(err, StoreError::MissingField("seats")));
    }

    #[test]
    fn new_cafe_deserializes_loc_alias() {
        let input: NewCafe =
            serde_json::from_str(r#"{"name":"A","loc":"Soho","toilet":"yes"}"#).unwrap();
        assert_eq!(input.location.as_deref(), Some("Soho"));
        assert_eq!(input.toilet.as_deref(), Some("yes"));
        assert!(input.coffee_price.is_none());
    }
}
