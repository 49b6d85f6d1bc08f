//! Wire shapes of the CMS REST responses.
//!
//! The CMS reports an unset image or an empty repeater as `false` (or
//! `null`) rather than omitting the field; [`unset_as_none`] folds those
//! into `None` so the normalizers only ever see real values or nothing.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{error::ContentError, model::BulletPoint};

/// A number the CMS may send either as a JSON integer or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Text(String),
}

impl Numeric {
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Unset<T> {
    Value(T),
    Flag(bool),
}

fn unset_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Unset<T>>::deserialize(deserializer)? {
        Some(Unset::Value(v)) => Ok(Some(v)),
        Some(Unset::Flag(false)) | None => Ok(None),
        Some(Unset::Flag(true)) => Err(de::Error::custom("expected a value, `false` or `null`")),
    }
}

fn unset_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(unset_as_none(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhaseCardDto {
    pub id: i64,
    pub acf: PhaseCardFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhaseCardFields {
    pub front_card_main_heading: String,
    pub front_card_subheading: String,
    pub front_card_description: String,
    #[serde(default, deserialize_with = "unset_as_none")]
    pub front_card_icon: Option<String>,
    pub front_card_icon_alt: String,
    pub back_card_title: String,
    pub back_card_button_text: String,
    #[serde(deserialize_with = "unset_as_empty")]
    pub back_card_bullet_points: Vec<BulletPoint>,
}

/// Which shape the deployed review endpoint returns. Deployments disagree,
/// so this is configured, never inferred from the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewBackend {
    /// `{id, acf: {reviewer_name, review_text, rating, client_headshot: {url}, review_date}}`
    #[default]
    Acf,
    /// `{id, acf: {reviewer_name, review_text, star_rating}, date}`
    StarRating,
}

impl ReviewBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acf => "acf",
            Self::StarRating => "star-rating",
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Acf => Self::StarRating,
            Self::StarRating => Self::Acf,
        }
    }
}

impl fmt::Display for ReviewBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acf" => Ok(Self::Acf),
            "star-rating" | "star_rating" => Ok(Self::StarRating),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StarRatingReviewDto {
    pub id: Numeric,
    pub acf: StarRatingFields,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StarRatingFields {
    pub reviewer_name: String,
    pub review_text: String,
    pub star_rating: Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AcfReviewDto {
    pub id: Numeric,
    pub acf: AcfReviewFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AcfReviewFields {
    pub reviewer_name: String,
    pub review_text: String,
    pub rating: Numeric,
    #[serde(default, deserialize_with = "unset_as_none")]
    pub client_headshot: Option<Headshot>,
    pub review_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Headshot {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDto {
    Acf(AcfReviewDto),
    StarRating(StarRatingReviewDto),
}

impl ReviewDto {
    /// Decodes one element of the review collection as `backend` says it is
    /// shaped. If it fails but matches the other backend, the error names
    /// the mismatch so a misconfigured deployment is obvious in the logs.
    pub fn from_value(value: &Value, backend: ReviewBackend) -> Result<Self, ContentError> {
        let err = match Self::decode(value, backend) {
            Ok(dto) => return Ok(dto),
            Err(err) => err,
        };
        let other = backend.other();
        if Self::decode(value, other).is_ok() {
            Err(ContentError::Shape(format!(
                "{err}; element matches the `{other}` review backend but `{backend}` is configured"
            )))
        } else {
            Err(ContentError::shape(err))
        }
    }

    fn decode(value: &Value, backend: ReviewBackend) -> Result<Self, serde_json::Error> {
        match backend {
            ReviewBackend::Acf => AcfReviewDto::deserialize(value).map(Self::Acf),
            ReviewBackend::StarRating => {
                StarRatingReviewDto::deserialize(value).map(Self::StarRating)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn phase_json(icon: Value, bullets: Value) -> Value {
        json!({
            "id": 7,
            "acf": {
                "front_card_main_heading": "Launch",
                "front_card_subheading": "Phase 6",
                "front_card_description": "Going live",
                "front_card_icon": icon,
                "front_card_icon_alt": "rocket",
                "back_card_title": "What we do",
                "back_card_button_text": "Learn More",
                "back_card_bullet_points": bullets
            }
        })
    }

    #[test]
    fn test_unset_icon_and_repeater() {
        for unset in [json!(false), Value::Null] {
            let dto: PhaseCardDto =
                serde_json::from_value(phase_json(unset.clone(), unset)).unwrap();
            assert_eq!(dto.acf.front_card_icon, None);
            assert!(dto.acf.back_card_bullet_points.is_empty());
        }
        let dto: PhaseCardDto = serde_json::from_value(phase_json(
            json!("https://cms/icon.svg"),
            json!([{"text": "Deploy"}]),
        ))
        .unwrap();
        assert_eq!(dto.acf.front_card_icon.as_deref(), Some("https://cms/icon.svg"));
        assert_eq!(dto.acf.back_card_bullet_points.len(), 1);
    }

    #[test]
    fn test_true_is_not_an_unset_marker() {
        let res = serde_json::from_value::<PhaseCardDto>(phase_json(json!(true), json!([])));
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_repeater_is_rejected() {
        let mut value = phase_json(json!("icon.svg"), json!([]));
        value["acf"]
            .as_object_mut()
            .unwrap()
            .remove("back_card_bullet_points");
        assert!(serde_json::from_value::<PhaseCardDto>(value).is_err());
    }

    #[test]
    fn test_numeric_accepts_int_and_string() {
        let n: Numeric = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(n.to_i64(), Some(42));
        let n: Numeric = serde_json::from_value(json!(" 42 ")).unwrap();
        assert_eq!(n.to_i64(), Some(42));
        let n: Numeric = serde_json::from_value(json!("forty-two")).unwrap();
        assert_eq!(n.to_i64(), None);
    }

    #[test]
    fn test_review_backend_from_str() {
        assert_eq!("acf".parse::<ReviewBackend>(), Ok(ReviewBackend::Acf));
        assert_eq!("Star-Rating".parse::<ReviewBackend>(), Ok(ReviewBackend::StarRating));
        assert_eq!("star_rating".parse::<ReviewBackend>(), Ok(ReviewBackend::StarRating));
        assert_eq!(
            "graphql".parse::<ReviewBackend>(),
            Err("graphql".to_string())
        );
    }

    #[test]
    fn test_review_decode_flags_backend_mismatch() {
        let star = json!({
            "id": 1,
            "acf": {"reviewer_name": "Jane", "review_text": "Great!", "star_rating": 5},
            "date": "2024-01-01T09:30:00"
        });
        assert!(matches!(
            ReviewDto::from_value(&star, ReviewBackend::StarRating),
            Ok(ReviewDto::StarRating(_))
        ));
        let err = ReviewDto::from_value(&star, ReviewBackend::Acf).unwrap_err();
        assert!(err.to_string().contains("`star-rating` review backend"), "{err}");

        let garbage = json!({"id": 1, "title": "nope"});
        let err = ReviewDto::from_value(&garbage, ReviewBackend::Acf).unwrap_err();
        assert!(!err.to_string().contains("review backend"), "{err}");
    }

    #[test]
    fn test_acf_headshot_variants() {
        let with = |headshot: Value| {
            json!({
                "id": "9",
                "acf": {
                    "reviewer_name": "Sam",
                    "review_text": "Lovely site",
                    "rating": 4,
                    "client_headshot": headshot,
                    "review_date": "20240315"
                }
            })
        };
        let dto = ReviewDto::from_value(
            &with(json!({"url": "https://cms/sam.jpg", "width": 300})),
            ReviewBackend::Acf,
        )
        .unwrap();
        let ReviewDto::Acf(dto) = dto else {
            panic!("expected the acf shape");
        };
        assert_eq!(dto.acf.client_headshot.unwrap().url, "https://cms/sam.jpg");

        let ReviewDto::Acf(dto) = ReviewDto::from_value(&with(json!(false)), ReviewBackend::Acf)
            .unwrap()
        else {
            panic!("expected the acf shape");
        };
        assert_eq!(dto.acf.client_headshot, None);
    }
}
