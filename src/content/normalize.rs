//! DTO → view model mapping. Every field-name and type mismatch between the
//! CMS schema and what the pages render is resolved here, and nowhere else.

use chrono::{NaiveDate, NaiveDateTime};

use super::{
    dto::{AcfReviewDto, Numeric, PhaseCardDto, ReviewDto, StarRatingReviewDto},
    error::ContentError,
    model::{PhaseCard, Review},
};

pub fn normalize_phase_card(dto: PhaseCardDto) -> PhaseCard {
    let acf = dto.acf;
    PhaseCard {
        id: dto.id,
        main_heading: acf.front_card_main_heading,
        subheading: acf.front_card_subheading,
        front_card_description: acf.front_card_description,
        icon_url: acf.front_card_icon.unwrap_or_default(),
        icon_alt: acf.front_card_icon_alt,
        back_card_title: acf.back_card_title,
        back_card_button_text: acf.back_card_button_text,
        bullet_points: acf.back_card_bullet_points,
    }
}

pub fn normalize_review(dto: ReviewDto) -> Result<Review, ContentError> {
    match dto {
        ReviewDto::Acf(AcfReviewDto { id, acf }) => Ok(Review {
            id: review_id(&id)?,
            author: acf.reviewer_name,
            quote: acf.review_text,
            rating: rating(&acf.rating)?,
            photo_url: acf.client_headshot.map(|h| h.url).unwrap_or_default(),
            review_date: acf.review_date,
        }),
        ReviewDto::StarRating(StarRatingReviewDto { id, acf, date }) => Ok(Review {
            id: review_id(&id)?,
            author: acf.reviewer_name,
            quote: acf.review_text,
            rating: rating(&acf.star_rating)?,
            // this backend has no headshot field
            photo_url: String::new(),
            review_date: date,
        }),
    }
}

fn review_id(id: &Numeric) -> Result<i64, ContentError> {
    id.to_i64()
        .ok_or_else(|| ContentError::Shape(format!("review id {id} is not an integer")))
}

// 1..=5 is enforced by the CMS field schema; only the type is checked here.
fn rating(value: &Numeric) -> Result<u8, ContentError> {
    value
        .to_i64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| ContentError::Shape(format!("rating {value} is not a small integer")))
}

/// Renders a CMS date for display, e.g. `"2024-01-01"` → `"January 1, 2024"`.
///
/// Accepts `YYYY-MM-DD`, the date picker's `YYYYMMDD`, and post dates with a
/// time part. Anything else is shown as-is.
pub fn format_review_date(raw: &str) -> String {
    let raw_trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(raw_trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw_trimmed, "%Y%m%d"))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw_trimmed, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
        });
    match date {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
