//! Content fetched from the headless CMS: wire DTOs, the view models pages
//! render, the mapping between them, and the clients that fetch them.

mod client;
mod dto;
mod error;
mod model;
mod normalize;
mod transport;

pub use client::{ContentClient, CONTACT_FAILED, PHASES_FAILED, REVIEWS_FAILED};
pub use dto::{
    AcfReviewDto, AcfReviewFields, Headshot, Numeric, PhaseCardDto, PhaseCardFields,
    ReviewBackend, ReviewDto, StarRatingFields, StarRatingReviewDto,
};
pub use error::{ContentError, ErrorKind, FetchError};
pub use model::{BulletPoint, ContactForm, InvalidContactForm, PhaseCard, Review};
pub use normalize::{format_review_date, normalize_phase_card, normalize_review};
pub use transport::{HttpTransport, Transport, TransportResponse};
