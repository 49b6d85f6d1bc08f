use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ContentConfig;

use super::{
    dto::{PhaseCardDto, ReviewBackend, ReviewDto},
    error::{ContentError, FetchError},
    model::{ContactForm, PhaseCard, Review},
    normalize::{normalize_phase_card, normalize_review},
    transport::{HttpTransport, Transport, TransportResponse},
};

pub const PHASES_PATH: &str = "/api/phases";
pub const REVIEWS_PATH: &str = "/api/reviews";
pub const CONTACT_FORM_PATH: &str = "/api/submit-contact-form";

pub const PHASES_FAILED: &str = "Failed to fetch flip card data.";
pub const REVIEWS_FAILED: &str = "Failed to fetch reviews.";
pub const CONTACT_FAILED: &str = "Failed to send your message. Please try again.";

/// Fetches site content from the CMS-backed API. Holds no state between
/// calls: no cache, no retries.
#[derive(Debug, Clone)]
pub struct ContentClient<T = HttpTransport> {
    base_url: String,
    review_backend: ReviewBackend,
    transport: T,
}

impl ContentClient<HttpTransport> {
    pub fn from_config(config: &ContentConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> ContentClient<T> {
    pub fn with_transport(config: &ContentConfig, transport: T) -> Self {
        Self {
            base_url: config.api_base_url().to_string(),
            review_backend: config.review_backend(),
            transport,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_flip_card_phases(&self) -> Result<Vec<PhaseCardDto>, FetchError> {
        let url = self.url(PHASES_PATH);
        let phases = self
            .get_json::<Vec<PhaseCardDto>>(&url)
            .await
            .map_err(|cause| fail(PHASES_FAILED, cause))?;
        log::debug!("fetched {} phase cards", phases.len());
        Ok(phases)
    }

    pub async fn fetch_phase_cards(&self) -> Result<Vec<PhaseCard>, FetchError> {
        let phases = self.get_flip_card_phases().await?;
        Ok(phases.into_iter().map(normalize_phase_card).collect())
    }

    /// All or nothing: one malformed element fails the whole collection.
    pub async fn fetch_reviews(&self) -> Result<Vec<Review>, FetchError> {
        let url = self.url(REVIEWS_PATH);
        let reviews = self
            .get_reviews(&url)
            .await
            .map_err(|cause| fail(REVIEWS_FAILED, cause))?;
        log::debug!("fetched {} reviews", reviews.len());
        Ok(reviews)
    }

    async fn get_reviews(&self, url: &str) -> Result<Vec<Review>, ContentError> {
        let raw = self.get_json::<Vec<Value>>(url).await?;
        raw.iter()
            .enumerate()
            .map(|(i, value)| {
                ReviewDto::from_value(value, self.review_backend)
                    .and_then(normalize_review)
                    .map_err(|e| ContentError::Shape(format!("review {i}: {e}")))
            })
            .collect()
    }

    /// Succeeds only on HTTP 200.
    pub async fn submit_contact_form(&self, form: &ContactForm) -> Result<(), FetchError> {
        let url = self.url(CONTACT_FORM_PATH);
        let body = serde_json::to_value(form)
            .map_err(|e| fail(CONTACT_FAILED, ContentError::shape(e)))?;
        let res = self
            .transport
            .post_json(&url, &body)
            .await
            .map_err(|cause| fail(CONTACT_FAILED, cause))?;
        if res.status != http::StatusCode::OK {
            return Err(fail(
                CONTACT_FAILED,
                ContentError::Status {
                    url,
                    status: res.status.as_u16(),
                },
            ));
        }
        log::info!("contact form submitted");
        Ok(())
    }

    async fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, ContentError> {
        let TransportResponse { status, body } = self.transport.get(url).await?;
        if !status.is_success() {
            return Err(ContentError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        serde_json::from_slice(&body).map_err(ContentError::shape)
    }
}

fn fail(message: &'static str, cause: ContentError) -> FetchError {
    log::error!("{message} cause: {cause}");
    FetchError::new(message, cause)
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        collections::VecDeque,
        net::{Ipv4Addr, TcpListener},
    };

    use http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::content::error::ErrorKind;

    /// Replays canned responses and records every request.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<TransportResponse, ContentError>>>,
        requests: RefCell<Vec<(String, Option<Value>)>>,
    }

    impl ScriptedTransport {
        fn replying(status: StatusCode, body: Value) -> Self {
            let script = Self::default();
            script.responses.borrow_mut().push_back(Ok(TransportResponse {
                status,
                body: serde_json::to_vec(&body).unwrap(),
            }));
            script
        }

        fn raw(status: StatusCode, body: &str) -> Self {
            let script = Self::default();
            script.responses.borrow_mut().push_back(Ok(TransportResponse {
                status,
                body: body.as_bytes().to_vec(),
            }));
            script
        }

        fn failing(message: &str) -> Self {
            let script = Self::default();
            script
                .responses
                .borrow_mut()
                .push_back(Err(ContentError::transport("scripted", message)));
            script
        }

        fn next(&self, url: &str, body: Option<Value>) -> Result<TransportResponse, ContentError> {
            self.requests.borrow_mut().push((url.to_string(), body));
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    impl Transport for ScriptedTransport {
        async fn get(&self, url: &str) -> Result<TransportResponse, ContentError> {
            self.next(url, None)
        }

        async fn post_json(
            &self,
            url: &str,
            body: &Value,
        ) -> Result<TransportResponse, ContentError> {
            self.next(url, Some(body.clone()))
        }
    }

    fn config(backend: ReviewBackend) -> ContentConfig {
        ContentConfig::new("http://cms.test/", backend)
    }

    fn star_client(transport: ScriptedTransport) -> ContentClient<ScriptedTransport> {
        ContentClient::with_transport(&config(ReviewBackend::StarRating), transport)
    }

    fn star_review(id: Value, rating: u8) -> Value {
        json!({
            "id": id,
            "acf": {"reviewer_name": "Jane", "review_text": "Great!", "star_rating": rating},
            "date": "2024-01-01T10:00:00"
        })
    }

    fn phase(id: i64, heading: &str) -> Value {
        json!({
            "id": id,
            "acf": {
                "front_card_main_heading": heading,
                "front_card_subheading": format!("Phase {id}"),
                "front_card_description": "",
                "front_card_icon": false,
                "front_card_icon_alt": "",
                "back_card_title": "Steps",
                "back_card_button_text": "Learn More",
                "back_card_bullet_points": [{"text": "One"}, {"text": "Two"}]
            }
        })
    }

    #[tokio::test]
    async fn test_get_flip_card_phases() {
        let client = star_client(ScriptedTransport::replying(
            StatusCode::OK,
            json!([phase(1, "Discovery"), phase(2, "Planning")]),
        ));
        let phases = client.get_flip_card_phases().await.unwrap();
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[1].acf.front_card_main_heading, "Planning");

        let requests = client.transport.requests.borrow();
        assert_eq!(requests.as_slice(), &[("http://cms.test/api/phases".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_fetch_phase_cards_normalizes() {
        let client = star_client(ScriptedTransport::replying(
            StatusCode::OK,
            json!([phase(3, "Design")]),
        ));
        let cards = client.fetch_phase_cards().await.unwrap();
        assert_eq!(cards[0].main_heading, "Design");
        assert_eq!(cards[0].icon_url, "");
        assert_eq!(cards[0].bullet_points.len(), 2);
    }

    #[tokio::test]
    async fn test_phases_transport_failure_has_fixed_message() {
        let client = star_client(ScriptedTransport::failing("connection refused"));
        let err = client.get_flip_card_phases().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch flip card data.");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.cause().to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_phases_non_2xx_and_bad_body() {
        let client = star_client(ScriptedTransport::replying(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "boom"}),
        ));
        let err = client.get_flip_card_phases().await.unwrap_err();
        assert_eq!(err.message(), PHASES_FAILED);
        assert!(matches!(err.cause(), ContentError::Status { status: 500, .. }));

        let client = star_client(ScriptedTransport::raw(StatusCode::OK, "<html>oops</html>"));
        let err = client.get_flip_card_phases().await.unwrap_err();
        assert_eq!(err.message(), PHASES_FAILED);
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[tokio::test]
    async fn test_phases_connection_refused_over_http() {
        // bind then drop to get a local port nothing listens on
        let port = {
            let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = ContentConfig::new(&format!("http://127.0.0.1:{port}"), ReviewBackend::Acf);
        let client = ContentClient::from_config(&config);
        let err = client.get_flip_card_phases().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch flip card data.");
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_fetch_reviews_three_elements() {
        let client = star_client(ScriptedTransport::replying(
            StatusCode::OK,
            json!([
                star_review(json!(1), 5),
                star_review(json!("2"), 3),
                star_review(json!(3), 1)
            ]),
        ));
        let reviews = client.fetch_reviews().await.unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(
            reviews.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(reviews.iter().all(|r| (1..=5).contains(&r.rating)));
        assert!(reviews.iter().all(|r| r.photo_url.is_empty()));
    }

    #[tokio::test]
    async fn test_fetch_reviews_is_all_or_nothing() {
        let mut broken = star_review(json!(2), 4);
        broken["acf"]
            .as_object_mut()
            .unwrap()
            .remove("reviewer_name");
        let client = star_client(ScriptedTransport::replying(
            StatusCode::OK,
            json!([star_review(json!(1), 5), broken, star_review(json!(3), 5)]),
        ));
        let err = client.fetch_reviews().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch reviews.");
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert!(err.cause().to_string().contains("review 1"), "{}", err.cause());
    }

    #[tokio::test]
    async fn test_fetch_reviews_uses_configured_backend() {
        let acf = json!([{
            "id": 5,
            "acf": {
                "reviewer_name": "Ana",
                "review_text": "Wonderful",
                "rating": 5,
                "client_headshot": {"url": "https://cms.test/ana.jpg"},
                "review_date": "2024-02-02"
            }
        }]);
        let transport = ScriptedTransport::replying(StatusCode::OK, acf.clone());
        let client = ContentClient::with_transport(&config(ReviewBackend::Acf), transport);
        let reviews = client.fetch_reviews().await.unwrap();
        assert_eq!(reviews[0].photo_url, "https://cms.test/ana.jpg");

        // same payload against a star-rating deployment is flagged, not guessed
        let client = client_with(acf);
        let err = client.fetch_reviews().await.unwrap_err();
        assert!(err.cause().to_string().contains("`acf` review backend"));
    }

    fn client_with(body: Value) -> ContentClient<ScriptedTransport> {
        star_client(ScriptedTransport::replying(StatusCode::OK, body))
    }

    #[tokio::test]
    async fn test_fetch_reviews_rejects_non_array() {
        let err = client_with(json!({"reviews": []}))
            .fetch_reviews()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[tokio::test]
    async fn test_submit_contact_form() {
        let form = ContactForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "We need a new site.".to_string(),
        };
        let client = star_client(ScriptedTransport::replying(StatusCode::OK, json!({"ok": true})));
        client.submit_contact_form(&form).await.unwrap();
        let requests = client.transport.requests.borrow();
        assert_eq!(requests[0].0, "http://cms.test/api/submit-contact-form");
        assert_eq!(
            requests[0].1,
            Some(json!({
                "fullName": "Jane Doe",
                "email": "jane@example.com",
                "message": "We need a new site."
            }))
        );
    }

    #[tokio::test]
    async fn test_submit_contact_form_requires_200() {
        let form = ContactForm::default();
        let client = star_client(ScriptedTransport::replying(StatusCode::CREATED, json!({})));
        let err = client.submit_contact_form(&form).await.unwrap_err();
        assert_eq!(err.message(), CONTACT_FAILED);
        assert!(matches!(err.cause(), ContentError::Status { status: 201, .. }));

        let client = star_client(ScriptedTransport::failing("timed out"));
        let err = client.submit_contact_form(&form).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
