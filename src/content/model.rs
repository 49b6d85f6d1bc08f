use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletPoint {
    pub text: String,
}

/// Render props of one flip card, flattened from the CMS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseCard {
    pub id: i64,
    pub main_heading: String,
    pub subheading: String,
    pub front_card_description: String,
    pub icon_url: String,
    pub icon_alt: String,
    pub back_card_title: String,
    pub back_card_button_text: String,
    pub bullet_points: Vec<BulletPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub author: String,
    pub quote: String,
    pub rating: u8,
    /// Empty when the backend has no headshot for the reviewer.
    pub photo_url: String,
    pub review_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidContactForm {
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), InvalidContactForm> {
        if self.full_name.trim().is_empty() {
            return Err(InvalidContactForm::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(InvalidContactForm::MissingEmail);
        }
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => return Err(InvalidContactForm::InvalidEmail),
        }
        if self.message.trim().is_empty() {
            return Err(InvalidContactForm::MissingMessage);
        }
        Ok(())
    }
}
