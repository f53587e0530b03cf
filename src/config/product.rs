//! Product catalog configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Product catalog configuration
///
/// The store sells exactly one ebook, so the "catalog" is a single
/// title recorded on every purchase row.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductConfig {
    /// Title stamped onto purchase records
    #[serde(default = "default_ebook_title")]
    pub ebook_title: String,
}

impl ProductConfig {
    /// Validate product configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ebook_title.trim().is_empty() {
            return Err(ValidationError::MissingRequired("EBOOK_TITLE"));
        }
        Ok(())
    }
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            ebook_title: default_ebook_title(),
        }
    }
}

fn default_ebook_title() -> String {
    "The Art of Product".to_string()
}
