//! Job records produced by the scraper
//!
//! Field names on the wire keep the portal scraper's original JSON layout:
//! `jobTitle`, `jobDescriptionUrl`, `Description`, `jobID`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the listings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    /// Trimmed heading text, `None` when the row has no title heading
    #[serde(rename = "jobTitle")]
    pub title: Option<String>,

    /// Absolute detail-page URL, `None` when the row has no usable anchor
    #[serde(rename = "jobDescriptionUrl")]
    pub description_url: Option<String>,
}

impl JobListing {
    #[must_use]
    pub fn new(title: Option<String>, description_url: Option<String>) -> Self {
        Self {
            title,
            description_url,
        }
    }
}

/// A listing enriched with its description and a generated identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(flatten)]
    pub listing: JobListing,

    /// Paragraph text in document order, `None` when the detail page could
    /// not be scraped
    #[serde(rename = "Description")]
    pub description: Option<Vec<String>>,

    /// Fresh v4 UUID, independent of any scraped field
    #[serde(rename = "jobID")]
    pub job_id: Uuid,
}

impl JobRecord {
    /// Attach a description and a newly generated id to a listing
    #[must_use]
    pub fn enrich(listing: JobListing, description: Option<Vec<String>>) -> Self {
        Self {
            listing,
            description,
            job_id: Uuid::new_v4(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_portal_field_names() {
        let record = JobRecord::enrich(
            JobListing::new(Some("Nurse".into()), Some("http://x/1".into())),
            Some(vec!["Duties include...".into()]),
        );
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["jobTitle"], "Nurse");
        assert_eq!(value["jobDescriptionUrl"], "http://x/1");
        assert_eq!(value["Description"][0], "Duties include...");
        assert_eq!(value["jobID"], record.job_id.to_string());
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let record = JobRecord::enrich(JobListing::new(None, None), None);
        let value = serde_json::to_value(&record).unwrap();

        assert!(value["jobTitle"].is_null());
        assert!(value["jobDescriptionUrl"].is_null());
        assert!(value["Description"].is_null());
    }

    #[test]
    fn identical_listings_get_distinct_ids() {
        let listing = JobListing::new(Some("Nurse".into()), Some("http://x/1".into()));
        let a = JobRecord::enrich(listing.clone(), None);
        let b = JobRecord::enrich(listing, None);
        assert_ne!(a.job_id, b.job_id);
    }
}
