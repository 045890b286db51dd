//! DynamoDB-backed job store

use std::collections::HashMap;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{debug, info};

use super::JobStore;
use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::schema::JobRecord;

/// Writes each record with an individual `PutItem`
#[derive(Debug, Clone)]
pub struct DynamoJobStore {
    client: Client,
    table: String,
}

impl DynamoJobStore {
    /// Wrap an already configured client
    #[must_use]
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// Build a client from region and credentials
    ///
    /// Unset values fall back to the SDK's provider chains.
    pub async fn connect(config: &StoreConfig, table: impl Into<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(creds) = &config.credentials {
            loader = loader.credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.clone(),
                None,
                None,
                "environment",
            ));
        }

        let sdk_config = loader.load().await;
        let table = table.into();
        info!(
            region = ?sdk_config.region(),
            %table,
            "Connected DynamoDB client"
        );

        Self::new(Client::new(&sdk_config), table)
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait::async_trait]
impl JobStore for DynamoJobStore {
    async fn put_job(&self, job: &JobRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(job_item(job)))
            .send()
            .await
            .map_err(|e| StoreError::Write {
                table: self.table.clone(),
                job_id: job.job_id.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        debug!(job_id = %job.job_id, table = %self.table, "Stored job");
        Ok(())
    }
}

fn optional_string(value: Option<&String>) -> AttributeValue {
    match value {
        Some(s) => AttributeValue::S(s.clone()),
        None => AttributeValue::Null(true),
    }
}

/// Map a record onto DynamoDB attributes, keeping the JSON field names
pub(crate) fn job_item(job: &JobRecord) -> HashMap<String, AttributeValue> {
    let description = match &job.description {
        Some(paragraphs) => {
            AttributeValue::L(paragraphs.iter().cloned().map(AttributeValue::S).collect())
        }
        None => AttributeValue::Null(true),
    };

    HashMap::from([
        ("jobID".to_string(), AttributeValue::S(job.job_id.to_string())),
        (
            "jobTitle".to_string(),
            optional_string(job.listing.title.as_ref()),
        ),
        (
            "jobDescriptionUrl".to_string(),
            optional_string(job.listing.description_url.as_ref()),
        ),
        ("Description".to_string(), description),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::JobListing;

    #[test]
    fn item_keeps_field_names_and_paragraph_order() {
        let job = JobRecord::enrich(
            JobListing::new(Some("Nurse".into()), Some("http://x/1".into())),
            Some(vec!["Duties include...".into(), "Requirements...".into()]),
        );
        let item = job_item(&job);

        assert_eq!(item["jobID"], AttributeValue::S(job.job_id.to_string()));
        assert_eq!(item["jobTitle"], AttributeValue::S("Nurse".into()));
        assert_eq!(item["jobDescriptionUrl"], AttributeValue::S("http://x/1".into()));
        assert_eq!(
            item["Description"],
            AttributeValue::L(vec![
                AttributeValue::S("Duties include...".into()),
                AttributeValue::S("Requirements...".into()),
            ])
        );
    }

    #[test]
    fn absent_fields_become_null_attributes() {
        let job = JobRecord::enrich(JobListing::new(None, None), None);
        let item = job_item(&job);

        assert_eq!(item["jobTitle"], AttributeValue::Null(true));
        assert_eq!(item["jobDescriptionUrl"], AttributeValue::Null(true));
        assert_eq!(item["Description"], AttributeValue::Null(true));
        assert_eq!(item.len(), 4);
    }
}
