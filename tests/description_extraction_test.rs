//! Description extraction and the description fetch stage

use icims_jobs_scraper::{
    DescriptionExtractor, FrameContent, PageContentExtractor, ScrapeError, fetch_description,
};
use tempfile::TempDir;

mod common;

const DETAIL_URL: &str = "https://non-clinical-emory.icims.com/jobs/140001/financial-analyst/job";

#[test]
fn paragraphs_are_trimmed_in_document_order() {
    let content = FrameContent::new(DETAIL_URL, common::fixture("detail.html"));
    let paragraphs = DescriptionExtractor::new("p").unwrap().extract(&content).unwrap();

    assert_eq!(
        paragraphs,
        vec![
            "Duties include preparing monthly budget reports.".to_string(),
            "Requirements: Bachelor's degree in finance.".to_string(),
            String::new(),
            "Emory is an equal opportunity employer.".to_string(),
        ]
    );
}

#[test]
fn no_paragraphs_is_an_error_not_an_empty_description() {
    let content = FrameContent::new(DETAIL_URL, common::fixture("detail_no_paragraphs.html"));
    let result = DescriptionExtractor::new("p").unwrap().extract(&content);
    assert!(matches!(result, Err(ScrapeError::Extraction(_))));
}

#[tokio::test]
async fn fetch_returns_paragraphs_for_loaded_frame() {
    let temp_dir = TempDir::new().unwrap();
    let config = common::test_config(&temp_dir.path().join("out.json"));
    let source = common::FixtureSource::new().with_page(
        DETAIL_URL,
        &format!("{DETAIL_URL}?in_iframe=1"),
        common::fixture("detail.html"),
    );

    let description = fetch_description(&source, &config, DETAIL_URL).await;
    assert_eq!(description.map(|d| d.len()), Some(4));
    assert_eq!(source.requests(), vec![DETAIL_URL.to_string()]);
}

#[tokio::test]
async fn fetch_returns_none_when_paragraphs_never_appear() {
    let temp_dir = TempDir::new().unwrap();
    let config = common::test_config(&temp_dir.path().join("out.json"));
    let source = common::FixtureSource::new().with_page(
        DETAIL_URL,
        DETAIL_URL,
        common::fixture("detail_no_paragraphs.html"),
    );

    assert_eq!(fetch_description(&source, &config, DETAIL_URL).await, None);
}

#[tokio::test]
async fn fetch_returns_none_on_navigation_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config = common::test_config(&temp_dir.path().join("out.json"));
    let source = common::FixtureSource::new();

    assert_eq!(
        fetch_description(&source, &config, "https://unreachable.invalid/job").await,
        None
    );
}
