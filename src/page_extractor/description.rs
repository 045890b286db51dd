//! Detail-page extraction: trimmed paragraph text in document order.

use scraper::{Html, Selector};

use super::{FrameContent, PageContentExtractor, compile_selector};
use crate::errors::{ScrapeError, ScrapeResult};

#[derive(Debug, Clone)]
pub struct DescriptionExtractor {
    paragraph: Selector,
}

impl DescriptionExtractor {
    /// # Errors
    ///
    /// Returns `ScrapeError::Selector` if the selector fails to parse.
    pub fn new(selector: &str) -> ScrapeResult<Self> {
        Ok(Self {
            paragraph: compile_selector(selector)?,
        })
    }
}

impl PageContentExtractor for DescriptionExtractor {
    type Output = Vec<String>;

    /// A document without any paragraph is an error, never an empty description.
    fn extract(&self, content: &FrameContent) -> ScrapeResult<Vec<String>> {
        let document = Html::parse_document(&content.html);

        let paragraphs: Vec<String> = document
            .select(&self.paragraph)
            .map(|p| p.text().collect::<String>().trim().to_string())
            .collect();

        if paragraphs.is_empty() {
            return Err(ScrapeError::Extraction(format!(
                "no paragraph elements in frame of {}",
                content.url
            )));
        }

        Ok(paragraphs)
    }
}
