//! Readiness probes evaluated inside the page
//!
//! A probe reports whether the document has finished parsing and the
//! readiness selector matches. Once both hold it returns a snapshot of that
//! document.

use serde::Deserialize;

use crate::errors::{ScrapeError, ScrapeResult};

/// Which document a probe inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeScope {
    /// The document of the first `iframe` in the page
    Frame,
    /// The top-level document (used after navigating into a frame's `src`)
    Document,
}

/// Outcome of one probe evaluation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FrameProbe {
    /// No `iframe` element exists yet
    NoFrame,
    /// Document is still loading or the selector does not match yet
    Pending,
    /// Selector matched; snapshot of the document
    Ready { url: String, html: String },
    /// The frame's document is not reachable from the top page
    Detached { src: String },
}

const FRAME_PROBE_TEMPLATE: &str = r#"
    (() => {
        const selector = __SELECTOR__;
        const frame = document.querySelector('iframe');
        if (!frame) {
            return { state: 'no_frame' };
        }
        let doc = null;
        try {
            doc = frame.contentDocument;
        } catch (e) {
            doc = null;
        }
        if (!doc) {
            return { state: 'detached', src: frame.src || '' };
        }
        if (doc.readyState !== 'complete' || !doc.documentElement
            || doc.querySelector(selector) === null) {
            return { state: 'pending' };
        }
        return {
            state: 'ready',
            url: doc.location ? doc.location.href : (frame.src || ''),
            html: doc.documentElement.outerHTML
        };
    })()
"#;

const DOCUMENT_PROBE_TEMPLATE: &str = r#"
    (() => {
        const selector = __SELECTOR__;
        if (document.readyState !== 'complete' || !document.documentElement
            || document.querySelector(selector) === null) {
            return { state: 'pending' };
        }
        return {
            state: 'ready',
            url: location.href,
            html: document.documentElement.outerHTML
        };
    })()
"#;

/// Build the probe script for a readiness selector
///
/// The selector is embedded as a JSON string literal so quotes inside it
/// cannot break out of the script.
pub fn probe_script(scope: ProbeScope, selector: &str) -> ScrapeResult<String> {
    let literal = serde_json::to_string(selector)
        .map_err(|e| ScrapeError::Script(format!("Failed to encode selector: {e}")))?;

    let template = match scope {
        ProbeScope::Frame => FRAME_PROBE_TEMPLATE,
        ProbeScope::Document => DOCUMENT_PROBE_TEMPLATE,
    };

    Ok(template.replace("__SELECTOR__", &literal))
}
