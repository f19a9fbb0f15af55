//! Responsive breakpoint resolution.
//!
//! The server embeds an ascending list of width thresholds. On load the page
//! picks the bucket for the real viewport width and asks the server for the
//! matching layout before anything becomes interactive.

use serde::Deserialize;
use tabledom::{Document, Element};
use url::{Url, form_urlencoded};

use crate::config::PageConfig;
use crate::context::PageContext;
use crate::error::Error;
use crate::remote::Method;

/// Breakpoint data embedded in the page. Empty disables the feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BreakpointConfig {
    #[serde(default)]
    pub breakpoints: Vec<u32>,
}

/// What the page should do after looking at the breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointAction {
    /// No breakpoints configured: initialize right away.
    Proceed,
    /// Fetch the layout for this breakpoint first.
    RequestLayout { breakpoint: u32 },
}

impl BreakpointConfig {
    pub fn new(breakpoints: impl Into<Vec<u32>>) -> Self {
        Self {
            breakpoints: breakpoints.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the breakpoint data element. A page without one has no breakpoints.
    pub fn from_document(doc: &Document, config: &PageConfig) -> Result<Self, Error> {
        match doc.get(&config.breakpoints_id) {
            Some(el) => Self::from_json(el.text_content().unwrap_or_default()),
            None => {
                log::debug!("[breakpoint] no #{} element", config.breakpoints_id);
                Ok(Self::default())
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.breakpoints.is_empty()
    }

    pub fn action(&self, width: u32) -> BreakpointAction {
        match resolve_breakpoint(&self.breakpoints, width) {
            Some(breakpoint) => BreakpointAction::RequestLayout { breakpoint },
            None => BreakpointAction::Proceed,
        }
    }
}

/// The largest threshold not above `width`, or the smallest threshold when
/// the viewport is narrower than all of them. `None` if there are none.
pub fn resolve_breakpoint(breakpoints: &[u32], width: u32) -> Option<u32> {
    breakpoints
        .iter()
        .copied()
        .fold(None, |best: Option<u32>, b| match best {
            _ if b > width => best,
            Some(current) if current >= b => best,
            _ => Some(b),
        })
        .or_else(|| breakpoints.iter().copied().min())
}

/// Ask the server for the layout matching `breakpoint`.
///
/// The request is scoped to the media-query anchor, which is appended to
/// the body if the page does not render one.
pub fn request_layout(cx: &mut PageContext, breakpoint: u32) -> u64 {
    let anchor = cx.config.media_query_id.clone();
    if !cx.doc.contains(&anchor) {
        log::debug!("[breakpoint] creating #{anchor}");
        cx.doc.append_to_body(Element::div().id(anchor.clone()));
    }
    let values = vec![(cx.config.width_param.clone(), breakpoint.to_string())];
    log::info!("[breakpoint] requesting layout for {breakpoint}");
    cx.fetch(Method::Get, "", &anchor, &anchor, values)
}

/// If `location` carries `param` and it differs from `actual`, the same
/// URL with the parameter replaced in place. `None` when no correction is
/// needed, including when the parameter is absent.
pub fn corrected_location(location: &str, param: &str, actual: u32) -> Result<Option<String>, Error> {
    let mut url = Url::parse(location)?;

    let current = url
        .query_pairs()
        .find(|(k, _)| k == param)
        .map(|(_, v)| v.into_owned());
    let Some(current) = current else {
        return Ok(None);
    };
    if current.trim().parse::<u32>().ok() == Some(actual) {
        return Ok(None);
    }

    // Only the matching segments change; the rest keep their exact encoding.
    let query = url.query().unwrap_or_default();
    let rewritten: Vec<String> = query
        .split('&')
        .map(|segment| {
            let raw_key = segment.split_once('=').map_or(segment, |(k, _)| k);
            let key = form_urlencoded::parse(raw_key.as_bytes())
                .next()
                .map(|(k, _)| k.into_owned());
            if key.as_deref() == Some(param) {
                format!("{raw_key}={actual}")
            } else {
                segment.to_string()
            }
        })
        .collect();
    url.set_query(Some(&rewritten.join("&")));

    Ok(Some(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_largest_threshold_not_above_width() {
        assert_eq!(resolve_breakpoint(&[480, 768, 1024], 900), Some(768));
        assert_eq!(resolve_breakpoint(&[480, 768, 1024], 768), Some(768));
        assert_eq!(resolve_breakpoint(&[480, 768, 1024], 2000), Some(1024));
    }

    #[test]
    fn narrower_than_all_uses_lowest_bucket() {
        assert_eq!(resolve_breakpoint(&[480, 768, 1024], 300), Some(480));
    }

    #[test]
    fn empty_breakpoints_resolve_nothing() {
        assert_eq!(resolve_breakpoint(&[], 900), None);
        assert_eq!(BreakpointConfig::default().action(900), BreakpointAction::Proceed);
    }

    #[test]
    fn redundant_thresholds_are_inert() {
        assert_eq!(resolve_breakpoint(&[480, 480, 768, 768], 800), Some(768));
        assert_eq!(resolve_breakpoint(&[768, 480], 600), Some(480));
    }

    #[test]
    fn parses_embedded_json() {
        let config = BreakpointConfig::from_json(r#"{"breakpoints": [480, 768]}"#).unwrap();
        assert_eq!(config.breakpoints, vec![480, 768]);
        assert!(config.is_enabled());
        assert!(!BreakpointConfig::from_json("{}").unwrap().is_enabled());
        assert!(matches!(
            BreakpointConfig::from_json(r#"{"breakpoints": "wide"}"#),
            Err(Error::Breakpoints(_))
        ));
    }

    #[test]
    fn corrects_stale_width_in_place() {
        let fixed = corrected_location("http://host/movies/?page=2&_width=800&q=x", "_width", 1280)
            .unwrap();
        assert_eq!(fixed.as_deref(), Some("http://host/movies/?page=2&_width=1280&q=x"));
    }

    #[test]
    fn other_query_segments_keep_their_encoding() {
        let fixed = corrected_location("http://host/?q=a%20b&flag&_width=800", "_width", 1280).unwrap();
        assert_eq!(fixed.as_deref(), Some("http://host/?q=a%20b&flag&_width=1280"));

        let fixed = corrected_location("http://host/?name=x+y&_width=1&tag=%C3%A9", "_width", 2).unwrap();
        assert_eq!(fixed.as_deref(), Some("http://host/?name=x+y&_width=2&tag=%C3%A9"));
    }

    #[test]
    fn matching_or_absent_width_needs_no_correction() {
        assert_eq!(corrected_location("http://host/?_width=1280", "_width", 1280).unwrap(), None);
        assert_eq!(corrected_location("http://host/?page=2", "_width", 1280).unwrap(), None);
    }

    #[test]
    fn unparseable_width_is_corrected() {
        let fixed = corrected_location("http://host/?_width=abc", "_width", 1024).unwrap();
        assert_eq!(fixed.as_deref(), Some("http://host/?_width=1024"));
    }

    #[test]
    fn invalid_location_is_an_error() {
        assert!(matches!(
            corrected_location("not a url", "_width", 1),
            Err(Error::InvalidUrl(_))
        ));
    }
}
