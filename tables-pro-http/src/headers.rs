//! htmx header names and response directive parsing.

use reqwest::header::HeaderMap;
use serde::Deserialize;
use tables_pro::Outcome;

pub const HX_REQUEST: &str = "HX-Request";
pub const HX_TRIGGER: &str = "HX-Trigger";
pub const HX_TRIGGER_NAME: &str = "HX-Trigger-Name";
pub const HX_TARGET: &str = "HX-Target";
pub const HX_CURRENT_URL: &str = "HX-Current-URL";

pub const HX_REDIRECT: &str = "HX-Redirect";
pub const HX_REFRESH: &str = "HX-Refresh";
pub const HX_RETARGET: &str = "HX-Retarget";

#[derive(Debug, Deserialize)]
struct TriggerEvents {
    trigger: Option<TriggerDetail>,
}

#[derive(Debug, Deserialize)]
struct TriggerDetail {
    url: String,
}

pub(crate) fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// URL carried by a `trigger` event in an `HX-Trigger` response header.
///
/// Plain event names and JSON without a `trigger` event yield `None`.
pub fn trigger_url(header: &str) -> Option<String> {
    let events: TriggerEvents = serde_json::from_str(header).ok()?;
    events.trigger.map(|detail| detail.url)
}

/// The non-swap outcome a response asks for, if any.
///
/// A redirect wins over a refresh, which wins over a trigger event.
pub fn directive(headers: &HeaderMap) -> Option<Outcome> {
    if let Some(url) = header_str(headers, HX_REDIRECT) {
        return Some(Outcome::Redirect(url.to_string()));
    }
    if header_str(headers, HX_REFRESH) == Some("true") {
        return Some(Outcome::Refresh);
    }
    header_str(headers, HX_TRIGGER)
        .and_then(trigger_url)
        .map(|url| Outcome::Trigger { url })
}
