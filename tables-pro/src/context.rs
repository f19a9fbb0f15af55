//! Shared state handed to every controller.

use tabledom::Document;

use crate::config::PageConfig;
use crate::features::Features;
use crate::remote::{Fetcher, Method, Navigator};

/// Everything a handler may read or act on during one page lifetime.
pub struct PageContext {
    pub doc: Document,
    pub config: PageConfig,
    pub features: Features,
    pub fetcher: Fetcher,
    pub navigator: Box<dyn Navigator>,
}

impl std::fmt::Debug for PageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageContext")
            .field("config", &self.config)
            .field("features", &self.features)
            .field("fetcher", &self.fetcher)
            .finish_non_exhaustive()
    }
}

impl PageContext {
    /// Issue a fragment fetch. Returns immediately.
    pub fn fetch(
        &mut self,
        method: Method,
        url: &str,
        source: &str,
        target: &str,
        values: Vec<(String, String)>,
    ) -> u64 {
        self.fetcher
            .fetch(&self.doc, method, url, source, target, values)
    }

    pub fn navigate(&mut self, url: &str) {
        log::info!("[page] navigate to {url}");
        self.navigator.navigate(url);
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.doc.get_mut(id) {
            el.set_text(text);
        }
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(el) = self.doc.get_mut(id) {
            el.disabled = disabled;
        }
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) {
        if let Some(el) = self.doc.get_mut(id) {
            el.checked = checked;
        }
    }
}
