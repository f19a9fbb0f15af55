//! The boundary to the server: fragment fetches and browser navigation.

use tabledom::{Document, Element};

use crate::swap::Generations;

/// HTTP method of a fragment fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for a server-rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub method: Method,
    /// Request URL. Empty means the current page URL.
    pub url: String,
    /// Id of the element the request originates from.
    pub source: String,
    /// Control name of the source element, if it has one.
    pub source_name: Option<String>,
    /// Id of the element whose content the response replaces.
    pub target: String,
    /// Parameters: query string for GET, form body for PUT.
    pub values: Vec<(String, String)>,
    /// Page location at the time of the request.
    pub current_url: String,
    /// Request generation, see [`Generations`].
    pub generation: u64,
}

/// Server-rendered content for a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Elements(Vec<Element>),
    /// Markup, parsed in the context of the element it replaces.
    Html(String),
}

/// What the server asked the page to do with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Replace the target's content.
    Swap(Fragment),
    /// Navigate the browser to another URL.
    Redirect(String),
    /// Reload the current page.
    Refresh,
    /// Raise the application "trigger" event on the body.
    Trigger { url: String },
}

/// A completed fetch, handed back to the page for application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub request: FetchRequest,
    /// Target override requested by the server.
    pub retarget: Option<String>,
    pub outcome: Outcome,
}

impl Response {
    pub fn swap(request: FetchRequest, fragment: Fragment) -> Self {
        Self {
            request,
            retarget: None,
            outcome: Outcome::Swap(fragment),
        }
    }

    pub fn retarget(mut self, target: impl Into<String>) -> Self {
        self.retarget = Some(target.into());
        self
    }

    /// The element the response applies to.
    pub fn target(&self) -> &str {
        self.retarget.as_deref().unwrap_or(&self.request.target)
    }
}

/// Asynchronous fragment transport.
///
/// `request` must return immediately. The response is delivered later
/// through [`Page::apply_response`](crate::Page::apply_response); failures
/// are the transport's to report.
pub trait Remote {
    fn request(&mut self, request: FetchRequest);
}

/// Full-page browser actions.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
    fn reload(&mut self);
    /// Submit the form with the given id using standard form semantics.
    fn submit(&mut self, form_id: &str);
}

/// Stamps requests with the page location and a generation, then hands
/// them to the remote.
pub struct Fetcher {
    remote: Box<dyn Remote>,
    generations: Generations,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("generations", &self.generations)
            .finish_non_exhaustive()
    }
}

impl Fetcher {
    pub fn new(remote: Box<dyn Remote>) -> Self {
        Self {
            remote,
            generations: Generations::new(),
        }
    }

    /// Issue a fetch from `source` into `target`. Returns the generation.
    pub fn fetch(
        &mut self,
        doc: &Document,
        method: Method,
        url: &str,
        source: &str,
        target: &str,
        values: Vec<(String, String)>,
    ) -> u64 {
        let generation = self.generations.issue(target);
        let source_name = doc.get(source).and_then(|el| el.name.clone());
        log::debug!("[fetch] {method} '{url}' source=#{source} target=#{target} gen={generation}");
        self.remote.request(FetchRequest {
            method,
            url: url.to_string(),
            source: source.to_string(),
            source_name,
            target: target.to_string(),
            values,
            current_url: doc.location().to_string(),
            generation,
        });
        generation
    }

    /// Whether nothing newer has been issued for the response's request
    /// target, or issued for or swapped into the region it replaces.
    pub fn is_current(&self, response: &Response) -> bool {
        let generation = response.request.generation;
        self.generations.is_current(&response.request.target, generation)
            && self.generations.is_current(response.target(), generation)
    }

    /// Record a swap of content from `generation` into `region`.
    pub fn applied(&mut self, region: &str, generation: u64) {
        self.generations.applied(region, generation);
    }
}
