//! `Remote` over HTTP

use std::sync::Arc;

use reqwest::Client;
use tables_pro::{FetchRequest, Fragment, Method, Outcome, Remote, Response};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use url::Url;

use crate::config::HttpRemoteConfig;
use crate::error::HttpError;
use crate::headers::{
    HX_CURRENT_URL, HX_REQUEST, HX_RETARGET, HX_TARGET, HX_TRIGGER, HX_TRIGGER_NAME, directive,
    header_str,
};

/// Fragment transport backed by `reqwest`.
///
/// [`Remote::request`] returns immediately: the request runs as a task on
/// the given runtime and its [`Response`] is delivered through the channel
/// returned by [`HttpRemote::new`]. The host feeds those into
/// `Page::apply_response`. Failed requests are logged and produce no
/// response. Cheap to clone.
#[derive(Clone)]
pub struct HttpRemote {
    inner: Arc<HttpRemoteInner>,
    handle: Handle,
    responses: mpsc::UnboundedSender<Response>,
}

struct HttpRemoteInner {
    http_client: Client,
    config: HttpRemoteConfig,
}

impl HttpRemote {
    /// Create a remote spawning onto `handle`, and the receiving end for
    /// its responses.
    pub fn new(
        config: HttpRemoteConfig,
        handle: Handle,
    ) -> Result<(Self, mpsc::UnboundedReceiver<Response>), HttpError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;
        let (responses, rx) = mpsc::unbounded_channel();

        let remote = Self {
            inner: Arc::new(HttpRemoteInner {
                http_client,
                config,
            }),
            handle,
            responses,
        };
        Ok((remote, rx))
    }

    pub fn config(&self) -> &HttpRemoteConfig {
        &self.inner.config
    }

    /// Perform one request and wait for its response.
    pub async fn send(&self, request: FetchRequest) -> Result<Response, HttpError> {
        self.inner.send(request).await
    }

    /// The absolute URL a request is sent to, GET values included.
    pub fn request_url(&self, request: &FetchRequest) -> Result<Url, HttpError> {
        self.inner.request_url(request)
    }
}

impl HttpRemoteInner {
    fn request_url(&self, request: &FetchRequest) -> Result<Url, HttpError> {
        let base = if request.current_url.is_empty() {
            self.config.base_url.as_deref()
        } else {
            Some(request.current_url.as_str())
        };

        let resolved = match base {
            Some(base) => Url::parse(base).and_then(|base| base.join(&request.url)),
            None => Url::parse(&request.url),
        };
        let mut url = resolved.map_err(|e| HttpError::InvalidUrl(format!("'{}': {e}", request.url)))?;

        if request.method == Method::Get && !request.values.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.values);
        }
        Ok(url)
    }

    async fn send(&self, request: FetchRequest) -> Result<Response, HttpError> {
        let url = self.request_url(&request)?;
        log::debug!(
            "[http] {} {url} trigger=#{} target=#{}",
            request.method,
            request.source,
            request.target
        );

        let mut builder = match request.method {
            Method::Get => self.http_client.get(url),
            Method::Put => self.http_client.put(url).form(&request.values),
        };
        builder = builder
            .header(HX_REQUEST, "true")
            .header(HX_TRIGGER, &request.source)
            .header(HX_TARGET, &request.target);
        if let Some(name) = &request.source_name {
            builder = builder.header(HX_TRIGGER_NAME, name);
        }
        if !request.current_url.is_empty() {
            builder = builder.header(HX_CURRENT_URL, &request.current_url);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HttpError::http(status.as_u16(), message));
        }

        // Retarget is a CSS selector; only id selectors map onto the document.
        let retarget = header_str(response.headers(), HX_RETARGET)
            .map(|selector| selector.trim_start_matches('#').to_string());
        let directive = directive(response.headers());
        let outcome = match directive {
            Some(outcome) => outcome,
            None => Outcome::Swap(Fragment::Html(response.text().await?)),
        };

        Ok(Response {
            request,
            retarget,
            outcome,
        })
    }
}

impl Remote for HttpRemote {
    fn request(&mut self, request: FetchRequest) {
        let inner = self.inner.clone();
        let responses = self.responses.clone();
        self.handle.spawn(async move {
            let target = request.target.clone();
            match inner.send(request).await {
                Ok(response) => {
                    if responses.send(response).is_err() {
                        log::debug!("[http] page is gone, dropping response for #{target}");
                    }
                }
                Err(e) => log::warn!("[http] request for #{target} failed: {e}"),
            }
        });
    }
}

impl std::fmt::Debug for HttpRemote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRemote")
            .field("config", &self.inner.config)
            .finish()
    }
}
