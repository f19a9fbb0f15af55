//! Page lifetime: load, initialization and event routing.

use tabledom::{Content, Document, Event, EventKind, Listeners, Modifiers, BODY_ID};

use crate::breakpoint::{BreakpointAction, BreakpointConfig, corrected_location, request_layout};
use crate::config::PageConfig;
use crate::context::PageContext;
use crate::edit::InlineEditController;
use crate::error::Error;
use crate::features::{Feature, Features};
use crate::filter::FilterRefreshController;
use crate::remote::{Fetcher, Fragment, Method, Navigator, Outcome, Remote, Response};
use crate::selection::{SelectionController, SelectionState};

/// Where the page is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, `load` not called yet.
    Loading,
    /// Waiting for the width-appropriate layout from the server.
    AwaitingLayout,
    /// Controllers initialized; reacting to events.
    Interactive,
}

/// Result of [`Page::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No breakpoints: the page initialized immediately.
    Interactive,
    /// A layout fetch for `breakpoint` was issued; the page initializes
    /// when its response is applied.
    AwaitingLayout { breakpoint: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    TableClick,
    SelectAllPage,
    SelectAll,
    AutoSubmit,
    FilterGroup,
    Trigger,
}

/// One page load: the document, its controllers and their listeners.
///
/// There is exactly one `Page` per document; it is dropped on navigation.
/// All handlers run synchronously on the caller's thread and re-query the
/// document each time, so responses applied between events are seen.
#[derive(Debug)]
pub struct Page {
    cx: PageContext,
    listeners: Listeners<Handler>,
    selection: Option<SelectionController>,
    edit: InlineEditController,
    filter: FilterRefreshController,
    phase: Phase,
}

impl Page {
    pub fn new(
        doc: Document,
        config: PageConfig,
        remote: impl Remote + 'static,
        navigator: impl Navigator + 'static,
    ) -> Self {
        Self {
            cx: PageContext {
                doc,
                config,
                features: Features::none(),
                fetcher: Fetcher::new(Box::new(remote)),
                navigator: Box::new(navigator),
            },
            listeners: Listeners::new(),
            selection: None,
            edit: InlineEditController::new(),
            filter: FilterRefreshController::new(),
            phase: Phase::Loading,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn doc(&self) -> &Document {
        &self.cx.doc
    }

    /// Direct document access, for hosts mirroring DOM changes made
    /// outside the page's own handlers.
    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.cx.doc
    }

    pub fn config(&self) -> &PageConfig {
        &self.cx.config
    }

    pub fn features(&self) -> &Features {
        &self.cx.features
    }

    /// The selection controller, `None` until initialized or when the
    /// select-all control is missing.
    pub fn selection(&self) -> Option<&SelectionController> {
        self.selection.as_ref()
    }

    pub fn edit(&self) -> &InlineEditController {
        &self.edit
    }

    pub fn selection_state(&self) -> SelectionState {
        SelectionController::state(&self.cx.doc, &self.cx.config)
    }

    /// Handle the page load: request a width-specific layout if the page
    /// declares breakpoints, otherwise initialize right away.
    pub fn load(&mut self) -> Result<LoadOutcome, Error> {
        let breakpoints = BreakpointConfig::from_document(&self.cx.doc, &self.cx.config)?;
        match breakpoints.action(self.cx.doc.outer_width()) {
            BreakpointAction::Proceed => {
                self.init();
                Ok(LoadOutcome::Interactive)
            }
            BreakpointAction::RequestLayout { breakpoint } => {
                request_layout(&mut self.cx, breakpoint);
                self.phase = Phase::AwaitingLayout;
                Ok(LoadOutcome::AwaitingLayout { breakpoint })
            }
        }
    }

    /// Initialize the interactive controllers. Calling it again once the
    /// page is interactive does nothing.
    pub fn init(&mut self) {
        if self.phase == Phase::Interactive {
            log::debug!("[page] already initialized");
            return;
        }

        self.correct_stale_width();

        self.cx.features = Features::detect(&self.cx.doc, &self.cx.config);
        self.listeners.clear();
        self.bind();

        self.selection = match SelectionController::init(&mut self.cx) {
            Ok(selection) => {
                if self.cx.features.has(Feature::SelectAllPage) {
                    let id = self.cx.config.select_all_page_id.clone();
                    self.listeners.listen(id, EventKind::Click, Handler::SelectAllPage);
                }
                let id = self.cx.config.select_all_id.clone();
                self.listeners.listen(id, EventKind::Click, Handler::SelectAll);
                Some(selection)
            }
            Err(e) => {
                log::warn!("[page] selection disabled: {e}");
                None
            }
        };

        self.phase = Phase::Interactive;
        log::info!("[page] interactive ({} listeners)", self.listeners.len());
    }

    fn correct_stale_width(&mut self) {
        let location = self.cx.doc.location().to_string();
        if location.is_empty() {
            return;
        }
        let width = self.cx.doc.outer_width();
        match corrected_location(&location, &self.cx.config.width_param, width) {
            Ok(Some(url)) => {
                log::info!("[page] width parameter is stale, reloading at {width}");
                self.cx.navigate(&url);
            }
            Ok(None) => {}
            Err(e) => log::warn!("[page] cannot check width parameter: {e}"),
        }
    }

    fn bind(&mut self) {
        // Tables are delegated from the body so replaced tables keep working.
        self.listeners.listen(BODY_ID, EventKind::Click, Handler::TableClick);
        self.listeners.listen(BODY_ID, EventKind::Trigger, Handler::Trigger);

        for id in FilterRefreshController::auto_submit_controls(&self.cx.doc, &self.cx.config) {
            self.listeners.listen(id, EventKind::Change, Handler::AutoSubmit);
        }
        for id in FilterRefreshController::scoped_groups(&self.cx.doc, &self.cx.config) {
            self.listeners.listen(id, EventKind::Change, Handler::FilterGroup);
        }
    }

    /// Route an event to every listener it reaches.
    pub fn dispatch(&mut self, event: Event) {
        let handlers = self.listeners.resolve(&self.cx.doc, &event);
        if handlers.is_empty() {
            log::debug!("[page] {event:?} reached no listener");
        }
        for (handler, container) in handlers {
            self.handle(handler, &container, &event);
        }
    }

    fn handle(&mut self, handler: Handler, container: &str, event: &Event) {
        match (handler, event) {
            (Handler::TableClick, Event::Click { target, modifiers }) => {
                self.table_click(target, *modifiers);
            }
            (Handler::SelectAllPage, _) => {
                if let Some(selection) = self.selection.as_mut() {
                    selection.select_all_page(&mut self.cx);
                }
            }
            (Handler::SelectAll, _) => {
                if let Some(selection) = self.selection.as_mut() {
                    selection.select_all(&mut self.cx);
                }
            }
            (Handler::AutoSubmit, _) => self.filter.on_auto_submit_change(&mut self.cx),
            (Handler::FilterGroup, _) => self.filter.on_group_change(&mut self.cx, container),
            (Handler::Trigger, Event::Trigger { url }) => {
                let results = self.cx.config.results_id.clone();
                self.cx.fetch(Method::Get, url, &results, &results, Vec::new());
            }
            (handler, event) => log::debug!("[page] {handler:?} ignores {event:?}"),
        }
    }

    fn table_click(&mut self, target: &str, modifiers: Modifiers) {
        let Some(el) = self.cx.doc.get(target) else {
            return;
        };
        let is_row_checkbox = el.name.as_deref() == Some(self.cx.config.checkbox_name.as_str());
        let is_cell = el.tag.eq_ignore_ascii_case("td");
        if self.cx.doc.closest_tag(target, "table").is_none() {
            return;
        }

        if is_row_checkbox {
            match self.selection.as_mut() {
                Some(selection) => selection.on_row_checkbox_click(&mut self.cx, target, modifiers.shift),
                None => log::debug!("[page] row checkbox #{target} clicked without selection"),
            }
        } else if is_cell {
            self.edit.on_cell_click(&mut self.cx, target);
        }
    }

    /// Click `id`: apply the default action, then dispatch. Clicks on
    /// missing or disabled elements are dropped.
    pub fn click(&mut self, id: &str, modifiers: Modifiers) {
        if self.cx.doc.activate(id) {
            self.dispatch(Event::Click {
                target: id.to_string(),
                modifiers,
            });
        }
    }

    /// Set a control's value (if given) and dispatch a change event.
    pub fn change(&mut self, id: &str, value: Option<&str>) -> Result<(), Error> {
        let el = self
            .cx
            .doc
            .get_mut(id)
            .ok_or_else(|| Error::UnknownElement(id.to_string()))?;
        if let Some(value) = value {
            el.value = Some(value.to_string());
        }
        self.dispatch(Event::change(id));
        Ok(())
    }

    /// Raise the application "trigger" event asking for a results refresh.
    pub fn trigger(&mut self, url: &str) {
        self.dispatch(Event::Trigger {
            url: url.to_string(),
        });
    }

    /// Re-sync highlighting and the count with the document.
    pub fn refresh_count(&mut self) {
        if let Some(selection) = self.selection.as_ref() {
            selection.refresh_count(&mut self.cx);
        }
    }

    /// Apply a completed fetch. Responses superseded by a newer request
    /// for the same region, or by newer content already swapped into it,
    /// are dropped.
    pub fn apply_response(&mut self, response: Response) {
        if !self.cx.fetcher.is_current(&response) {
            log::debug!(
                "[page] dropping stale response for #{} (gen {})",
                response.target(),
                response.request.generation
            );
            return;
        }

        let target = response.target().to_string();
        let generation = response.request.generation;
        let layout = self.phase == Phase::AwaitingLayout
            && response.request.target == self.cx.config.media_query_id;

        let outcome = match response.outcome {
            Outcome::Swap(fragment) => {
                let swapped = match fragment {
                    Fragment::Elements(elements) => {
                        self.cx.doc.swap_inner(&target, Content::Children(elements))
                    }
                    Fragment::Html(markup) => self.cx.doc.swap_html(&target, &markup),
                };
                if swapped {
                    self.cx.fetcher.applied(&target, generation);
                } else {
                    log::debug!("[page] swap target #{target} is gone");
                }
                if layout {
                    self.init();
                } else {
                    self.refresh_count();
                }
                return;
            }
            outcome => outcome,
        };

        if layout {
            log::warn!("[page] layout request answered with {outcome:?}, initializing without it");
            self.init();
        }
        match outcome {
            Outcome::Redirect(url) => self.cx.navigate(&url),
            Outcome::Refresh => {
                log::info!("[page] reload");
                self.cx.navigator.reload();
            }
            Outcome::Trigger { url } => self.trigger(&url),
            Outcome::Swap(_) => {}
        }
    }
}
