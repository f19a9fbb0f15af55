//! Delegated event listeners.
//!
//! A listener is registered on a container element rather than on each
//! element it cares about. Dispatch walks from the event target up to the
//! body and collects every listener registered on that path, nearest
//! container first. Rows swapped in later are covered without rebinding.

use crate::document::{Document, BODY_ID};
use crate::event::{Event, EventKind};

#[derive(Debug, Clone)]
struct Listener<H> {
    container: String,
    kind: EventKind,
    handler: H,
}

/// Registry of delegated listeners, generic over the handler token the
/// owner uses to route a matched event.
#[derive(Debug, Clone)]
pub struct Listeners<H> {
    entries: Vec<Listener<H>>,
}

impl<H> Default for Listeners<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H: Clone + PartialEq> Listeners<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind` events bubbling through `container`.
    /// Registering the same triple twice is a no-op.
    pub fn listen(&mut self, container: impl Into<String>, kind: EventKind, handler: H) {
        let container = container.into();
        let exists = self
            .entries
            .iter()
            .any(|l| l.container == container && l.kind == kind && l.handler == handler);
        if !exists {
            log::debug!("[listeners] {kind:?} on {container}");
            self.entries.push(Listener {
                container,
                kind,
                handler,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Resolve the handlers an event reaches, as `(handler, container_id)`
    /// pairs in bubbling order.
    pub fn resolve(&self, doc: &Document, event: &Event) -> Vec<(H, String)> {
        let kind = event.kind();
        let path: Vec<String> = match event.target() {
            Some(target) => {
                let Some(el) = doc.get(target) else {
                    return Vec::new();
                };
                std::iter::once(el.id.clone())
                    .chain(doc.ancestors(target).into_iter().map(|a| a.id.clone()))
                    .collect()
            }
            None => vec![BODY_ID.to_string()],
        };

        let mut matched = Vec::new();
        for container in &path {
            for listener in &self.entries {
                if listener.kind == kind && &listener.container == container {
                    matched.push((listener.handler.clone(), container.clone()));
                }
            }
        }
        matched
    }
}
