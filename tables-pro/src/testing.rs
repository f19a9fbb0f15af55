//! Recording collaborators for tests and scripted sessions.
//!
//! Both types are cheap handles: clone one, give the clone to the page,
//! and inspect what the page did through the handle you kept.

use std::cell::RefCell;
use std::rc::Rc;

use crate::remote::{FetchRequest, Navigator, Remote};

/// A [`Remote`] that records requests instead of sending them.
#[derive(Debug, Default, Clone)]
pub struct RecordingRemote {
    requests: Rc<RefCell<Vec<FetchRequest>>>,
}

impl RecordingRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<FetchRequest> {
        std::mem::take(&mut *self.requests.borrow_mut())
    }

    pub fn last(&self) -> Option<FetchRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.borrow().is_empty()
    }
}

impl Remote for RecordingRemote {
    fn request(&mut self, request: FetchRequest) {
        self.requests.borrow_mut().push(request);
    }
}

/// A browser-level action the page asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorAction {
    Navigate(String),
    Reload,
    Submit(String),
}

/// A [`Navigator`] that records actions instead of leaving the page.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    actions: Rc<RefCell<Vec<NavigatorAction>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<NavigatorAction> {
        self.actions.borrow().clone()
    }

    pub fn take(&self) -> Vec<NavigatorAction> {
        std::mem::take(&mut *self.actions.borrow_mut())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.actions
            .borrow_mut()
            .push(NavigatorAction::Navigate(url.to_string()));
    }

    fn reload(&mut self) {
        self.actions.borrow_mut().push(NavigatorAction::Reload);
    }

    fn submit(&mut self, form_id: &str) {
        self.actions
            .borrow_mut()
            .push(NavigatorAction::Submit(form_id.to_string()));
    }
}
