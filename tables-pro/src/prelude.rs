//! Common imports for hosts embedding a page.

pub use tabledom::{Content, Document, Element, Event, Modifiers};

pub use crate::breakpoint::BreakpointConfig;
pub use crate::config::PageConfig;
pub use crate::error::Error;
pub use crate::page::{LoadOutcome, Page, Phase};
pub use crate::remote::{FetchRequest, Fragment, Method, Navigator, Outcome, Remote, Response};
pub use crate::selection::SelectionState;
