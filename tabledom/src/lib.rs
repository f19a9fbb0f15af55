pub mod document;
pub mod element;
pub mod event;
pub mod html;
pub mod listeners;
pub mod query;

pub use document::{Document, BODY_ID};
pub use element::{Content, Element, InputKind};
pub use event::{Event, EventKind, Modifiers};
pub use listeners::Listeners;
