//! Client-side interaction engine for server-rendered tables.
//!
//! A [`Page`] owns the live [`Document`](tabledom::Document) for one page
//! load. It resolves the responsive breakpoint, tracks row selection,
//! drives inline cell editing, and turns filter changes into fragment
//! fetches. All rendering stays on the server: the page only talks to it
//! through a [`Remote`] and a [`Navigator`].

pub mod breakpoint;
pub mod config;
pub mod context;
pub mod edit;
pub mod error;
pub mod features;
pub mod filter;
pub mod highlight;
pub mod page;
pub mod prelude;
pub mod remote;
pub mod selection;
pub mod swap;
pub mod testing;

pub use breakpoint::{BreakpointConfig, resolve_breakpoint};
pub use config::PageConfig;
pub use context::PageContext;
pub use edit::{CellEditState, CellId, InlineEditController, NavigationMode};
pub use error::Error;
pub use features::{Feature, Features};
pub use filter::FilterRefreshController;
pub use page::{LoadOutcome, Page, Phase};
pub use remote::{FetchRequest, Fetcher, Fragment, Method, Navigator, Outcome, Remote, Response};
pub use selection::{SelectionController, SelectionState};
