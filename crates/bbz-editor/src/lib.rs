//! Editor props for the Edition pages.
//!
//! The edit page is built synchronously from a loaded Edition. The creation
//! page first resolves the contextual entities named on the query string
//! through an [`EntityFetcher`], then bootstraps the initial relationships.

pub mod context;
pub mod create;
mod error;
pub mod fetch;
pub mod props;
pub mod reference;

pub use context::CreationContext;
pub use create::create_editor_props;
pub use error::{EditorError, FetchError, Result};
pub use fetch::{EntityFetcher, load_contextual_options};
pub use props::{EditorProps, edit_editor_props, edit_submission_url, edition_page_title};
pub use reference::ReferenceData;
