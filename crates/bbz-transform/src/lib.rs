//! Edition state transformation.
//!
//! This crate converts between the three shapes of an Edition:
//!
//! - **form_state**: persisted Edition to editor form state
//! - **bootstrap**: initial relationships when creating in context
//! - **submission**: editor form state to submission payload
//! - **option**: related entity to picker option
//! - **alias**: default alias selection
//! - **date** / **numeric**: partial ISO dates and integer coercion
//!
//! # Example
//!
//! ```ignore
//! use bbz_transform::{StandardConstructors, edition_to_form_state, transform_new_form};
//!
//! let state = edition_to_form_state(&edition);
//! let payload = transform_new_form(&state, &StandardConstructors)?;
//! ```

pub mod alias;
pub mod bootstrap;
pub mod constructors;
pub mod date;
mod error;
pub mod form_state;
pub mod numeric;
pub mod option;
pub mod options;
pub mod submission;

pub use alias::{DefaultFlag, default_alias_index, split_default_alias};
pub use bootstrap::{BootstrapDraft, ContextualOptions, bootstrap_relationships};
pub use constructors::{PayloadConstructors, StandardConstructors};
pub use date::{date_parts_to_iso, date_parts_to_naive_date, iso_date_to_parts};
pub use error::TransformError;
pub use form_state::edition_to_form_state;
pub use numeric::{coerce_integer, parse_int_prefix};
pub use option::{UNNAMED_TEXT, entity_to_option};
pub use options::{BootstrapRule, ContextRole, TransformOptions};
pub use submission::{ADDITIONAL_EDITION_PROPS, additional_props, transform_new_form};
