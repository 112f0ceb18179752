//! Props handed to the entity editor.

use bbz_model::{Edition, EntityType, FormState};
use bbz_transform::edition_to_form_state;
use serde::{Deserialize, Serialize};
use tracing::info_span;

use crate::reference::ReferenceData;

pub const CREATE_HEADING: &str = "Add Edition";
pub const EDIT_HEADING: &str = "Edit Edition";
pub const CREATE_SUBMISSION_URL: &str = "/edition/create/handler";

/// Everything the editor needs to render one Edition page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorProps {
    pub entity_type: EntityType,
    pub heading: String,
    pub submission_url: String,
    pub initial_state: FormState,
    #[serde(flatten)]
    pub reference: ReferenceData,
}

impl EditorProps {
    pub fn for_create(initial_state: FormState, reference: ReferenceData) -> Self {
        Self {
            entity_type: EntityType::Edition,
            heading: CREATE_HEADING.to_string(),
            submission_url: CREATE_SUBMISSION_URL.to_string(),
            initial_state,
            reference,
        }
    }
}

/// Submission endpoint for edits of the Edition `bbid`.
pub fn edit_submission_url(bbid: &str) -> String {
    format!("/{}/{bbid}/edit/handler", EntityType::Edition.slug())
}

/// Props for the edit page of a loaded Edition.
pub fn edit_editor_props(edition: &Edition, reference: ReferenceData) -> EditorProps {
    let _span = info_span!("edit_editor_props", bbid = %edition.bbid).entered();
    EditorProps {
        entity_type: EntityType::Edition,
        heading: EDIT_HEADING.to_string(),
        submission_url: edit_submission_url(&edition.bbid),
        initial_state: edition_to_form_state(edition),
        reference,
    }
}

/// Page title for an Edition page: `Edition “<name>”` when the edition has a
/// default alias, `Edition` otherwise.
pub fn edition_page_title(edition: Option<&Edition>) -> String {
    match edition.and_then(Edition::display_name) {
        Some(name) => format!("Edition “{name}”"),
        None => "Edition".to_string(),
    }
}
