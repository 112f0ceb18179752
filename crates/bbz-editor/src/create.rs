//! Creation page assembly.

use bbz_model::FormState;
use bbz_transform::{TransformOptions, bootstrap_relationships};
use tracing::{Instrument, debug, info_span};

use crate::context::CreationContext;
use crate::error::Result;
use crate::fetch::{EntityFetcher, load_contextual_options};
use crate::props::EditorProps;
use crate::reference::ReferenceData;

/// Props for the Edition creation page.
///
/// Contextual entities are fetched jointly, then applied to an empty form in
/// the order publisher, edition group, work.
///
/// # Errors
///
/// Fails when any contextual lookup fails.
pub async fn create_editor_props<F>(
    fetcher: &F,
    context: &CreationContext,
    reference: ReferenceData,
    options: &TransformOptions,
) -> Result<EditorProps>
where
    F: EntityFetcher + Sync,
{
    let span = info_span!(
        "create_editor_props",
        publisher = context.publisher.as_deref(),
        edition_group = context.edition_group.as_deref(),
        work = context.work.as_deref(),
    );
    async move {
        let contextual = load_contextual_options(fetcher, context).await?;
        let initial_state = bootstrap_relationships(
            FormState::default(),
            &contextual,
            &reference.relationship_types,
            options,
        );
        debug!(
            relationships = initial_state.relationship_section.relationships.len(),
            "built initial creation state"
        );
        Ok(EditorProps::for_create(initial_state, reference))
    }
    .instrument(span)
    .await
}
