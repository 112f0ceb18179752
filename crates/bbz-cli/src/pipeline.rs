//! File-backed entry points to the transformation pipeline.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bbz_editor::{CreationContext, EditorProps, create_editor_props};
use bbz_model::{Edition, FormState, SubmissionPayload};
use bbz_transform::{
    StandardConstructors, TransformOptions, edition_to_form_state, transform_new_form,
};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::fixtures::FixtureStore;

/// Read and deserialize a JSON file.
///
/// # Errors
///
/// Fails when the file cannot be read or does not match `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load a persisted edition and build its editor form state.
///
/// # Errors
///
/// Fails when the edition file cannot be loaded.
pub fn form_state_from_file(path: &Path) -> Result<(Edition, FormState)> {
    let edition: Edition = read_json(path)?;
    let state = edition_to_form_state(&edition);
    info!(bbid = %edition.bbid, "built form state");
    Ok((edition, state))
}

/// Load a submitted form state and transform it into a payload.
///
/// # Errors
///
/// Fails when the form file cannot be loaded or lacks a required section.
pub fn submission_from_file(path: &Path) -> Result<SubmissionPayload> {
    let form: FormState = read_json(path)?;
    let payload = transform_new_form(&form, &StandardConstructors)
        .with_context(|| format!("failed to transform {}", path.display()))?;
    info!(
        aliases = payload.aliases.len(),
        relationships = payload.relationships.len(),
        "built submission payload"
    );
    Ok(payload)
}

/// Build creation-page props against a fixture store.
///
/// # Errors
///
/// Fails when the runtime cannot start or a contextual lookup fails.
pub fn create_props(
    fixtures: &FixtureStore,
    context: &CreationContext,
    options: &TransformOptions,
) -> Result<EditorProps> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let props = runtime.block_on(create_editor_props(
        fixtures,
        context,
        fixtures.reference().clone(),
        options,
    ))?;
    Ok(props)
}
