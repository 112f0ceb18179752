//! Editor form state to submission payload.

use bbz_model::{DateParts, FormState, ReleaseEventPayload, SubmissionPayload};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::TransformError;
use crate::constructors::PayloadConstructors;
use crate::date::{date_parts_to_iso, date_parts_to_naive_date, is_complete};
use crate::numeric::coerce_integer;

/// Edition-specific payload fields the create-or-edit handler copies onto
/// the new revision.
pub const ADDITIONAL_EDITION_PROPS: [&str; 8] = [
    "editionGroupBbid",
    "width",
    "height",
    "depth",
    "weight",
    "pages",
    "formatId",
    "statusId",
];

/// Convert a submitted form state into the payload for the persistence
/// layer.
///
/// Only type coercion happens here. Malformed numbers and impossible dates
/// are carried through for the persistence layer to reject.
///
/// # Errors
///
/// Fails when the form has no edition or submission section, or when a
/// constructor fails.
pub fn transform_new_form<C>(
    form: &FormState,
    constructors: &C,
) -> Result<SubmissionPayload, TransformError>
where
    C: PayloadConstructors + ?Sized,
{
    let section = form
        .edition_section
        .as_ref()
        .ok_or(TransformError::MissingSection("editionSection"))?;
    let submission = form
        .submission_section
        .as_ref()
        .ok_or(TransformError::MissingSection("submissionSection"))?;

    let aliases = constructors.construct_aliases(&form.alias_editor, &form.name_section)?;
    let identifiers = constructors.construct_identifiers(&form.identifier_editor)?;
    let relationships = constructors.construct_relationships(&form.relationship_section)?;

    let release_events = section
        .release_date
        .as_ref()
        .map(release_events)
        .unwrap_or_default();

    let languages = section
        .languages
        .iter()
        .flatten()
        .map(|language| language.value)
        .collect();

    debug!(
        aliases = aliases.len(),
        identifiers = identifiers.len(),
        relationships = relationships.len(),
        release_events = release_events.len(),
        "transformed edition form"
    );

    Ok(SubmissionPayload {
        aliases,
        depth: coerce_integer(&section.depth),
        disambiguation: form.name_section.disambiguation.clone(),
        edition_group_bbid: section
            .edition_group
            .as_ref()
            .map(|edition_group| edition_group.id.clone()),
        format_id: coerce_integer(&section.format),
        height: coerce_integer(&section.height),
        identifiers,
        languages,
        note: submission.note.clone(),
        pages: coerce_integer(&section.pages),
        publishers: section
            .publisher
            .as_ref()
            .map(|publisher| vec![publisher.id.clone()]),
        relationships,
        release_events,
        status_id: coerce_integer(&section.status),
        weight: coerce_integer(&section.weight),
        width: coerce_integer(&section.width),
    })
}

/// A single release event when a year was entered; otherwise none.
fn release_events(date: &DateParts) -> Vec<ReleaseEventPayload> {
    if !date.has_year() {
        if !date.day.is_empty() || !date.month.is_empty() {
            debug!("dropping release date without a year");
        }
        return Vec::new();
    }
    if is_complete(date) && date_parts_to_naive_date(date).is_none() {
        warn!(
            year = %date.year,
            month = %date.month,
            day = %date.day,
            "release date is not a calendar date"
        );
    }
    date_parts_to_iso(date)
        .map(|date| vec![ReleaseEventPayload { date }])
        .unwrap_or_default()
}

/// Entity-specific fields of `payload` that are present, keyed by their
/// payload name.
///
/// # Errors
///
/// Fails only if the payload cannot be serialized.
pub fn additional_props(payload: &SubmissionPayload) -> Result<Map<String, Value>, TransformError> {
    let Value::Object(object) = serde_json::to_value(payload)? else {
        return Ok(Map::new());
    };
    Ok(object
        .into_iter()
        .filter(|(key, _)| ADDITIONAL_EDITION_PROPS.contains(&key.as_str()))
        .collect())
}
