use bbz_model::{EntityOption, RelatedEntity};

/// Text shown for an entity without a default alias.
pub const UNNAMED_TEXT: &str = "(unnamed)";

/// Project a related entity into a picker option.
///
/// Returns `None` when no entity is given.
pub fn entity_to_option(entity: Option<&RelatedEntity>) -> Option<EntityOption> {
    let entity = entity?;
    Some(EntityOption {
        id: entity.bbid.clone(),
        text: entity
            .default_alias
            .as_ref()
            .map_or_else(|| UNNAMED_TEXT.to_string(), |alias| alias.name.clone()),
        entity_type: entity.entity_type,
        disambiguation: entity
            .disambiguation
            .as_ref()
            .map(|disambiguation| disambiguation.comment.clone()),
        default_alias: entity.default_alias.clone(),
    })
}
