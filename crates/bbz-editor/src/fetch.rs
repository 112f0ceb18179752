//! Joint lookup of the contextual entities on the creation path.

use std::future::Future;

use bbz_model::{EntityOption, EntityType, RelatedEntity};
use bbz_transform::{ContextualOptions, entity_to_option};
use tracing::{debug, warn};

use crate::context::CreationContext;
use crate::error::FetchError;

/// Loads a related entity, with its default alias, by bbid.
///
/// `Ok(None)` means the bbid does not resolve to an entity.
pub trait EntityFetcher {
    fn fetch(
        &self,
        entity_type: EntityType,
        bbid: &str,
    ) -> impl Future<Output = Result<Option<RelatedEntity>, FetchError>> + Send;
}

/// Fetch every contextual entity named in `context` and project each into a
/// picker option.
///
/// The lookups run concurrently. An entity that does not resolve, or
/// resolves to a different entity type, leaves its slot empty.
///
/// # Errors
///
/// The first failed lookup fails the whole load.
pub async fn load_contextual_options<F>(
    fetcher: &F,
    context: &CreationContext,
) -> Result<ContextualOptions, FetchError>
where
    F: EntityFetcher + Sync,
{
    let (publisher, edition_group, work) = tokio::try_join!(
        lookup(fetcher, EntityType::Publisher, context.publisher.as_deref()),
        lookup(
            fetcher,
            EntityType::EditionGroup,
            context.edition_group.as_deref()
        ),
        lookup(fetcher, EntityType::Work, context.work.as_deref()),
    )?;
    Ok(ContextualOptions {
        publisher,
        edition_group,
        work,
    })
}

async fn lookup<F>(
    fetcher: &F,
    entity_type: EntityType,
    bbid: Option<&str>,
) -> Result<Option<EntityOption>, FetchError>
where
    F: EntityFetcher + Sync,
{
    let Some(bbid) = bbid else {
        return Ok(None);
    };
    match fetcher.fetch(entity_type, bbid).await? {
        None => {
            warn!(%entity_type, bbid, "contextual entity not found, skipping");
            Ok(None)
        }
        Some(entity) if entity.entity_type != entity_type => {
            warn!(
                expected = %entity_type,
                actual = %entity.entity_type,
                bbid,
                "contextual entity has the wrong type, skipping"
            );
            Ok(None)
        }
        Some(entity) => {
            debug!(%entity_type, bbid, "resolved contextual entity");
            Ok(entity_to_option(Some(&entity)))
        }
    }
}
