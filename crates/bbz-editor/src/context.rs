//! Contextual entities named on the creation page's query string.

use tracing::debug;

pub const PUBLISHER_PARAM: &str = "publisher";
pub const EDITION_GROUP_PARAM: &str = "edition-group";
pub const WORK_PARAM: &str = "work";

/// Bbids of the entities an Edition is being created from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationContext {
    pub publisher: Option<String>,
    pub edition_group: Option<String>,
    pub work: Option<String>,
}

impl CreationContext {
    /// Read the contextual bbids from query parameters.
    ///
    /// Bbids are opaque and kept exactly as given; only an empty value counts
    /// as absent. Unknown keys are ignored and a repeated key keeps its last
    /// non-empty value.
    pub fn from_query<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut context = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                PUBLISHER_PARAM => &mut context.publisher,
                EDITION_GROUP_PARAM => &mut context.edition_group,
                WORK_PARAM => &mut context.work,
                other => {
                    debug!(param = other, "ignoring query parameter");
                    continue;
                }
            };
            *slot = Some(value.to_string());
        }
        context
    }

    #[must_use]
    pub fn with_publisher(mut self, bbid: impl Into<String>) -> Self {
        self.publisher = Some(bbid.into());
        self
    }

    #[must_use]
    pub fn with_edition_group(mut self, bbid: impl Into<String>) -> Self {
        self.edition_group = Some(bbid.into());
        self
    }

    #[must_use]
    pub fn with_work(mut self, bbid: impl Into<String>) -> Self {
        self.work = Some(bbid.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.publisher.is_none() && self.edition_group.is_none() && self.work.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_parameters() {
        let context = CreationContext::from_query([
            ("publisher", "p-1"),
            ("edition-group", "eg-1"),
            ("work", "w-1"),
        ]);
        assert_eq!(context.publisher.as_deref(), Some("p-1"));
        assert_eq!(context.edition_group.as_deref(), Some("eg-1"));
        assert_eq!(context.work.as_deref(), Some("w-1"));
    }

    #[test]
    fn empty_values_are_absent() {
        let context = CreationContext::from_query([("publisher", ""), ("edition-group", "")]);
        assert!(context.is_empty());
    }

    #[test]
    fn bbids_are_passed_through_untrimmed() {
        let context = CreationContext::from_query([("work", " w-1 "), ("publisher", "  ")]);
        assert_eq!(context.work.as_deref(), Some(" w-1 "));
        assert_eq!(context.publisher.as_deref(), Some("  "));
    }

    #[test]
    fn repeated_key_keeps_last_non_empty_value() {
        let context =
            CreationContext::from_query([("work", "w-1"), ("work", "w-2"), ("work", "")]);
        assert_eq!(context.work.as_deref(), Some("w-2"));
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let context = CreationContext::from_query([("author", "a-1"), ("work", "w-1")]);
        assert_eq!(context, CreationContext::default().with_work("w-1"));
    }
}
