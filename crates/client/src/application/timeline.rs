//! Timeline edit form rules

use async_trait::async_trait;
use lumen_domain::{IconCatalog, TimelineDraft, Validation};

use crate::application::forms::{AsyncHandler, FormSchema};

/// Name, description and icon checks against the configured icon catalog.
pub struct TimelineSchema {
    icons: IconCatalog,
}

impl TimelineSchema {
    pub fn new(icons: IconCatalog) -> Self {
        Self { icons }
    }

    pub fn icons(&self) -> &IconCatalog {
        &self.icons
    }
}

/// Archive handler to offer for `draft`, if any.
///
/// A new draft has nothing to archive, so its handler is dropped even when
/// the caller supplied one.
pub fn archive_action(
    draft: &TimelineDraft,
    handler: Option<AsyncHandler<()>>,
) -> Option<AsyncHandler<()>> {
    handler.filter(|_| draft.can_archive())
}

#[async_trait(?Send)]
impl FormSchema for TimelineSchema {
    type Values = TimelineDraft;

    async fn validate(&self, values: &TimelineDraft) -> Validation<TimelineDraft> {
        values.validate(&self.icons)
    }
}
