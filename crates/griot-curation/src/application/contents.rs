//! Content library: one canonical list per content kind.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use griot_core::dto::ContentKind;
use griot_core::error::DomainError;
use griot_core::filter::{DatePredicate, DerivedView, ViewQuery};
use griot_core::gateway::CurationGateway;
use griot_core::store::{CanonicalList, Snapshot};

use crate::application::families::FamilyDirectory;
use crate::domain::content::ContentItem;

/// Filters offered on a content listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFilters {
    /// Free text over title, description, creator, family and region.
    pub search: String,
    /// Selected family, resolved to its name through the family directory.
    pub family_id: Option<i64>,
    /// Exact region.
    pub region: Option<String>,
    /// Exact creation day.
    pub on_day: Option<NaiveDate>,
}

/// Canonical list of content items of one kind.
#[derive(Debug)]
pub struct ContentLibrary {
    kind: ContentKind,
    list: CanonicalList<ContentItem>,
}

impl ContentLibrary {
    /// Creates an empty library for `kind`.
    #[must_use]
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            list: CanonicalList::new(),
        }
    }

    /// The kind this library holds.
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Replaces the library with one fetch from `gateway`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Fetch` if the gateway fails; the previous list
    /// is kept.
    pub async fn load(&self, gateway: &dyn CurationGateway) -> Result<usize, DomainError> {
        let kind = self.kind;
        let dtos = gateway.list_contents(kind).await.map_err(|source| {
            tracing::warn!(kind = %kind, error = %source, "failed to load contents");
            DomainError::Fetch {
                resource: "contents",
                source,
            }
        })?;
        let items: Vec<ContentItem> = dtos
            .into_iter()
            .map(|dto| ContentItem::from_dto(kind, dto))
            .collect();
        let count = items.len();
        self.list.replace_all(items);
        tracing::info!(kind = %kind, count, "contents loaded");
        Ok(count)
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<ContentItem> {
        self.list.snapshot()
    }

    /// Whether an item with `content_id` is loaded.
    #[must_use]
    pub fn contains(&self, content_id: i64) -> bool {
        self.list
            .snapshot()
            .items()
            .iter()
            .any(|item| item.id == content_id)
    }

    /// Items passing `filters`. An unknown family id leaves the family
    /// axis unrestricted.
    #[must_use]
    pub fn view(
        &self,
        filters: &ContentFilters,
        families: &FamilyDirectory,
    ) -> DerivedView<ContentItem> {
        let query = ViewQuery::default()
            .with_text(filters.search.as_str())
            .with_date(filters.on_day.map(DatePredicate::on_day))
            .with_category(filters.family_id.and_then(|id| families.label_of(id)));
        let region = filters.region.as_deref();
        DerivedView::from_snapshot(self.list.snapshot(), |item| {
            query.matches(item)
                && region.is_none_or(|wanted| item.region.as_deref() == Some(wanted))
        })
    }

    /// Distinct regions, sorted.
    #[must_use]
    pub fn unique_regions(&self) -> Vec<String> {
        self.list
            .snapshot()
            .items()
            .iter()
            .filter_map(|item| item.region.clone())
            .filter(|region| !region.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of items per region, sorted by region.
    #[must_use]
    pub fn count_by_region(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for item in self.list.snapshot().items() {
            if let Some(region) = item.region.as_ref().filter(|r| !r.is_empty()) {
                *counts.entry(region.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Puts a server-created item at the head of the canonical list.
    pub(crate) fn prepend(&self, item: ContentItem) {
        self.list.prepend(item);
    }

    /// Drops the item with `content_id` from the canonical list. Returns
    /// whether an item was removed.
    pub(crate) fn remove(&self, content_id: i64) -> bool {
        self.list.remove_where(|item| item.id == content_id) > 0
    }
}
