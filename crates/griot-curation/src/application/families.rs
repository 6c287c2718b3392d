//! Family directory.

use griot_core::clock::Clock;
use griot_core::error::DomainError;
use griot_core::filter::{DerivedView, Period, ViewQuery, resolve_category};
use griot_core::gateway::CurationGateway;
use griot_core::store::{CanonicalList, Snapshot};

use crate::domain::family::Family;

/// Filters offered on the family listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyFilters {
    /// Free text over family name and administrator names.
    pub search: String,
    /// Creation period.
    pub period: Period,
}

/// Canonical list of families.
#[derive(Debug, Default)]
pub struct FamilyDirectory {
    list: CanonicalList<Family>,
}

impl FamilyDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the directory with one fetch from `gateway`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Fetch` if the gateway fails; the previous list
    /// is kept.
    pub async fn load(&self, gateway: &dyn CurationGateway) -> Result<usize, DomainError> {
        let dtos = gateway.list_families().await.map_err(|source| {
            tracing::warn!(error = %source, "failed to load families");
            DomainError::Fetch {
                resource: "families",
                source,
            }
        })?;
        let families: Vec<Family> = dtos.into_iter().map(Family::from).collect();
        let count = families.len();
        self.list.replace_all(families);
        tracing::info!(count, "families loaded");
        Ok(count)
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<Family> {
        self.list.snapshot()
    }

    /// Families passing `filters`, with "today" taken from `clock`.
    #[must_use]
    pub fn view(&self, filters: &FamilyFilters, clock: &dyn Clock) -> DerivedView<Family> {
        let query = ViewQuery::default()
            .with_text(filters.search.as_str())
            .with_date(filters.period.predicate(clock));
        DerivedView::from_snapshot(self.list.snapshot(), |family| query.matches(family))
    }

    /// The label content items carry for the family with `family_id`.
    #[must_use]
    pub fn label_of(&self, family_id: i64) -> Option<String> {
        resolve_category(family_id, self.list.snapshot().items())
    }
}
