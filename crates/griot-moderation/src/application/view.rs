//! Derived view engine for the moderation queue.
//!
//! The operator sees the canonical queue narrowed by two independent axes:
//! a status tab and a free-text search over title and requester. Filters
//! live in a `watch` channel so the front end can redraw on either a list
//! change or a filter change.

use std::fmt;
use std::str::FromStr;

use griot_core::filter::{DerivedView, ViewQuery};
use griot_core::store::Snapshot;
use tokio::sync::watch;

use crate::domain::request::{PublicationRequest, RequestStatus};

/// Status tab selected by the operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusTab {
    /// Every request.
    #[default]
    All,
    /// Requests awaiting a decision.
    Pending,
    /// Every request that is not pending.
    Processed,
}

impl StatusTab {
    /// Whether a request in `status` is visible under this tab.
    #[must_use]
    pub fn admits(self, status: RequestStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status.is_pending(),
            Self::Processed => !status.is_pending(),
        }
    }
}

impl fmt::Display for StatusTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Processed => "processed",
        })
    }
}

impl FromStr for StatusTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "processed" => Ok(Self::Processed),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// Active filters of the moderation view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModerationFilters {
    /// Status tab.
    pub tab: StatusTab,
    /// Free-text search; blank means no restriction.
    pub search: String,
}

impl ModerationFilters {
    /// Whether `request` passes both axes.
    #[must_use]
    pub fn admits(&self, request: &PublicationRequest) -> bool {
        self.tab.admits(request.status())
            && ViewQuery::default()
                .with_text(self.search.as_str())
                .matches(request)
    }
}

/// Operator-controlled filter state.
#[derive(Debug)]
pub struct ViewState {
    tx: watch::Sender<ModerationFilters>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ModerationFilters::default())
    }
}

impl ViewState {
    /// Creates the state with initial filters.
    #[must_use]
    pub fn new(initial: ModerationFilters) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Current filters.
    #[must_use]
    pub fn filters(&self) -> ModerationFilters {
        self.tx.borrow().clone()
    }

    /// Selects a status tab.
    pub fn set_tab(&self, tab: StatusTab) {
        self.tx.send_if_modified(|filters| {
            let changed = filters.tab != tab;
            filters.tab = tab;
            changed
        });
    }

    /// Sets the free-text search.
    pub fn set_search(&self, search: impl Into<String>) {
        let search = search.into();
        self.tx.send_if_modified(|filters| {
            let changed = filters.search != search;
            filters.search = search;
            changed
        });
    }

    /// Leaves the `Pending` tab for `All`, if it is active. Returns whether
    /// the tab changed.
    pub fn leave_pending_tab(&self) -> bool {
        self.tx.send_if_modified(|filters| {
            if filters.tab == StatusTab::Pending {
                filters.tab = StatusTab::All;
                true
            } else {
                false
            }
        })
    }

    /// Subscribes to filter changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ModerationFilters> {
        self.tx.subscribe()
    }
}

/// Projects a queue snapshot through the active filters.
#[must_use]
pub fn derive_moderation_view(
    snapshot: Snapshot<PublicationRequest>,
    filters: &ModerationFilters,
) -> DerivedView<PublicationRequest> {
    DerivedView::from_snapshot(snapshot, |request| filters.admits(request))
}

#[cfg(test)]
mod tests {
    use griot_core::store::CanonicalList;
    use griot_test_support::request_dto;

    use super::*;

    fn queue() -> CanonicalList<PublicationRequest> {
        let list = CanonicalList::new();
        list.replace_all(
            [
                (1, "Conte des ancêtres", RequestStatus::Pending),
                (2, "Proverbe du jour", RequestStatus::Approved),
                (3, "Devinette", RequestStatus::Rejected),
                (4, "Conte publié", RequestStatus::Published),
            ]
            .into_iter()
            .map(|(id, title, status)| PublicationRequest::from(request_dto(id, title, status)))
            .collect(),
        );
        list
    }

    fn ids(view: &DerivedView<PublicationRequest>) -> Vec<i64> {
        view.iter().map(|request| request.id).collect()
    }

    #[test]
    fn test_processed_tab_is_complement_of_pending() {
        let list = queue();

        let pending = derive_moderation_view(
            list.snapshot(),
            &ModerationFilters {
                tab: StatusTab::Pending,
                search: String::new(),
            },
        );
        let processed = derive_moderation_view(
            list.snapshot(),
            &ModerationFilters {
                tab: StatusTab::Processed,
                search: String::new(),
            },
        );

        assert_eq!(ids(&pending), vec![1]);
        assert_eq!(ids(&processed), vec![2, 3, 4]);
    }

    #[test]
    fn test_search_and_tab_combine() {
        // Arrange
        let list = queue();
        let filters = ModerationFilters {
            tab: StatusTab::Processed,
            search: "CONTE".to_owned(),
        };

        // Act
        let view = derive_moderation_view(list.snapshot(), &filters);

        // Assert
        assert_eq!(ids(&view), vec![4]);
    }

    #[test]
    fn test_search_matches_requester_name() {
        let list = queue();
        let filters = ModerationFilters {
            tab: StatusTab::All,
            search: "traoré".to_owned(),
        };

        let view = derive_moderation_view(list.snapshot(), &filters);

        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_leave_pending_tab_only_acts_on_pending() {
        // Arrange
        let state = ViewState::new(ModerationFilters {
            tab: StatusTab::Pending,
            search: "x".to_owned(),
        });
        let rx = state.subscribe();

        // Act
        let switched = state.leave_pending_tab();

        // Assert
        assert!(switched);
        assert!(rx.has_changed().unwrap());
        assert_eq!(state.filters().tab, StatusTab::All);
        assert_eq!(state.filters().search, "x");
        assert!(!state.leave_pending_tab());
    }

    #[test]
    fn test_setting_same_tab_does_not_notify() {
        let state = ViewState::default();
        let rx = state.subscribe();

        state.set_tab(StatusTab::All);

        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_tab_parses_cli_values() {
        assert_eq!("processed".parse::<StatusTab>().unwrap(), StatusTab::Processed);
        assert_eq!(StatusTab::Pending.to_string(), "pending");
        assert!("done".parse::<StatusTab>().is_err());
    }
}
