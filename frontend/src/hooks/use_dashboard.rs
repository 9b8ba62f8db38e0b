//! Hook owning the dashboard's filter state and data loading.
//!
//! Every submit or page change bumps a request counter; each bump issues one
//! GET. Requests are never cancelled, so whichever response resolves last is
//! the one on screen.

use crate::utils;
use chrono::Local;
use gloo_net::http::Request;
use shared::protocol::DASHBOARD_DATA_PATH;
use shared::{DashboardData, FilterState, FormFields};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Alert text for any failed load
pub const LOAD_FAILED_MESSAGE: &str = "An error occurred while loading data";

/// Why a dashboard request failed. The user sees one message for all of them.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(gloo_net::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Parse(gloo_net::Error),
}

/// A response together with the filters it was requested with
#[derive(Clone, PartialEq)]
pub struct LoadedPage {
    pub filters: FilterState,
    pub data: DashboardData,
}

/// Page currently on screen
#[derive(Clone, Default, PartialEq)]
pub struct PageSlot(pub Option<LoadedPage>);

impl Reducible for PageSlot {
    type Action = Result<LoadedPage, LoadError>;

    /// A successful load replaces the page; a failed one keeps the old page
    fn reduce(self: Rc<Self>, result: Self::Action) -> Rc<Self> {
        match result {
            Ok(page) => Rc::new(PageSlot(Some(page))),
            Err(_) => self,
        }
    }
}

/// Committed filters plus a counter that changes on every user action
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub filters: FilterState,
    request: u64,
}

pub enum DashboardAction {
    Submit(FormFields),
    NextPage,
    PreviousPage,
}

impl DashboardState {
    pub fn initial(form: &FormFields) -> Self {
        Self {
            filters: FilterState::default().submitted(form, &Local),
            request: 0,
        }
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let filters = match action {
            DashboardAction::Submit(fields) => self.filters.submitted(&fields, &Local),
            DashboardAction::NextPage => self.filters.next_page(),
            DashboardAction::PreviousPage => {
                // Already on the first page: no request
                if self.filters.offset < self.filters.limit {
                    return self;
                }
                self.filters.previous_page()
            }
        };
        Rc::new(Self {
            filters,
            request: self.request + 1,
        })
    }
}

/// Return value from the use_dashboard hook.
pub struct UseDashboard {
    /// Last page that loaded successfully
    pub page: Option<LoadedPage>,
    /// Apply the form and reload from the first page
    pub submit: Callback<FormFields>,
    pub next_page: Callback<()>,
    pub previous_page: Callback<()>,
}

async fn fetch_dashboard(filters: &FilterState) -> Result<DashboardData, LoadError> {
    let pairs = filters.query_pairs();
    let response = Request::get(&utils::api_url(DASHBOARD_DATA_PATH))
        .query(pairs.iter().map(|(key, value)| (*key, value.as_str())))
        .send()
        .await
        .map_err(LoadError::Network)?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    response
        .json::<DashboardData>()
        .await
        .map_err(LoadError::Parse)
}

fn report_load_failure(error: &LoadError) {
    log::error!("Failed to load dashboard data: {}", error);
    gloo::dialogs::alert(LOAD_FAILED_MESSAGE);
}

/// Hook for the dashboard's query cycle.
///
/// Loads the first page on mount using `initial_form`, then again after each
/// `submit`, `next_page` or `previous_page`. A failed load leaves `page`
/// untouched.
///
/// # Example
/// ```ignore
/// let dashboard = use_dashboard(FormFields::default());
/// dashboard.next_page.emit(());
/// ```
#[hook]
pub fn use_dashboard(initial_form: FormFields) -> UseDashboard {
    let state = use_reducer(move || DashboardState::initial(&initial_form));
    let page = use_reducer(PageSlot::default);

    {
        let page = page.dispatcher();
        use_effect_with((*state).clone(), move |state| {
            let filters = state.filters.clone();
            spawn_local(async move {
                log::debug!("Requesting dashboard data with {:?}", filters);
                let result = fetch_dashboard(&filters).await;
                match &result {
                    Ok(data) => log::debug!(
                        "Received {} mentions and {} sources",
                        data.mentions.len(),
                        data.sources.len()
                    ),
                    Err(e) => report_load_failure(e),
                }
                page.dispatch(result.map(|data| LoadedPage { filters, data }));
            });
            || ()
        });
    }

    let submit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |fields: FormFields| dispatcher.dispatch(DashboardAction::Submit(fields)))
    };

    let next_page = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::NextPage))
    };

    let previous_page = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::PreviousPage))
    };

    UseDashboard {
        page: page.0.clone(),
        submit,
        next_page,
        previous_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Rc<DashboardState> {
        Rc::new(DashboardState::initial(&FormFields::default()))
    }

    #[test]
    fn test_initial_state_is_first_page() {
        let state = state();
        assert_eq!(state.filters.offset, 0);
        assert_eq!(state.filters.limit, 100);
        assert_eq!(state.request, 0);
    }

    #[test]
    fn test_next_page_issues_request() {
        let next = state().reduce(DashboardAction::NextPage);
        assert_eq!(next.filters.offset, 100);
        assert_eq!(next.request, 1);
    }

    #[test]
    fn test_previous_on_first_page_is_noop() {
        let initial = state();
        let after = initial.clone().reduce(DashboardAction::PreviousPage);
        assert!(Rc::ptr_eq(&initial, &after));
    }

    #[test]
    fn test_previous_after_next() {
        let state = state()
            .reduce(DashboardAction::NextPage)
            .reduce(DashboardAction::NextPage)
            .reduce(DashboardAction::PreviousPage);
        assert_eq!(state.filters.offset, 100);
        assert_eq!(state.request, 3);
    }

    #[test]
    fn test_submit_resets_offset_and_reloads_even_if_unchanged() {
        let paged = state().reduce(DashboardAction::NextPage);
        let submitted = paged
            .clone()
            .reduce(DashboardAction::Submit(FormFields::default()));
        assert_eq!(submitted.filters.offset, 0);
        assert_ne!(submitted.request, paged.request);

        let resubmitted = submitted
            .clone()
            .reduce(DashboardAction::Submit(FormFields::default()));
        assert_eq!(resubmitted.filters, submitted.filters);
        assert_ne!(*resubmitted, *submitted);
    }

    fn loaded(offset: i64) -> LoadedPage {
        LoadedPage {
            filters: FilterState {
                offset,
                ..FilterState::default()
            },
            data: DashboardData::default(),
        }
    }

    #[test]
    fn test_failed_load_keeps_previous_page() {
        let shown = Rc::new(PageSlot::default()).reduce(Ok(loaded(100)));
        let after = shown.clone().reduce(Err(LoadError::Status(500)));
        assert!(Rc::ptr_eq(&shown, &after));
        assert_eq!(after.0.as_ref().map(|page| page.filters.offset), Some(100));
    }

    #[test]
    fn test_failed_first_load_shows_nothing() {
        let slot = Rc::new(PageSlot::default()).reduce(Err(LoadError::Status(502)));
        assert!(slot.0.is_none());
    }

    #[test]
    fn test_successful_load_replaces_page() {
        let slot = Rc::new(PageSlot::default())
            .reduce(Ok(loaded(0)))
            .reduce(Ok(loaded(200)));
        assert_eq!(slot.0.as_ref().map(|page| page.filters.offset), Some(200));
    }

    #[test]
    fn test_submit_applies_platform() {
        let submitted = state().reduce(DashboardAction::Submit(FormFields {
            platform: "vk".to_string(),
            ..FormFields::default()
        }));
        assert_eq!(submitted.filters.platform, "vk");
    }
}
