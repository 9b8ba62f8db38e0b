//! Main dashboard page component
//!
//! Owns the form draft and wires the filter form, table and pagination to
//! the `use_dashboard` hook.

use super::filter_form::FilterForm;
use super::mentions_table::MentionsTable;
use super::pagination::Pagination;
use crate::hooks::use_dashboard;
use chrono::Local;
use shared::view::restore_selection;
use shared::{FormFields, PagePosition, TableBody};
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let form = use_state(|| FormFields::with_default_range(Local::now().date_naive()));
    let dashboard = use_dashboard((*form).clone());

    let sources = dashboard
        .page
        .as_ref()
        .map(|page| page.data.sources.clone())
        .unwrap_or_default();

    // Drop a selected source that the latest page no longer lists
    {
        let form = form.clone();
        use_effect_with(sources.clone(), move |sources| {
            let restored = restore_selection(&form.source_id, sources);
            if restored != form.source_id {
                form.set(FormFields {
                    source_id: restored,
                    ..(*form).clone()
                });
            }
            || ()
        });
    }

    let body = TableBody::for_page(
        dashboard.page.as_ref().map(|page| page.data.mentions.as_slice()),
        &Local,
    );

    let buttons = dashboard
        .page
        .as_ref()
        .map(|page| {
            PagePosition::derive(page.filters.offset, page.data.mentions.len(), page.filters.limit)
                .buttons()
        })
        .unwrap_or_default();

    let on_change = {
        let form = form.clone();
        Callback::from(move |fields: FormFields| form.set(fields))
    };

    html! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <h1>{ "Mentions" }</h1>
            </header>
            <FilterForm
                fields={(*form).clone()}
                sources={sources}
                on_change={on_change}
                on_submit={dashboard.submit.clone()}
            />
            <MentionsTable body={body} />
            <Pagination
                buttons={buttons}
                on_previous={dashboard.previous_page.clone()}
                on_next={dashboard.next_page.clone()}
            />
        </div>
    }
}
