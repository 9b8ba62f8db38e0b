//! Filter form: platform, date range and source.
//!
//! The form is controlled: every edit goes back to the page as a new
//! `FormFields` draft, and nothing is requested until the form is submitted.

use super::source_select::SourceSelect;
use shared::{FormFields, Platform, Source};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterFormProps {
    pub fields: FormFields,
    pub sources: Vec<Source>,
    pub on_change: Callback<FormFields>,
    pub on_submit: Callback<FormFields>,
}

#[function_component(FilterForm)]
pub fn filter_form(props: &FilterFormProps) -> Html {
    let fields = &props.fields;

    let on_platform = {
        let fields = fields.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(FormFields {
                platform: select.value(),
                ..fields.clone()
            });
        })
    };

    let on_start_date = {
        let fields = fields.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FormFields {
                start_date: input.value(),
                ..fields.clone()
            });
        })
    };

    let on_end_date = {
        let fields = fields.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FormFields {
                end_date: input.value(),
                ..fields.clone()
            });
        })
    };

    let on_source = {
        let fields = fields.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |source_id: String| {
            on_change.emit(FormFields {
                source_id,
                ..fields.clone()
            });
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(fields.clone());
        })
    };

    html! {
        <form id="filterForm" class="filter-form" {onsubmit}>
            <div class="filter-field">
                <label for="platform">{ "Platform" }</label>
                <select id="platform" name="platform" class="form-select" onchange={on_platform}>
                    <option value="" selected={fields.platform.is_empty()}>{ "All platforms" }</option>
                    {
                        for Platform::known().into_iter().map(|platform| {
                            let selected = fields.platform == platform.as_str();
                            html! {
                                <option value={platform.as_str().to_string()} {selected}>
                                    { platform.label().to_string() }
                                </option>
                            }
                        })
                    }
                </select>
            </div>
            <div class="filter-field">
                <label for="startDate">{ "From" }</label>
                <input
                    id="startDate"
                    name="start_date"
                    type="date"
                    class="form-control"
                    value={fields.start_date.clone()}
                    onchange={on_start_date}
                />
            </div>
            <div class="filter-field">
                <label for="endDate">{ "To" }</label>
                <input
                    id="endDate"
                    name="end_date"
                    type="date"
                    class="form-control"
                    value={fields.end_date.clone()}
                    onchange={on_end_date}
                />
            </div>
            <div class="filter-field">
                <label for="source">{ "Source" }</label>
                <SourceSelect
                    sources={props.sources.clone()}
                    selected={AttrValue::from(fields.source_id.clone())}
                    onchange={on_source}
                />
            </div>
            <button type="submit" class="btn btn-primary">{ "Apply" }</button>
        </form>
    }
}
