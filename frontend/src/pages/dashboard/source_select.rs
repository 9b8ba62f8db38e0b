use shared::view::source_options;
use shared::Source;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SourceSelectProps {
    pub sources: Vec<Source>,
    /// Current value; empty selects "All sources"
    pub selected: AttrValue,
    pub onchange: Callback<String>,
}

/// Source dropdown, rebuilt from every loaded page
#[function_component(SourceSelect)]
pub fn source_select(props: &SourceSelectProps) -> Html {
    let onchange = {
        let callback = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            callback.emit(select.value());
        })
    };

    html! {
        <select id="source" name="source_id" class="form-select" {onchange}>
            {
                for source_options(&props.sources).into_iter().map(|option| {
                    let selected = option.value == props.selected.as_str();
                    html! {
                        <option key={option.value.clone()} value={option.value} {selected}>{ option.label }</option>
                    }
                })
            }
        </select>
    }
}
