//! Mentions table

use shared::view::{COLUMN_HEADERS, NO_DATA_MESSAGE, OPEN_LINK_LABEL};
use shared::{MentionRow, TableBody};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MentionsTableProps {
    pub body: TableBody,
}

#[function_component(MentionsTable)]
pub fn mentions_table(props: &MentionsTableProps) -> Html {
    let body = match &props.body {
        TableBody::Pending => html! {},
        TableBody::NoData => html! {
            <tr>
                <td colspan={COLUMN_HEADERS.len().to_string()} class="text-center">{ NO_DATA_MESSAGE }</td>
            </tr>
        },
        TableBody::Rows(rows) => rows.iter().map(render_row).collect::<Html>(),
    };

    html! {
        <table class="table mentions-table">
            <thead>
                <tr>
                    { for COLUMN_HEADERS.iter().map(|label| html! { <th>{ *label }</th> }) }
                </tr>
            </thead>
            <tbody id="mentionsTable">
                { body }
            </tbody>
        </table>
    }
}

fn render_row(row: &MentionRow) -> Html {
    html! {
        <tr>
            <td class="timestamp">{ &row.datetime }</td>
            <td>{ &row.platform }</td>
            <td>{ &row.source_id }</td>
            <td class="mention-text">{ &row.text }</td>
            <td>
                {
                    match &row.link {
                        Some(link) => html! {
                            <a href={link.clone()} target="_blank" rel="noopener noreferrer" class="link-orange">
                                { OPEN_LINK_LABEL }
                            </a>
                        },
                        None => html! { { "-" } },
                    }
                }
            </td>
        </tr>
    }
}
