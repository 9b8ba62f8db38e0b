use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found-container">
            <h1>{ "Page not found" }</h1>
            <Link<Route> to={Route::Dashboard}>{ "Back to dashboard" }</Link<Route>>
        </div>
    }
}
