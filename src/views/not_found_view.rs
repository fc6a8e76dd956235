use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="page">
            <main class="main">
                <h1 class="title">{"Page not found"}</h1>
                <Link<Route> to={Route::Home} classes={classes!("back-link")}>
                    {"← Back to Home"}
                </Link<Route>>
            </main>
        </div>
    }
}
