// ============================================================================
// APP - Router principal (/, /order, /order/confirmation)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::views::{ConfirmationView, LandingView, NotFoundView, OrderView};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    log::debug!("🧭 [APP] Ruta activa: {:?}", route);
    match route {
        Route::Home => html! { <LandingView /> },
        Route::Order => html! { <OrderView /> },
        Route::Confirmation => html! { <ConfirmationView /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}
