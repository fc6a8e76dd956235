// ============================================================================
// LANDING VIEW - Página de inicio (sin estado)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{sku_query_pairs, Route};
use crate::utils::EXAMPLE_SKUS;

/// Link a /order con ?sku=...&sku=...
type SkuLink = Link<Route, Vec<(String, String)>>;

#[function_component(LandingView)]
pub fn landing_view() -> Html {
    let prefilled = sku_query_pairs(&EXAMPLE_SKUS);

    html! {
        <div class="page">
            <main class="main">
                <h1 class="title">{"Inventory Order System"}</h1>
                <p class="description">
                    {"Welcome to our inventory management system. You can easily order new \
                      inventory by providing SKU codes and quantities. Our system will \
                      process your orders and ensure timely delivery."}
                </p>

                <div class="features">
                    <div class="feature">
                        <h3>{"Quick Ordering"}</h3>
                        <p>{"Order inventory items using SKU codes with pre-filled quantities from URLs"}</p>
                    </div>
                    <div class="feature">
                        <h3>{"Flexible Management"}</h3>
                        <p>{"Add multiple SKUs and adjust quantities as needed"}</p>
                    </div>
                    <div class="feature">
                        <h3>{"Fast Processing"}</h3>
                        <p>{"Orders are processed quickly with 15-20 day delivery expectations"}</p>
                    </div>
                </div>

                <div class="ctas">
                    <Link<Route> to={Route::Order} classes={classes!("primary")}>
                        {"Order Inventory"}
                    </Link<Route>>
                    <SkuLink to={Route::Order} query={Some(prefilled)} classes={classes!("secondary")}>
                        {"Order with Pre-filled SKUs"}
                    </SkuLink>
                </div>
            </main>
        </div>
    }
}
