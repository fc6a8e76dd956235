// ============================================================================
// CONFIRMATION VIEW - Pedido confirmado (/order/confirmation)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_confirmation;
use crate::models::OrderLineItem;
use crate::routes::Route;
use crate::state::ConfirmationState;
use crate::utils::DELIVERY_WINDOW;

#[function_component(ConfirmationView)]
pub fn confirmation_view() -> Html {
    let confirmation = use_confirmation();

    match &*confirmation.state {
        ConfirmationState::Loading => html! {
            <div class="page">
                <div class="loading">
                    <div class="spinner"></div>
                    <p>{"Loading order confirmation..."}</p>
                </div>
            </div>
        },
        // El control ya salió de la vista
        ConfirmationState::Redirecting(_) => html! {},
        ConfirmationState::Ready(items) => {
            let on_new_order = {
                let cb = confirmation.start_new_order.clone();
                Callback::from(move |_e: MouseEvent| cb.emit(()))
            };
            render_ready(items, on_new_order)
        }
    }
}

fn render_ready(items: &[OrderLineItem], on_new_order: Callback<MouseEvent>) -> Html {
    html! {
        <div class="page">
            <main class="main">
                <div class="header">
                    <div class="success-icon">{"✓"}</div>
                    <h1 class="title">{"Order Confirmed!"}</h1>
                    <p class="description">
                        {"Your inventory order has been successfully submitted and will be processed shortly."}
                    </p>
                </div>

                <div class="order-details">
                    <h2>{"Order Details"}</h2>
                    <div class="items-list">
                        { for items.iter().enumerate().map(|(index, item)| html! {
                            <div key={index} class="order-item">
                                <div class="item-info">
                                    <span class="sku">{ item.sku.clone() }</span>
                                    <span class="amount">{ format!("Quantity: {}", item.amount) }</span>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="delivery-info">
                    <h3>{"Delivery Information"}</h3>
                    <p>
                        {"Your items are expected to arrive within "}
                        <strong>{ DELIVERY_WINDOW }</strong>
                        {". You will receive a confirmation email with tracking information once your order ships."}
                    </p>
                </div>

                <div class="actions">
                    <button class="new-order-button" onclick={on_new_order}>
                        {"Place Another Order"}
                    </button>
                    <Link<Route> to={Route::Home} classes={classes!("home-button")}>
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            </main>
        </div>
    }
}
