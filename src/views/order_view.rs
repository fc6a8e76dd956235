// ============================================================================
// ORDER VIEW - Formulario de pedido (/order)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{OrderRow, OrderSummary};
use crate::hooks::use_order_form;
use crate::routes::Route;

#[function_component(OrderView)]
pub fn order_view() -> Html {
    let form = use_order_form();
    let state = (*form.state).clone();

    // Hasta leer la URL se muestra el formulario deshabilitado
    if !state.initialized {
        return render_loading();
    }

    let is_submitting = state.is_submitting;
    let removable = state.can_remove_rows();
    let can_submit = state.can_submit();

    let on_add = {
        let cb = form.add_row.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let on_cancel = {
        let cb = form.cancel.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let on_submit = {
        let cb = form.submit.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="page">
            <main class="main">
                { render_header() }

                <div class="order-form">
                    { for state.items.iter().enumerate().map(|(index, item)| html! {
                        <OrderRow
                            key={index}
                            index={index}
                            item={item.clone()}
                            removable={removable}
                            disabled={is_submitting}
                            on_update={form.update_row.clone()}
                            on_remove={form.remove_row.clone()}
                        />
                    }) }

                    <button type="button" class="add-button" onclick={on_add} disabled={is_submitting}>
                        {"+ Add Another Item"}
                    </button>
                </div>

                <OrderSummary items={form.valid_items.clone()} />

                <div class="actions">
                    <button type="button" class="cancel-button" onclick={on_cancel} disabled={is_submitting}>
                        {"Cancel"}
                    </button>
                    <button type="button" class="order-button" onclick={on_submit} disabled={!can_submit}>
                        { if is_submitting { "Processing..." } else { "Order Now" } }
                    </button>
                </div>

                { render_back_link() }
            </main>
        </div>
    }
}

fn render_header() -> Html {
    html! {
        <div class="header">
            <h1 class="title">{"Order Inventory"}</h1>
            <p class="description">{"Add SKU codes and quantities for the items you want to order."}</p>
        </div>
    }
}

fn render_back_link() -> Html {
    html! {
        <div class="navigation">
            <Link<Route> to={Route::Home} classes={classes!("back-link")}>
                {"← Back to Home"}
            </Link<Route>>
        </div>
    }
}

fn render_loading() -> Html {
    html! {
        <div class="page">
            <main class="main">
                { render_header() }
                <div class="order-form">
                    <div class="order-item">
                        <div class="input-group">
                            <label class="label">{"SKU Code"}</label>
                            <input type="text" class="input" placeholder="Loading..." disabled=true />
                        </div>
                        <div class="input-group">
                            <label class="label">{"Amount"}</label>
                            <input type="number" class="input" disabled=true />
                        </div>
                    </div>
                </div>
                { render_back_link() }
            </main>
        </div>
    }
}
