use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{OrderField, OrderLineItem};

#[derive(Properties, PartialEq, Clone)]
pub struct OrderRowProps {
    pub index: usize,
    pub item: OrderLineItem,
    pub on_update: Callback<(usize, OrderField, String)>,
    pub on_remove: Callback<usize>,
    /// Solo se muestra "×" si hay más de una fila
    #[prop_or(false)]
    pub removable: bool,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(OrderRow)]
pub fn order_row(props: &OrderRowProps) -> Html {
    let index = props.index;
    let sku_id = format!("sku-{}", index);
    let amount_id = format!("amount-{}", index);

    let on_sku_input = {
        let cb = props.on_update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((index, OrderField::Sku, input.value()));
        })
    };

    let on_amount_input = {
        let cb = props.on_update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((index, OrderField::Amount, input.value()));
        })
    };

    let on_remove_click = {
        let cb = props.on_remove.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(index))
    };

    html! {
        <div class="order-item">
            <div class="input-group">
                <label for={sku_id.clone()} class="label">{"SKU Code"}</label>
                <input
                    id={sku_id}
                    type="text"
                    class="input"
                    placeholder="Enter SKU code"
                    value={props.item.sku.clone()}
                    oninput={on_sku_input}
                    disabled={props.disabled}
                />
            </div>

            <div class="input-group">
                <label for={amount_id.clone()} class="label">{"Amount"}</label>
                <input
                    id={amount_id}
                    type="number"
                    min="1"
                    class="input"
                    value={props.item.amount.to_string()}
                    oninput={on_amount_input}
                    disabled={props.disabled}
                />
            </div>

            if props.removable {
                <button
                    type="button"
                    class="remove-button"
                    aria-label="Remove item"
                    onclick={on_remove_click}
                    disabled={props.disabled}
                >
                    {"×"}
                </button>
            }
        </div>
    }
}
