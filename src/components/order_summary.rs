use yew::prelude::*;

use crate::models::OrderLineItem;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderSummaryProps {
    pub items: Vec<OrderLineItem>,
}

/// Resumen de líneas válidas (no renderiza nada si está vacío)
#[function_component(OrderSummary)]
pub fn order_summary(props: &OrderSummaryProps) -> Html {
    if props.items.is_empty() {
        return html! {};
    }

    html! {
        <div class="summary">
            <h3>{"Order Summary"}</h3>
            <div class="summary-items">
                { for props.items.iter().enumerate().map(|(index, item)| html! {
                    <div key={index} class="summary-item">
                        <span class="sku">{ item.sku.clone() }</span>
                        <span class="amount">{ format!("Qty: {}", item.amount) }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}
