// ============================================================================
// CONFIRMATION STATE - Máquina de estados de la confirmación
// ============================================================================
// Loading -> Redirecting (terminal, se sale de la vista)
// Loading -> Ready(items)
// ============================================================================

use crate::models::OrderLineItem;
use crate::routes::Route;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum ConfirmationState {
    #[default]
    Loading,
    Redirecting(Route),
    Ready(Vec<OrderLineItem>),
}

impl ConfirmationState {
    pub fn redirect_target(&self) -> Option<&Route> {
        match self {
            ConfirmationState::Redirecting(route) => Some(route),
            _ => None,
        }
    }
}
