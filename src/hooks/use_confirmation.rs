// ============================================================================
// USE CONFIRMATION HOOK - Carga del pedido guardado + "nuevo pedido"
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::navigate;
use crate::routes::Route;
use crate::state::ConfirmationState;
use crate::viewmodels::ConfirmationViewModel;

#[derive(Clone)]
pub struct UseConfirmationHandle {
    pub state: UseStateHandle<ConfirmationState>,
    pub start_new_order: Callback<()>,
}

#[hook]
pub fn use_confirmation() -> UseConfirmationHandle {
    let state = use_state(ConfirmationState::default);
    let navigator = use_navigator();

    // Una sola vez por montaje
    {
        let state = state.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            let next = match ConfirmationViewModel::new() {
                Ok(vm) => vm.initialize(),
                Err(e) => {
                    log::warn!("⚠️ [CONFIRMATION] sessionStorage no disponible: {}", e);
                    ConfirmationState::Redirecting(Route::Order)
                }
            };
            let redirect = next.redirect_target().cloned();
            state.set(next);
            if let Some(route) = redirect {
                navigate(navigator.as_ref(), &route);
            }
            || ()
        });
    }

    let start_new_order = Callback::from(move |_| {
        let route = match ConfirmationViewModel::new() {
            Ok(vm) => vm.start_new_order(),
            Err(e) => {
                log::error!("❌ [CONFIRMATION] sessionStorage no disponible: {}", e);
                Route::Order
            }
        };
        navigate(navigator.as_ref(), &route);
    });

    UseConfirmationHandle {
        state,
        start_new_order,
    }
}
