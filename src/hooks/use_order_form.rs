// ============================================================================
// USE ORDER FORM HOOK - Estado + acciones del formulario de pedido
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::error::SubmitError;
use crate::hooks::navigate;
use crate::models::{OrderField, OrderLineItem};
use crate::routes::Route;
use crate::state::OrderFormState;
use crate::utils::show_alert;
use crate::viewmodels::OrderViewModel;

#[derive(Clone)]
pub struct UseOrderFormHandle {
    pub state: UseStateHandle<OrderFormState>,
    /// Derivado en cada render
    pub valid_items: Vec<OrderLineItem>,
    pub add_row: Callback<()>,
    pub remove_row: Callback<usize>,
    pub update_row: Callback<(usize, OrderField, String)>,
    pub submit: Callback<()>,
    pub cancel: Callback<()>,
}

#[hook]
pub fn use_order_form() -> UseOrderFormHandle {
    let state = use_state(OrderFormState::default);
    let navigator = use_navigator();
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    // Sembrar filas desde ?sku=... (se repite si cambia la query)
    {
        let state = state.clone();
        use_effect_with(query, move |query| {
            state.set(OrderViewModel::initial_state(query));
            || ()
        });
    }

    let add_row = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.add_row();
            state.set(new_state);
        })
    };

    let remove_row = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            let mut new_state = (*state).clone();
            if new_state.remove_row(index) {
                state.set(new_state);
            }
        })
    };

    let update_row = {
        let state = state.clone();
        Callback::from(move |(index, field, value): (usize, OrderField, String)| {
            let mut new_state = (*state).clone();
            if new_state.update_row(index, field, &value) {
                state.set(new_state);
            }
        })
    };

    let cancel = {
        let state = state.clone();
        Callback::from(move |_| {
            log::info!("🧹 [ORDER] Formulario reiniciado");
            let mut new_state = (*state).clone();
            new_state.reset();
            state.set(new_state);
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_| {
            // Snapshot al pulsar: es lo que se persiste tras la espera
            let snapshot = (*state).clone();
            let submitting = match OrderViewModel::begin_submission(&snapshot) {
                Ok(next) => next,
                Err(e @ SubmitError::NothingToSubmit) => {
                    log::warn!("⚠️ [ORDER] Envío rechazado: sin líneas válidas");
                    show_alert(&e.to_string());
                    return;
                }
                Err(e) => {
                    log::debug!("[ORDER] Envío ignorado: {}", e);
                    return;
                }
            };

            log::info!("📤 [ORDER] Enviando pedido con {} líneas...", snapshot.valid_items().len());
            state.set(submitting);

            // Placeholder de la llamada al backend: espera fija, sin cancelación
            let navigator = navigator.clone();
            Timeout::new(CONFIG.submit_delay_ms, move || {
                let route = match OrderViewModel::new() {
                    Ok(vm) => match vm.submit(&snapshot) {
                        Ok(route) => route,
                        Err(e) => {
                            log::error!("❌ [ORDER] Envío descartado: {}", e);
                            return;
                        }
                    },
                    Err(e) => {
                        log::error!("❌ [ORDER] No se pudo guardar el pedido: {}", e);
                        Route::Confirmation
                    }
                };
                navigate(navigator.as_ref(), &route);
            })
            .forget();
        })
    };

    let valid_items = state.valid_items();

    UseOrderFormHandle {
        state,
        valid_items,
        add_row,
        remove_row,
        update_row,
        submit,
        cancel,
    }
}
