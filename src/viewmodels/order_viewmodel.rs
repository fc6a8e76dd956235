// ============================================================================
// ORDER VIEWMODEL - LÓGICA DEL FORMULARIO DE PEDIDO
// ============================================================================
// Devuelve valores, los hooks actualizan el estado y navegan
// ============================================================================

use crate::error::{StorageError, SubmitError};
use crate::models::OrderLineItem;
use crate::routes::{skus_from_query, Route};
use crate::services::OrderStorageService;
use crate::state::OrderFormState;

pub struct OrderViewModel {
    storage: OrderStorageService,
}

impl OrderViewModel {
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self::with_storage(OrderStorageService::session()?))
    }

    pub fn with_storage(storage: OrderStorageService) -> Self {
        Self { storage }
    }

    /// Estado inicial a partir de la query (?sku=A&sku=B): una fila por SKU,
    /// o una fila vacía si no hay ninguno
    pub fn initial_state(query: &str) -> OrderFormState {
        let skus = skus_from_query(query);
        log::info!("🧾 [ORDER] Inicializando formulario con {} SKUs de la URL", skus.len());
        OrderFormState::seeded(skus.into_iter().map(OrderLineItem::with_sku).collect())
    }

    /// Primer paso del envío (al pulsar "Order Now"): valida y devuelve
    /// el estado "submitting". Con Err el estado del formulario no cambia.
    pub fn begin_submission(state: &OrderFormState) -> Result<OrderFormState, SubmitError> {
        Self::submission_items(state)?;
        let mut next = state.clone();
        next.is_submitting = true;
        Ok(next)
    }

    /// Segundo paso (tras la espera): valida el snapshot tomado al pulsar,
    /// persiste las líneas válidas y devuelve la ruta siguiente.
    /// Un fallo de escritura solo se loguea: la confirmación redirige si no hay datos.
    pub fn submit(&self, snapshot: &OrderFormState) -> Result<Route, SubmitError> {
        let items = Self::submission_items(snapshot)?;
        if let Err(e) = self.storage.save_order(&items) {
            log::error!("❌ [ORDER] Error guardando pedido: {}", e);
        }
        Ok(Route::Confirmation)
    }

    fn submission_items(state: &OrderFormState) -> Result<Vec<OrderLineItem>, SubmitError> {
        if state.is_submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        let items = state.valid_items();
        if items.is_empty() {
            return Err(SubmitError::NothingToSubmit);
        }
        Ok(items)
    }
}
