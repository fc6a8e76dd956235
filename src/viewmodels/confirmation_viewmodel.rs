// ============================================================================
// CONFIRMATION VIEWMODEL - LÓGICA DE LA CONFIRMACIÓN
// ============================================================================

use crate::error::StorageError;
use crate::routes::Route;
use crate::services::OrderStorageService;
use crate::state::ConfirmationState;

pub struct ConfirmationViewModel {
    storage: OrderStorageService,
}

impl ConfirmationViewModel {
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self::with_storage(OrderStorageService::session()?))
    }

    pub fn with_storage(storage: OrderStorageService) -> Self {
        Self { storage }
    }

    /// Leer el pedido guardado. Sin datos o datos corruptos -> redirección a /order.
    pub fn initialize(&self) -> ConfirmationState {
        match self.storage.load_order() {
            Ok(Some(items)) => {
                log::info!("✅ [CONFIRMATION] Pedido listo: {} líneas", items.len());
                ConfirmationState::Ready(items)
            }
            Ok(None) => {
                log::info!("↩️ [CONFIRMATION] Sin pedido en storage, redirigiendo");
                ConfirmationState::Redirecting(Route::Order)
            }
            Err(e) if e.is_corrupt() => {
                log::error!("❌ [CONFIRMATION] Error parsing order data: {}", e);
                ConfirmationState::Redirecting(Route::Order)
            }
            Err(e) => {
                log::warn!("⚠️ [CONFIRMATION] No se pudo leer el pedido, redirigiendo: {}", e);
                ConfirmationState::Redirecting(Route::Order)
            }
        }
    }

    /// "Place Another Order": borrar el pedido y volver al formulario
    pub fn start_new_order(&self) -> Route {
        if let Err(e) = self.storage.clear_order() {
            log::error!("❌ [CONFIRMATION] Error limpiando pedido: {}", e);
        }
        Route::Order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::models::OrderLineItem;
    use crate::utils::storage::MemoryStorage;
    use crate::utils::{KeyValueStore, ORDER_STORAGE_KEY};

    /// sessionStorage que falla al leer (p.ej. bloqueado por el navegador)
    struct UnreadableStorage;

    impl KeyValueStore for UnreadableStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
            })
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn store_with(stored: Option<&str>) -> MemoryStorage {
        match stored {
            Some(json) => MemoryStorage::with_item(ORDER_STORAGE_KEY, json),
            None => MemoryStorage::new(),
        }
    }

    fn view_model(store: &MemoryStorage) -> ConfirmationViewModel {
        ConfirmationViewModel::with_storage(OrderStorageService::with_store(Box::new(store.clone())))
    }

    #[test]
    fn test_missing_order_redirects_to_order_form() {
        let state = view_model(&store_with(None)).initialize();
        assert_eq!(state.redirect_target(), Some(&Route::Order));
        assert!(!matches!(state, ConfirmationState::Ready(_)));
    }

    #[test]
    fn test_corrupt_order_redirects_to_order_form() {
        for json in ["not json", r#"{"sku":"A","amount":1}"#, r#"[{"sku":"A","amount":"x"}]"#] {
            let store = store_with(Some(json));
            let state = view_model(&store).initialize();
            assert_eq!(state, ConfirmationState::Redirecting(Route::Order));
            // Los datos corruptos no se borran al leer
            assert_eq!(store.raw(ORDER_STORAGE_KEY).as_deref(), Some(json));
        }
    }

    #[test]
    fn test_unreadable_storage_redirects_to_order_form() {
        let vm = ConfirmationViewModel::with_storage(OrderStorageService::with_store(Box::new(
            UnreadableStorage,
        )));
        assert_eq!(vm.initialize(), ConfirmationState::Redirecting(Route::Order));
    }

    #[test]
    fn test_stored_order_is_ready() {
        let state = view_model(&store_with(Some(r#"[{"sku":"XYZ789","amount":5}]"#))).initialize();
        assert_eq!(state.redirect_target(), None);
        assert_eq!(
            state,
            ConfirmationState::Ready(vec![OrderLineItem {
                sku: "XYZ789".to_string(),
                amount: 5
            }])
        );
    }

    #[test]
    fn test_start_new_order_clears_storage() {
        let store = store_with(Some(r#"[{"sku":"XYZ789","amount":5}]"#));
        let vm = view_model(&store);
        assert_eq!(vm.start_new_order(), Route::Order);
        assert_eq!(store.raw(ORDER_STORAGE_KEY), None);
        assert_eq!(vm.initialize(), ConfirmationState::Redirecting(Route::Order));
    }

    #[test]
    fn test_default_state_is_loading() {
        assert_eq!(ConfirmationState::default(), ConfirmationState::Loading);
    }
}
