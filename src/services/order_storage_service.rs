use crate::error::StorageError;
use crate::models::OrderLineItem;
use crate::utils::{load_json, remove_key, save_json, BrowserSessionStorage, KeyValueStore, ORDER_STORAGE_KEY};

/// Service de pedidos - SOLO acceso a sessionStorage (clave `orderData`)
pub struct OrderStorageService {
    store: Box<dyn KeyValueStore>,
}

impl OrderStorageService {
    /// Service sobre window.sessionStorage
    pub fn session() -> Result<Self, StorageError> {
        Ok(Self::with_store(Box::new(BrowserSessionStorage::new()?)))
    }

    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Guardar pedido confirmado
    pub fn save_order(&self, items: &[OrderLineItem]) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), ORDER_STORAGE_KEY, items)?;
        log::info!("💾 [STORAGE] Pedido guardado: {} líneas", items.len());
        Ok(())
    }

    /// Cargar pedido. Ok(None) si no hay pedido guardado.
    pub fn load_order(&self) -> Result<Option<Vec<OrderLineItem>>, StorageError> {
        let order = load_json::<Vec<OrderLineItem>>(self.store.as_ref(), ORDER_STORAGE_KEY)?;
        if let Some(ref items) = order {
            log::info!("📋 [STORAGE] Pedido cargado: {} líneas", items.len());
        }
        Ok(order)
    }

    pub fn clear_order(&self) -> Result<(), StorageError> {
        remove_key(self.store.as_ref(), ORDER_STORAGE_KEY)?;
        log::info!("🗑️ [STORAGE] Pedido eliminado");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    fn item(sku: &str, amount: i64) -> OrderLineItem {
        OrderLineItem {
            sku: sku.to_string(),
            amount,
        }
    }

    fn service_over(store: &MemoryStorage) -> OrderStorageService {
        OrderStorageService::with_store(Box::new(store.clone()))
    }

    #[test]
    fn test_save_order_writes_order_data_key() {
        let store = MemoryStorage::new();
        let service = service_over(&store);
        service.save_order(&[item("ABC123", 2)]).unwrap();
        assert_eq!(
            store.raw(ORDER_STORAGE_KEY).as_deref(),
            Some(r#"[{"sku":"ABC123","amount":2}]"#)
        );
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_load_order() {
        let service = OrderStorageService::with_store(Box::new(MemoryStorage::with_item(
            ORDER_STORAGE_KEY,
            r#"[{"sku":"XYZ789","amount":5}]"#,
        )));
        assert_eq!(service.load_order().unwrap(), Some(vec![item("XYZ789", 5)]));
    }

    #[test]
    fn test_load_order_missing_and_corrupt() {
        let empty = OrderStorageService::with_store(Box::new(MemoryStorage::new()));
        assert_eq!(empty.load_order().unwrap(), None);

        let corrupt = OrderStorageService::with_store(Box::new(MemoryStorage::with_item(
            ORDER_STORAGE_KEY,
            r#"{"sku":"XYZ789"}"#,
        )));
        assert!(corrupt.load_order().unwrap_err().is_corrupt());
    }

    #[test]
    fn test_clear_order() {
        let store = MemoryStorage::with_item(ORDER_STORAGE_KEY, "[]");
        service_over(&store).clear_order().unwrap();
        assert_eq!(store.raw(ORDER_STORAGE_KEY), None);
    }
}
