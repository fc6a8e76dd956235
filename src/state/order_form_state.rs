// ============================================================================
// ORDER FORM STATE - Estado del formulario de pedido (use_state)
// ============================================================================

use crate::models::{coerce_amount, valid_items, OrderField, OrderLineItem};

/// Estado del formulario - Compatible con use_state_handle
#[derive(Clone, Debug, PartialEq, Default)]
pub struct OrderFormState {
    pub items: Vec<OrderLineItem>,
    pub is_submitting: bool,
    /// false hasta que se leen los SKUs de la URL (placeholder de carga)
    pub initialized: bool,
}

impl OrderFormState {
    /// Estado inicial con filas ya sembradas
    pub fn seeded(items: Vec<OrderLineItem>) -> Self {
        let items = if items.is_empty() {
            vec![OrderLineItem::empty()]
        } else {
            items
        };
        Self {
            items,
            is_submitting: false,
            initialized: true,
        }
    }

    pub fn add_row(&mut self) {
        self.items.push(OrderLineItem::empty());
    }

    /// Elimina la fila solo si quedan más de una. Devuelve si hubo cambio.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if !self.can_remove_rows() || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Reemplaza un campo de la fila `index`; la cantidad pasa por `coerce_amount`
    pub fn update_row(&mut self, index: usize, field: OrderField, value: &str) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        match field {
            OrderField::Sku => item.sku = value.to_string(),
            OrderField::Amount => item.amount = coerce_amount(value),
        }
        true
    }

    /// Cancelar: volver a una sola fila vacía
    pub fn reset(&mut self) {
        self.items = vec![OrderLineItem::empty()];
    }

    pub fn valid_items(&self) -> Vec<OrderLineItem> {
        valid_items(&self.items)
    }

    pub fn can_remove_rows(&self) -> bool {
        self.items.len() > 1
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.items.iter().any(OrderLineItem::is_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(state: &OrderFormState) -> Vec<(&str, i64)> {
        state
            .items
            .iter()
            .map(|item| (item.sku.as_str(), item.amount))
            .collect()
    }

    #[test]
    fn test_default_is_not_initialized() {
        let state = OrderFormState::default();
        assert!(!state.initialized);
        assert!(state.items.is_empty());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_seeded_never_empty() {
        let state = OrderFormState::seeded(Vec::new());
        assert!(state.initialized);
        assert_eq!(rows(&state), vec![("", 1)]);
    }

    #[test]
    fn test_add_row_appends_empty() {
        let mut state = OrderFormState::seeded(vec![OrderLineItem::with_sku("A")]);
        state.add_row();
        state.add_row();
        assert_eq!(rows(&state), vec![("A", 1), ("", 1), ("", 1)]);
    }

    #[test]
    fn test_remove_row_noop_with_single_row() {
        for index in [0, 1, 5, usize::MAX] {
            let mut state = OrderFormState::seeded(vec![OrderLineItem::with_sku("A")]);
            assert!(!state.remove_row(index));
            assert_eq!(rows(&state), vec![("A", 1)]);
        }
    }

    #[test]
    fn test_remove_row() {
        let mut state = OrderFormState::seeded(vec![
            OrderLineItem::with_sku("A"),
            OrderLineItem::with_sku("B"),
            OrderLineItem::with_sku("C"),
        ]);
        assert!(state.remove_row(1));
        assert_eq!(rows(&state), vec![("A", 1), ("C", 1)]);
        assert!(!state.remove_row(2));
        assert!(state.remove_row(0));
        assert_eq!(rows(&state), vec![("C", 1)]);
        assert!(!state.can_remove_rows());
    }

    #[test]
    fn test_update_row_fields() {
        let mut state = OrderFormState::seeded(vec![OrderLineItem::empty()]);
        assert!(state.update_row(0, OrderField::Sku, " ABC123 "));
        assert!(state.update_row(0, OrderField::Amount, "5"));
        assert_eq!(rows(&state), vec![(" ABC123 ", 5)]);

        assert!(state.update_row(0, OrderField::Amount, "abc"));
        assert_eq!(state.items[0].amount, 1);

        assert!(!state.update_row(3, OrderField::Sku, "X"));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_valid_items_and_can_submit() {
        let mut state = OrderFormState::seeded(vec![
            OrderLineItem::with_sku("ABC123"),
            OrderLineItem::empty(),
            OrderLineItem::with_sku("   "),
        ]);
        state.items[0].amount = 2;
        assert_eq!(
            state.valid_items(),
            vec![OrderLineItem {
                sku: "ABC123".to_string(),
                amount: 2
            }]
        );
        assert!(state.can_submit());

        state.is_submitting = true;
        assert!(!state.can_submit());
    }

    #[test]
    fn test_reset_keeps_single_empty_row() {
        let mut state = OrderFormState::seeded(vec![
            OrderLineItem::with_sku("A"),
            OrderLineItem::with_sku("B"),
        ]);
        state.reset();
        assert_eq!(rows(&state), vec![("", 1)]);
        assert!(state.initialized);
    }
}
