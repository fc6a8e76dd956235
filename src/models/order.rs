use serde::{Deserialize, Serialize};

/// Cantidad por defecto de cada línea (y valor de fallback de la coerción)
pub const DEFAULT_AMOUNT: i64 = 1;

/// Línea de pedido: SKU libre + cantidad
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct OrderLineItem {
    pub sku: String,
    pub amount: i64,
}

impl OrderLineItem {
    /// Línea vacía (sku "", cantidad 1)
    pub fn empty() -> Self {
        Self::with_sku("")
    }

    pub fn with_sku(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            amount: DEFAULT_AMOUNT,
        }
    }

    /// SKU no vacío (tras trim) y cantidad positiva
    pub fn is_valid(&self) -> bool {
        !self.sku.trim().is_empty() && self.amount > 0
    }
}

impl Default for OrderLineItem {
    fn default() -> Self {
        Self::empty()
    }
}

/// Campo editable de una línea
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OrderField {
    Sku,
    Amount,
}

/// Subsecuencia de líneas válidas, en el mismo orden
pub fn valid_items(items: &[OrderLineItem]) -> Vec<OrderLineItem> {
    items.iter().filter(|item| item.is_valid()).cloned().collect()
}

/// Convierte el texto del input de cantidad en un entero positivo.
///
/// Parseo permisivo: signo opcional y dígitos iniciales, el resto se ignora
/// ("12abc" -> 12). Sin dígitos, overflow o resultado <= 0 -> 1.
pub fn coerce_amount(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    let parsed = rest[..end]
        .parse::<i64>()
        .ok()
        .map(|n| if negative { -n } else { n });

    match parsed {
        Some(n) if n > 0 => n,
        _ => DEFAULT_AMOUNT,
    }
}
