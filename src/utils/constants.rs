/// Clave de sessionStorage donde se guarda el pedido confirmado
pub const ORDER_STORAGE_KEY: &str = "orderData";

/// Nombre del parámetro de query que pre-rellena SKUs en /order
pub const SKU_QUERY_PARAM: &str = "sku";

/// SKUs de ejemplo del enlace "Order with Pre-filled SKUs"
pub const EXAMPLE_SKUS: [&str; 2] = ["ABC123", "XYZ789"];

pub const DELIVERY_WINDOW: &str = "15-20 business days";
