// ============================================================================
// ROUTES - Rutas de la app + helpers de query string
// ============================================================================

use yew_router::prelude::*;

use crate::utils::SKU_QUERY_PARAM;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/order")]
    Order,
    #[at("/order/confirmation")]
    Confirmation,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Valores de `sku` en la query, en orden (acepta "?" inicial)
pub fn skus_from_query(query: &str) -> Vec<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == SKU_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .collect()
}

/// Pares (sku, valor) para `Link::query` / `push_with_query`
pub fn sku_query_pairs(skus: &[&str]) -> Vec<(String, String)> {
    skus.iter()
        .map(|sku| (SKU_QUERY_PARAM.to_string(), sku.to_string()))
        .collect()
}
