// ============================================================================
// BROWSER HELPERS - Diálogos nativos del navegador
// ============================================================================

/// Alert bloqueante (window.alert)
pub fn show_alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("⚠️ [BROWSER] No se pudo mostrar alert: {}", message);
            }
        }
        None => log::warn!("⚠️ [BROWSER] Sin window, alert omitido: {}", message),
    }
}
