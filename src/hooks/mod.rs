pub mod use_order_form;
pub mod use_confirmation;

pub use use_order_form::{use_order_form, UseOrderFormHandle};
pub use use_confirmation::{use_confirmation, UseConfirmationHandle};

use yew_router::prelude::{Navigator, Routable};

use crate::routes::Route;

/// Navegar si hay router disponible
pub(crate) fn navigate(navigator: Option<&Navigator>, route: &Route) {
    match navigator {
        Some(navigator) => {
            log::info!("🧭 [NAV] -> {}", route.to_path());
            navigator.push(route);
        }
        None => log::error!("❌ [NAV] Sin navigator, no se puede ir a {}", route.to_path()),
    }
}
