// ============================================================================
// INVENTORY ORDER APP - FRONTEND MVVM (RUST + YEW)
// ============================================================================
// - Views: componentes de página (sin lógica)
// - Hooks: conectan estado + ViewModels + router
// - ViewModels: lógica UI, devuelven valores
// - Services: SOLO acceso a sessionStorage
// - State / Models: estructuras de datos
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod utils;
pub mod state;
pub mod services;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod views;
