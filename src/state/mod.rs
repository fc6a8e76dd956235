// ============================================================================
// STATE MODULE - Estados de vista para use_state
// ============================================================================

pub mod order_form_state;
pub mod confirmation_state;

pub use order_form_state::OrderFormState;
pub use confirmation_state::ConfirmationState;
