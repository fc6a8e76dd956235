pub mod order_viewmodel;
pub mod confirmation_viewmodel;

pub use order_viewmodel::OrderViewModel;
pub use confirmation_viewmodel::ConfirmationViewModel;
