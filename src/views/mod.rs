pub mod landing_view;
pub mod order_view;
pub mod confirmation_view;
pub mod not_found_view;

pub use landing_view::LandingView;
pub use order_view::OrderView;
pub use confirmation_view::ConfirmationView;
pub use not_found_view::NotFoundView;
