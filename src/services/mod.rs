pub mod order_storage_service;

pub use order_storage_service::OrderStorageService;
