pub mod order_modal;

pub use order_modal::OrderModal;
