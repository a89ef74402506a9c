pub mod transaction_modal;

pub use transaction_modal::TransactionModal;
