pub mod dashboard;
pub mod layout;
pub mod modals;
