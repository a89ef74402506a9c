pub mod account_cards;
pub mod balance_chart;
pub mod filters;
pub mod monthly_summary;
pub mod stats;
pub mod transaction_list;
pub mod view;

pub use view::Dashboard;
