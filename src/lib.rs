pub mod canteens;
pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod fetcher;
pub mod projection;
pub mod shared_main;

pub use data_backend::parse_menu;
pub use data_types::menu_data_types::{CanteenMenu, ParseResult};
pub use data_types::{AbsenceRule, CanteenItem, ParseOptions, ParserVariant};
