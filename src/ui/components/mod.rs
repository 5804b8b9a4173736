mod product_table;
mod search_bar;
mod stat_card;

pub use product_table::{status_color, ProductAction, ProductTable};
pub use search_bar::SearchBar;
pub use stat_card::StatCard;
