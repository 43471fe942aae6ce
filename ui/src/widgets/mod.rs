mod grid_table;
mod nav_bar;
mod notice;

pub use grid_table::grid_table;
pub use nav_bar::nav_bar;
pub use notice::notice_banner;
