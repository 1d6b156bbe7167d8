//! UI Components
//!
//! Leptos components for the planner.

mod card_view;
mod day_column;
mod delete_confirm_button;
mod filter_nav;
mod item_row;
mod new_item_input;
mod notice_banner;
mod search_bar;
mod week_nav;

pub use card_view::CardView;
pub use day_column::DayColumn;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_nav::FilterNav;
pub use item_row::ItemRow;
pub use new_item_input::NewItemInput;
pub use notice_banner::NoticeBanner;
pub use search_bar::SearchBar;
pub use week_nav::WeekNav;
