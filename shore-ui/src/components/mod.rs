//! RSX components, one per page region.

mod error_display;
mod events_grid;
mod hero;
mod loading_spinner;
mod map_section;
mod nav_bar;
mod notice_stack;
mod quick_actions;
mod weather_widget;

pub use error_display::ErrorDisplay;
pub use events_grid::{EventCardView, EventsGrid};
pub use hero::Hero;
pub use loading_spinner::LoadingSpinner;
pub use map_section::MapSection;
pub use nav_bar::NavBar;
pub use notice_stack::NoticeStack;
pub use quick_actions::{QuickActions, SuggestSpotForm};
pub use weather_widget::WeatherWidget;
