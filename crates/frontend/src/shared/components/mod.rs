pub mod card_animated;
pub mod empty_state;
pub mod page_header;
pub mod stat_card;
pub mod ui;

pub use card_animated::CardAnimated;
pub use empty_state::{EmptyState, LoadingState};
pub use page_header::PageHeader;
pub use stat_card::StatCard;
