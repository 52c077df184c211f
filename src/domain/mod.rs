pub mod detail;
pub mod listing;

pub use detail::DetailInfo;
pub use listing::{find_by_link, Listing};
