//! Widgets that make up the page: header, sidebar, search box, popover and
//! account rows.

pub mod account_item;
pub mod header;
pub mod popover;
pub mod search_box;
pub mod sidebar;

pub use account_item::{account_line, avatar_glyph};
pub use header::{HEADER_HEIGHT, render_header};
pub use popover::{PopoverHitbox, render_popover};
pub use search_box::{SearchBoxAreas, SearchBoxView, render_search_box};
pub use sidebar::{SIDEBAR_WIDTH, render_sidebar};
