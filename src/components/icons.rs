//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as SortDesc, LuArrowUp as SortAsc, LuChevronRight as ChevronRight,
        LuFile as File, LuFolder as Folder, LuHouse as Home, LuLogOut as Logout,
        LuSearch as Search,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDown as SortDesc, BsArrowUp as SortAsc, BsBoxArrowRight as Logout,
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFolderFill as Folder,
        BsHouseFill as Home, BsSearch as Search,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(SEARCH, Search);
themed_icon!(SORT_ASC, SortAsc);
themed_icon!(SORT_DESC, SortDesc);
themed_icon!(LOGOUT, Logout);
