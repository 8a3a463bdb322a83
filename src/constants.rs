// Page tuning constants and DOM hooks.
//
// The host markup in `www/index.html` is written against these ids and
// classes; keep the two in sync.
use glam::Vec3;

// Background animation
pub const CLOCK_STEP_PER_FRAME: f64 = 0.002; // time units added before each repaint
pub const ANCHOR_START: Vec3 = Vec3::new(10.0, 25.0, 50.0); // dark blue, fixed stop 0
pub const ANCHOR_END: Vec3 = Vec3::new(60.0, 20.0, 80.0); // dark purple, far end of the swing

// Scroll tracking
pub const REFERENCE_BAND_PX: f64 = 100.0; // distance of the band below the viewport top

// Layout
pub const DESKTOP_BREAKPOINT_PX: f64 = 640.0; // `sm:` breakpoint; menu collapses at or above

// Element ids
pub const CANVAS_ID: &str = "gradient-canvas";
pub const NAV_LINKS_ID: &str = "nav-links";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MENU_ICON_OPEN_ID: &str = "menu-icon-open";
pub const MENU_ICON_CLOSE_ID: &str = "menu-icon-close";
pub const BRAND_ID: &str = "brand";
pub const FOOTER_YEAR_ID: &str = "footer-year";

// Classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const REVEALED_CLASS: &str = "visible";

pub const DESKTOP_LINK_BASE: &str = "text-sm font-medium transition-colors duration-300";
pub const DESKTOP_LINK_ACTIVE: &str = "text-blue-400 border-b-2 border-blue-400";
pub const MOBILE_LINK_BASE: &str = "text-lg font-medium transition-colors duration-300";
pub const MOBILE_LINK_ACTIVE: &str = "text-blue-400";
pub const LINK_INACTIVE: &str = "text-white hover:text-blue-300";
