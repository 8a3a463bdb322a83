use crate::constants::{
    DESKTOP_BREAKPOINT_PX, DESKTOP_LINK_ACTIVE, DESKTOP_LINK_BASE, LINK_INACTIVE,
    MOBILE_LINK_ACTIVE, MOBILE_LINK_BASE,
};

/// Which of the two nav lists a link lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    Desktop,
    Mobile,
}

/// Full class attribute for a nav link.
pub fn link_class(variant: NavVariant, active: bool) -> String {
    let (base, highlight) = match variant {
        NavVariant::Desktop => (DESKTOP_LINK_BASE, DESKTOP_LINK_ACTIVE),
        NavVariant::Mobile => (MOBILE_LINK_BASE, MOBILE_LINK_ACTIVE),
    };
    let state = if active { highlight } else { LINK_INACTIVE };
    format!("{} {}", base, state)
}

/// Open/closed state of the small-screen menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if this call closed an open menu.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Close once the viewport is wide enough for the desktop nav.
    pub fn close_if_wide(&mut self, viewport_width: f64) -> bool {
        viewport_width >= DESKTOP_BREAKPOINT_PX && self.close()
    }
}
