use crate::constants::{BRAND_ID, MENU_TOGGLE_ID};
use crate::core::MenuState;
use crate::dom::{self, EventListener};
use crate::nav::NavBar;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Menu listeners plus the state they share. Dropping it removes the
/// listeners and collapses the menu, so an open overlay never outlives the
/// handlers that could dismiss it.
pub struct MenuWiring {
    _listeners: Vec<EventListener>,
    state: Rc<RefCell<MenuState>>,
    nav: Rc<NavBar>,
}

impl Drop for MenuWiring {
    fn drop(&mut self) {
        self.state.borrow_mut().close();
        self.nav.show_menu(false);
    }
}

/// Mobile menu toggle, link clicks that close it, and the resize hook that
/// collapses it once the desktop nav takes over. Also wires the brand
/// reload. Elements missing from the page are skipped.
pub fn wire_menu(
    window: &web::Window,
    document: &web::Document,
    nav: Rc<NavBar>,
) -> anyhow::Result<MenuWiring> {
    let state = Rc::new(RefCell::new(MenuState::default()));
    nav.show_menu(false);
    let mut listeners = Vec::new();

    let (state_toggle, nav_toggle) = (state.clone(), nav.clone());
    listeners.extend(dom::click_listener(document, MENU_TOGGLE_ID, move || {
        let open = state_toggle.borrow_mut().toggle();
        nav_toggle.show_menu(open);
    }));

    for link in nav.mobile_links() {
        let (state_link, nav_link) = (state.clone(), nav.clone());
        listeners.push(EventListener::new(link, "click", move |_| {
            if state_link.borrow_mut().close() {
                nav_link.show_menu(false);
            }
        })?);
    }

    let (state_resize, nav_resize, win) = (state.clone(), nav.clone(), window.clone());
    listeners.push(EventListener::new(window, "resize", move |_| {
        if state_resize
            .borrow_mut()
            .close_if_wide(dom::inner_width(&win))
        {
            nav_resize.show_menu(false);
        }
    })?);

    listeners.extend(dom::click_listener(document, BRAND_ID, || {
        if let Some(w) = web::window() {
            _ = w.location().reload();
        }
    }));

    Ok(MenuWiring {
        _listeners: listeners,
        state,
        nav,
    })
}
