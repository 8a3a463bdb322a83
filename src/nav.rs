use crate::constants::{MENU_ICON_CLOSE_ID, MENU_ICON_OPEN_ID, MOBILE_MENU_ID, NAV_LINKS_ID};
use crate::core::{link_class, NavVariant, Section};
use crate::dom;
use web_sys as web;

struct NavLink {
    section: Section,
    variant: NavVariant,
    el: web::Element,
}

/// Nav anchors and the mobile menu elements, looked up once at mount.
pub struct NavBar {
    links: Vec<NavLink>,
    menu: Option<web::Element>,
    icon_open: Option<web::Element>,
    icon_close: Option<web::Element>,
}

impl NavBar {
    pub fn collect(document: &web::Document) -> Self {
        let mut links = Vec::new();
        for (container_id, variant) in [
            (NAV_LINKS_ID, NavVariant::Desktop),
            (MOBILE_MENU_ID, NavVariant::Mobile),
        ] {
            let Some(container) = document.get_element_by_id(container_id) else {
                log::warn!("[nav] missing #{}", container_id);
                continue;
            };
            for el in dom::query_all(&container, "a[href^='#']") {
                let section = el
                    .get_attribute("href")
                    .as_deref()
                    .and_then(Section::from_href);
                if let Some(section) = section {
                    links.push(NavLink {
                        section,
                        variant,
                        el,
                    });
                }
            }
        }
        Self {
            links,
            menu: document.get_element_by_id(MOBILE_MENU_ID),
            icon_open: document.get_element_by_id(MENU_ICON_OPEN_ID),
            icon_close: document.get_element_by_id(MENU_ICON_CLOSE_ID),
        }
    }

    /// Restyle every link for the given active section.
    pub fn highlight(&self, active: Option<Section>) {
        for link in &self.links {
            let is_active = active == Some(link.section);
            link.el.set_class_name(&link_class(link.variant, is_active));
        }
    }

    pub fn show_menu(&self, open: bool) {
        if let Some(menu) = &self.menu {
            dom::set_hidden(menu, !open);
        }
        if let Some(icon) = &self.icon_open {
            dom::set_hidden(icon, open);
        }
        if let Some(icon) = &self.icon_close {
            dom::set_hidden(icon, !open);
        }
    }

    /// Links inside the mobile menu.
    pub fn mobile_links(&self) -> impl Iterator<Item = &web::Element> {
        self.links
            .iter()
            .filter(|l| l.variant == NavVariant::Mobile)
            .map(|l| &l.el)
    }
}
