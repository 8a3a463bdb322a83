use crate::constants::{FADE_IN_SELECTOR, REVEALED_CLASS};
use crate::core::{RevealSet, Section, SectionTracker, VerticalSpan};
use crate::dom::{self, EventListener};
use crate::nav::NavBar;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Viewport-relative extent of a section's element, if it is on the page.
pub fn section_span(document: &web::Document, section: Section) -> Option<VerticalSpan> {
    let el = document.get_element_by_id(section.id())?;
    let rect = el.get_bounding_client_rect();
    Some(VerticalSpan::new(rect.top(), rect.bottom()))
}

/// Content blocks that fade in the first time they enter the viewport.
pub struct RevealBlocks {
    elements: Vec<web::Element>,
    latches: RevealSet,
}

impl RevealBlocks {
    pub fn collect(document: &web::Document) -> Self {
        let elements = dom::query_document(document, FADE_IN_SELECTOR);
        let latches = RevealSet::new(elements.len());
        Self { elements, latches }
    }

    pub fn update(&mut self, viewport_height: f64) {
        if self.latches.all_revealed() {
            return;
        }
        let elements = &self.elements;
        let fresh = self.latches.update(viewport_height, |i| {
            let rect = elements[i].get_bounding_client_rect();
            (rect.top(), rect.bottom())
        });
        for i in fresh {
            _ = elements[i].class_list().add_1(REVEALED_CLASS);
        }
    }
}

/// Track the active section on window scroll and reveal content blocks on
/// scroll or resize.
///
/// The active section is only recomputed inside the scroll handler. Blocks
/// can also come into view when the window grows, so the reveal pass runs
/// from a resize listener too. The initial highlight and reveal pass run
/// once here.
pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    nav: Rc<NavBar>,
) -> anyhow::Result<Vec<EventListener>> {
    let mut tracker = SectionTracker::default();
    nav.highlight(tracker.active());

    let reveal = Rc::new(RefCell::new(RevealBlocks::collect(document)));
    reveal.borrow_mut().update(dom::inner_height(window));

    let (win, doc, reveal_scroll) = (window.clone(), document.clone(), reveal.clone());
    let scroll = EventListener::new(window, "scroll", move |_| {
        if let Some(section) = tracker.recompute(|s| section_span(&doc, s)) {
            log::debug!("[scroll] active section -> {}", section.id());
            nav.highlight(Some(section));
        }
        reveal_scroll.borrow_mut().update(dom::inner_height(&win));
    })?;

    let win = window.clone();
    let resize = EventListener::new(window, "resize", move |_| {
        reveal.borrow_mut().update(dom::inner_height(&win));
    })?;

    Ok(vec![scroll, resize])
}
