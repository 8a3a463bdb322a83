#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod nav;

/// Everything attached to the live page. Dropping it stops the repaint loop
/// and detaches every listener it registered.
struct MountedPage {
    _background: background::Background,
    _scroll: Vec<dom::EventListener>,
    _menu: events::menu::MenuWiring,
}

thread_local! {
    static PAGE: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

fn stamp_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(constants::FOOTER_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

fn build_page() -> anyhow::Result<MountedPage> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let background = background::mount(&window, &document)?;
    let nav = Rc::new(nav::NavBar::collect(&document));
    let scroll = events::wire_scroll(&window, &document, nav.clone())?;
    let menu = events::wire_menu(&window, &document, nav)?;
    stamp_footer_year(&document);

    Ok(MountedPage {
        _background: background,
        _scroll: scroll,
        _menu: menu,
    })
}

fn mount_page() -> anyhow::Result<()> {
    if PAGE.with(|p| p.borrow().is_some()) {
        log::warn!("page already mounted");
        return Ok(());
    }
    let page = build_page()?;
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    log::info!("page mounted");
    Ok(())
}

/// Attach the background animation, scroll tracking and menu behavior.
/// A second call while mounted does nothing.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_page().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Tear the page behavior down: cancel the repaint loop, remove every
/// listener and collapse the mobile menu. Safe to call when nothing is
/// mounted.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if page.is_some() {
        drop(page);
        log::info!("page unmounted");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = mount_page() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
