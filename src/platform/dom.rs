//! DOM mounting (WASM only)
//!
//! Materializes `view::Node` trees and menu rows into the fixed page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use crate::consts::*;
use crate::error::{Result, SnapshotError};
use crate::menu::MenuEntry;
use crate::view::{Node, ProfileView, Region};

fn dom_err(e: wasm_bindgen::JsValue) -> SnapshotError {
    SnapshotError::Dom(format!("{:?}", e))
}

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SnapshotError::Dom("no document".to_string()))
}

/// Create one element (and its children) from a node
pub fn create(document: &Document, node: &Node) -> Result<Element> {
    let el = document.create_element(node.tag).map_err(dom_err)?;
    el.set_class_name(node.class);
    if let Some(ref text) = node.text {
        el.set_text_content(Some(text));
    }
    if let Some(ref src) = node.src {
        match el.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.set_src(src),
            None => el.set_attribute("src", src).map_err(dom_err)?,
        }
    }
    for child in &node.children {
        el.append_child(&create(document, child)?).map_err(dom_err)?;
    }
    Ok(el)
}

/// Clear every region and mount the view, including the companions menu
pub fn mount_view(document: &Document, view: &ProfileView) -> Result<()> {
    for region in Region::ALL {
        let Some(container) = document.get_element_by_id(region.element_id()) else {
            log::warn!("Missing region #{}", region.element_id());
            continue;
        };
        container.set_inner_html("");
        for node in view.region(region) {
            container
                .append_child(&create(document, node)?)
                .map_err(dom_err)?;
        }
    }
    mount_menu(document, COMPANIONS_PANEL_ID, &view.companions)
}

/// Replace a menu panel's rows
///
/// Selectable rows become buttons carrying their index; static rows are
/// marked so clicks on them are ignored.
pub fn mount_menu(document: &Document, panel_id: &str, entries: &[MenuEntry]) -> Result<()> {
    let Some(panel) = document.get_element_by_id(panel_id) else {
        log::warn!("Missing menu panel #{}", panel_id);
        return Ok(());
    };
    panel.set_inner_html("");

    for entry in entries {
        let row = match entry {
            MenuEntry::Selectable { label, index } => {
                let btn = document.create_element("button").map_err(dom_err)?;
                btn.set_class_name(MENU_ITEM_CLASS);
                btn.set_attribute(INDEX_ATTR, &index.to_string())
                    .map_err(dom_err)?;
                btn.set_text_content(Some(label));
                btn
            }
            MenuEntry::Static { label } => {
                let div = document.create_element("div").map_err(dom_err)?;
                div.set_class_name(&format!("{} {}", MENU_ITEM_CLASS, STATIC_ITEM_CLASS));
                div.set_text_content(Some(label));
                div
            }
        };
        panel.append_child(&row).map_err(dom_err)?;
    }
    Ok(())
}

/// Index of the clicked load-menu row, `None` for static rows or misses
pub fn clicked_index(target: &Element) -> Option<usize> {
    let item = target.closest(&format!(".{}", MENU_ITEM_CLASS)).ok()??;
    if item.class_list().contains(STATIC_ITEM_CLASS) {
        return None;
    }
    item.get_attribute(INDEX_ATTR)?.parse().ok()
}
