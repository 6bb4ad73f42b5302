//! Profile Snapshots entry point
//!
//! Handles platform-specific initialization and wires the page actions.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, MouseEvent};

    use profile_snapshots::consts::*;
    use profile_snapshots::menu::MenuEntry;
    use profile_snapshots::platform::{LocalStorage, dom};
    use profile_snapshots::profile::{HttpSource, aggregate};
    use profile_snapshots::{Controller, Settings, SnapshotError, SnapshotStore};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    type SharedController = Rc<RefCell<Controller<LocalStorage>>>;

    pub async fn run() {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        if let Err(e) = console_log::init_with_level(settings.log_level.to_level()) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Profile Snapshots starting...");

        let document = match dom::document() {
            Ok(d) => d,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };
        let storage = match LocalStorage::open() {
            Ok(s) => s,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };
        let store = SnapshotStore::new(storage, settings.snapshot_key.clone());

        // Fetch all four datasets before the first render
        let source = HttpSource::new(settings.clone());
        let mut rng = Pcg32::seed_from_u64(js_sys::Date::now() as u64);
        let state = match aggregate(&source, &mut rng, settings.max_creature_id).await {
            Ok(state) => state,
            Err(e) => {
                log::error!("Initial load failed: {}", e);
                return;
            }
        };

        let controller = Rc::new(RefCell::new(Controller::new(state, store)));

        if let Err(e) = dom::mount_view(&document, &controller.borrow().view()) {
            log::error!("Render failed: {}", e);
        }
        refresh_load_menu(&document, &controller);

        setup_save_button(&document, controller.clone());
        setup_clear_button(&document, controller.clone());
        setup_load_menu(&document, controller);

        log::info!("Profile Snapshots running!");
    }

    /// Re-project the load menu from storage
    fn refresh_load_menu(document: &Document, controller: &SharedController) {
        let entries = match controller.borrow().load_menu() {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("{}", e);
                vec![MenuEntry::Static {
                    label: "Saved users unavailable".to_string(),
                }]
            }
        };
        if let Err(e) = dom::mount_menu(document, LOAD_PANEL_ID, &entries) {
            log::error!("Load menu render failed: {}", e);
        }
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn setup_save_button(document: &Document, controller: SharedController) {
        let Some(btn) = document.get_element_by_id(SAVE_BUTTON_ID) else {
            log::warn!("Missing #{}", SAVE_BUTTON_ID);
            return;
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let result = controller.borrow().save();
            match result {
                Ok(()) => refresh_load_menu(&doc, &controller),
                Err(e @ SnapshotError::IncompleteState { .. }) => {
                    log::warn!("{}", e);
                    alert(&e.to_string());
                }
                Err(e) => log::error!("Save failed: {}", e),
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_clear_button(document: &Document, controller: SharedController) {
        let Some(btn) = document.get_element_by_id(CLEAR_BUTTON_ID) else {
            log::warn!("Missing #{}", CLEAR_BUTTON_ID);
            return;
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let result = controller.borrow().clear();
            if let Err(e) = result {
                log::error!("Clear failed: {}", e);
            }
            refresh_load_menu(&doc, &controller);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_load_menu(document: &Document, controller: SharedController) {
        let Some(panel) = document.get_element_by_id(LOAD_PANEL_ID) else {
            log::warn!("Missing #{}", LOAD_PANEL_ID);
            return;
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(index) = dom::clicked_index(&target) else {
                return;
            };

            let loaded = controller.borrow_mut().load(index);
            match loaded {
                Ok(true) => {
                    if let Err(e) = dom::mount_view(&doc, &controller.borrow().view()) {
                        log::error!("Render failed: {}", e);
                    }
                }
                Ok(false) => {}
                Err(e) => log::error!("Load failed: {}", e),
            }
        });
        let _ = panel.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    use profile_snapshots::platform::MemoryStorage;
    use profile_snapshots::profile::{HttpSource, aggregate};
    use profile_snapshots::{Controller, Settings, SnapshotStore};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Profile Snapshots (native) starting...");
    log::info!("Native mode prints the fetched profile - run with `trunk serve` for the web page");

    let settings = Settings::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut rng = Pcg32::seed_from_u64(seed);

    let source = HttpSource::new(settings.clone());
    let state = match aggregate(&source, &mut rng, settings.max_creature_id).await {
        Ok(state) => state,
        Err(e) => {
            log::error!("Initial load failed: {}", e);
            std::process::exit(1);
        }
    };

    let controller = Controller::new(
        state,
        SnapshotStore::new(MemoryStorage::new(), settings.snapshot_key.clone()),
    );
    let view = controller.view();
    for region in profile_snapshots::view::Region::ALL {
        for node in view.region(region) {
            print_node(node, 0);
        }
    }
    for entry in &view.companions {
        println!("  friend: {}", entry.label());
    }

    if let Err(e) = controller.save() {
        log::warn!("{}", e);
    }
    match controller.load_menu() {
        Ok(menu) => {
            for entry in menu {
                println!("  saved: {}", entry.label());
            }
        }
        Err(e) => log::error!("{}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn print_node(node: &profile_snapshots::view::Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match (&node.text, &node.src) {
        (Some(text), _) => println!("{}{}.{}: {}", indent, node.tag, node.class, text),
        (None, Some(src)) => println!("{}{}.{} <{}>", indent, node.tag, node.class, src),
        (None, None) => println!("{}{}.{}", indent, node.tag, node.class),
    }
    for child in &node.children {
        print_node(child, depth + 1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
