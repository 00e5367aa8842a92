use std::cell::RefCell;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, Location};

use crate::config::SelectorConfig;
use crate::core::{initialize, GridItem, InitReport, Navigator, Selection};
use crate::persistence::LocalStorage;

thread_local! {
    static HANDLERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> = const { RefCell::new(Vec::new()) };
}

pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let document = document()?;
    mount(&document, &SelectorConfig::default());
    Ok(())
}

/// Enables the unlocked cells of the grid in `document` and wires their
/// click handlers. A missing grid is not an error: nothing gets enabled.
pub fn mount(document: &Document, config: &SelectorConfig) -> InitReport {
    let mut items = grid_children(document, &config.grid_id);
    let mut store = LocalStorage::open();
    let report = initialize(config, &mut store, &mut items);

    for selection in &report.selections {
        let Some(item) = items.get(selection.index) else {
            continue;
        };
        if let Err(err) = attach_selection(item, selection.clone(), config.clone()) {
            log::warn!("Failed to attach click handler for level {}: {err:?}", selection.level);
        }
    }

    report
}

fn attach_selection(
    item: &Element,
    selection: Selection,
    config: SelectorConfig,
) -> Result<(), JsValue> {
    let click = Closure::wrap(Box::new(move |_event: Event| {
        let mut store = LocalStorage::open();
        match BrowserLocation::current() {
            Ok(mut location) => selection.activate(&config, &mut store, &mut location),
            Err(err) => log::warn!("Cannot navigate: {err:?}"),
        }
    }) as Box<dyn FnMut(Event)>);
    item.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    HANDLERS.with(|handlers| handlers.borrow_mut().push(click));
    Ok(())
}

fn grid_children(document: &Document, grid_id: &str) -> Vec<Element> {
    let Some(grid) = document.get_element_by_id(grid_id) else {
        log::warn!("No element with id '{grid_id}', level grid left untouched");
        return Vec::new();
    };

    let children = grid.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .collect()
}

fn document() -> Result<Document, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Window unavailable"))?;
    window
        .document()
        .ok_or_else(|| JsValue::from_str("Document unavailable"))
}

impl GridItem for Element {
    fn declared_level(&self, attribute: &str) -> Option<String> {
        self.get_attribute(attribute)
    }

    fn mark_enabled(&mut self, class: &str) {
        self.set_class_name(class);
    }
}

struct BrowserLocation {
    location: Location,
}

impl BrowserLocation {
    fn current() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("Window unavailable"))?;
        Ok(Self {
            location: window.location(),
        })
    }
}

impl Navigator for BrowserLocation {
    fn navigate(&mut self, href: &str) {
        if let Err(err) = self.location.set_href(href) {
            log::warn!("Navigation to {href} failed: {err:?}");
        }
    }
}
