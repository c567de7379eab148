//! Browser adapter: applies the probe and selector to the live document.
//!
//! ARCHITECTURE
//! ============
//! The page template owns the warning notice, the option container and the
//! `esp-web-install-button` element. This module only looks them up by their
//! well-known ids, appends one radio option per board, and forwards `change`
//! events to a shared [`BoardSelector`]. All decisions live in the pure
//! modules; every function here is a thin wrapper over web-sys calls.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlInputElement};

use boards::BoardRegistry;

use crate::consts::{
    CONTAINER_ID, DESC_CLASS, HIDDEN_CLASS, ICON_CLASS, INSTALLER_TAG, LABEL_CLASS, MANIFEST_ATTR, NAME_CLASS,
    OPTION_CLASS, REGISTRY_SCRIPT_ID, WARNING_ID,
};
use crate::probe::{Notice, check_support, serial_available};
use crate::registry;
use crate::selector::{BoardSelector, InstallerTarget};
use crate::view::{OptionView, SelectorView};

type SharedSelector = Rc<RefCell<BoardSelector<DomInstaller>>>;

/// Remove the `hidden` class from an element, logging any DOM failure.
fn unhide(el: &Element) {
    if let Err(err) = el.class_list().remove_1(HIDDEN_CLASS) {
        log::error!("failed to unhide #{}: {err:?}", el.id());
    }
}

/// The warning notice element.
pub struct DomNotice(Element);

impl Notice for DomNotice {
    fn reveal(&mut self) {
        unhide(&self.0);
    }
}

/// The `esp-web-install-button` element.
pub struct DomInstaller(Element);

impl InstallerTarget for DomInstaller {
    fn set_manifest(&mut self, path: &str) {
        if let Err(err) = self.0.set_attribute(MANIFEST_ATTR, path) {
            log::error!("failed to set installer manifest to {path}: {err:?}");
        }
    }

    fn reveal(&mut self) {
        unhide(&self.0);
    }
}

/// Run `f` once the document has been parsed.
pub fn on_ready(f: fn(&Document)) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::debug!("no document; board selector not started");
        return;
    };
    if document.ready_state() != "loading" {
        f(&document);
        return;
    }
    let ready_doc = document.clone();
    let callback = Closure::once_into_js(move || f(&ready_doc));
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::error!("failed to wait for DOMContentLoaded: {err:?}");
    }
}

/// Probe Web Serial support, then build the board selector.
pub fn start(document: &Document) {
    let mut warning = document.get_element_by_id(WARNING_ID).map(DomNotice);
    check_support(serial_available(), warning.as_mut());

    let inline = document.get_element_by_id(REGISTRY_SCRIPT_ID).and_then(|el| el.text_content());
    let registry = registry::resolve(inline.as_deref());

    if let Err(err) = render(document, registry) {
        log::error!("board selector failed to render: {err:?}");
    }
}

/// Append one option per board and activate the first.
///
/// Does nothing when the container or installer element is missing from
/// the page.
///
/// # Errors
///
/// Returns the underlying `JsValue` if a DOM call fails.
pub fn render(document: &Document, registry: BoardRegistry) -> Result<(), JsValue> {
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        log::debug!("#{CONTAINER_ID} missing; board selector skipped");
        return Ok(());
    };
    let Some(installer) = document.query_selector(INSTALLER_TAG)? else {
        log::debug!("<{INSTALLER_TAG}> missing; board selector skipped");
        return Ok(());
    };

    let selector: SharedSelector = Rc::new(RefCell::new(BoardSelector::new(registry, DomInstaller(installer))));
    let drawn = selector
        .borrow_mut()
        .mount(|initial| append_options(document, &container, &selector, initial));
    let (inputs, view) = drawn?;
    sync_checked(&inputs, &view);
    Ok(())
}

/// Build every option, then append them all; nothing is appended if any
/// option fails to build.
fn append_options(
    document: &Document,
    container: &Element,
    selector: &SharedSelector,
    view: &SelectorView,
) -> Result<Vec<HtmlInputElement>, JsValue> {
    let mut built = Vec::with_capacity(view.options.len());
    for option in &view.options {
        let (label, input) = build_option(document, option)?;
        listen_for_change(&input, selector, option.value.clone())?;
        built.push((label, input));
    }

    let mut inputs = Vec::with_capacity(built.len());
    for (label, input) in built {
        container.append_child(&label)?;
        inputs.push(input);
    }
    Ok(inputs)
}

/// Build `label.device-option > input[type=radio] + span.device-label`.
fn build_option(document: &Document, option: &OptionView) -> Result<(Element, HtmlInputElement), JsValue> {
    let label = document.create_element("label")?;
    label.set_class_name(OPTION_CLASS);

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("radio");
    input.set_name(option.group);
    input.set_value(&option.value);
    input.set_checked(option.checked);

    let device_label = document.create_element("span")?;
    device_label.set_class_name(LABEL_CLASS);
    device_label.append_child(&*text_span(document, ICON_CLASS, &option.icon)?)?;
    device_label.append_child(&*text_span(document, NAME_CLASS, &option.name)?)?;
    if let Some(description) = &option.description {
        device_label.append_child(&*text_span(document, DESC_CLASS, description)?)?;
    }

    label.append_child(&input)?;
    label.append_child(&device_label)?;
    Ok((label, input))
}

fn text_span(document: &Document, class: &str, text: &str) -> Result<Element, JsValue> {
    let span = document.create_element("span")?;
    span.set_class_name(class);
    span.set_text_content(Some(text));
    Ok(span)
}

fn listen_for_change(input: &HtmlInputElement, selector: &SharedSelector, board_id: String) -> Result<(), JsValue> {
    let selector = Rc::clone(selector);
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(err) = selector.borrow_mut().on_select(&board_id) {
            log::warn!("ignoring selection change: {err}");
        }
    });
    input.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    handler.forget();
    Ok(())
}

fn sync_checked(inputs: &[HtmlInputElement], view: &SelectorView) {
    for (input, option) in inputs.iter().zip(&view.options) {
        input.set_checked(option.checked);
    }
}
