//! Web Serial capability probe.
//!
//! Runs once at startup. When the browser has no `navigator.serial` the
//! warning notice is revealed; when it does, the notice is left exactly as the
//! page template has it.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

/// A page element that can be brought into view.
pub trait Notice {
    fn reveal(&mut self);
}

/// Result of the capability probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Support {
    Available,
    Missing,
}

impl Support {
    #[must_use]
    pub fn from_flag(supported: bool) -> Self {
        if supported { Self::Available } else { Self::Missing }
    }
}

/// Reveal `warning` if the capability is missing.
///
/// A missing warning element is tolerated; the diagnostic is logged either way.
pub fn check_support<N: Notice>(supported: bool, warning: Option<&mut N>) -> Support {
    let support = Support::from_flag(supported);
    if support == Support::Missing {
        if let Some(notice) = warning {
            notice.reveal();
        }
        log::warn!("Web Serial API not supported");
    }
    support
}

/// Whether the current browser exposes `navigator.serial`.
#[cfg(feature = "browser")]
#[must_use]
pub fn serial_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    match js_sys::Reflect::get(&navigator, &wasm_bindgen::JsValue::from_str("serial")) {
        Ok(serial) => !serial.is_undefined() && !serial.is_null(),
        Err(_) => false,
    }
}
