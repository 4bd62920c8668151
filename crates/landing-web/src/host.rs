//! Browser Page Host
//!
//! `PageHost` backed by `window.history`, the DOM, and browser timers.

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use landing_core::{LeadError, PageHost, Result};
use wasm_bindgen::JsValue;
use web_sys::{Event, EventInit, Window};

/// The live browser tab
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl BrowserHost {
    /// Current `location.search`, empty outside a browser
    pub fn search() -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
}

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| LeadError::Host("no window".into()))
}

#[allow(clippy::needless_pass_by_value)]
fn js_error(err: JsValue) -> LeadError {
    LeadError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[async_trait(?Send)]
impl PageHost for BrowserHost {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".into())
    }

    fn replace_url(&self, url: &str) -> Result<()> {
        window()?
            .history()
            .map_err(js_error)?
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(js_error)
    }

    fn dispatch_change(&self, id: &str) -> Result<bool> {
        let Some(element) = window()?.document().and_then(|d| d.get_element_by_id(id)) else {
            return Ok(false);
        };

        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("change", &init).map_err(js_error)?;
        element.dispatch_event(&event).map_err(js_error)?;
        Ok(true)
    }

    async fn pause(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
