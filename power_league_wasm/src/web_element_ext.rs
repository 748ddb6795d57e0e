use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;

use crate::web_error_handling::JsResult;


pub trait WebElementExt {
    fn has_class(&self, class: &str) -> bool;
    fn toggle_class(&self, class: &str) -> JsResult<()>;
    // Forces class membership to `on`, regardless of the current state. Used
    // to re-derive DOM state from controller state rather than flipping it.
    fn toggle_class_when(&self, class: &str, on: bool) -> JsResult<()>;

    fn data_attr(&self, name: &str) -> Option<String>;

    fn add_event_listener_and_forget<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<()>;
}

impl WebElementExt for web_sys::Element {
    fn has_class(&self, class: &str) -> bool { self.class_list().contains(class) }

    fn toggle_class(&self, class: &str) -> JsResult<()> {
        self.class_list().toggle(class)?;
        Ok(())
    }

    fn toggle_class_when(&self, class: &str, on: bool) -> JsResult<()> {
        self.class_list().toggle_with_force(class, on)?;
        Ok(())
    }

    fn data_attr(&self, name: &str) -> Option<String> {
        self.get_attribute(&format!("data-{}", name))
    }

    // The closure is leaked: listeners are installed once per page load and
    // live for the lifetime of the page, same as the elements they watch.
    fn add_event_listener_and_forget<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<()> {
        let closure = Closure::new(listener);
        self.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}
