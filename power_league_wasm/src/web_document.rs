use wasm_bindgen::JsCast;

use crate::rust_error;
use crate::web_error_handling::JsResult;
use crate::web_iterators::{HtmlCollectionIterator, NodeListIterator};


pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn get_elements_by_class_name(&self, class_name: &str) -> HtmlCollectionIterator {
        self.0.get_elements_by_class_name(class_name).into()
    }

    pub fn query_selector_all(&self, selectors: &str) -> JsResult<NodeListIterator> {
        self.0.query_selector_all(selectors).map(|list| list.into())
    }
    pub fn query_selector_all_elements(
        &self, selectors: &str,
    ) -> JsResult<impl Iterator<Item = web_sys::Element>> {
        Ok(self
            .query_selector_all(selectors)?
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok()))
    }

    // The cookie jar lives on `HtmlDocument`; plain `Document` does not expose it.
    pub fn as_html_document(&self) -> JsResult<web_sys::HtmlDocument> {
        self.0
            .clone()
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| rust_error!("Document is not an HtmlDocument"))
    }
}

pub fn web_document() -> WebDocument {
    WebDocument(web_sys::window().unwrap().document().unwrap())
}
