// Rust-side iteration over the DOM's live collection types.

pub struct HtmlCollectionIterator {
    collection: web_sys::HtmlCollection,
    index: u32,
}

impl From<web_sys::HtmlCollection> for HtmlCollectionIterator {
    fn from(collection: web_sys::HtmlCollection) -> Self {
        HtmlCollectionIterator { collection, index: 0 }
    }
}

impl Iterator for HtmlCollectionIterator {
    type Item = web_sys::Element;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.collection.item(self.index);
        self.index += 1;
        item
    }
}

pub struct NodeListIterator {
    list: web_sys::NodeList,
    index: u32,
}

impl From<web_sys::NodeList> for NodeListIterator {
    fn from(list: web_sys::NodeList) -> Self { NodeListIterator { list, index: 0 } }
}

impl Iterator for NodeListIterator {
    type Item = web_sys::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.item(self.index);
        self.index += 1;
        item
    }
}
