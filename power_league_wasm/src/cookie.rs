use power_league::preference::PreferenceStore;

use crate::web_document::web_document;
use crate::web_error_handling::JsResult;


// Preference cookies should outlive the browser session.
const COOKIE_MAX_AGE_SECONDS: u32 = 365 * 24 * 60 * 60;

// `PreferenceStore` over `document.cookie`.
pub struct CookieStore {
    document: web_sys::HtmlDocument,
}

impl CookieStore {
    pub fn new() -> JsResult<Self> {
        Ok(CookieStore { document: web_document().as_html_document()? })
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        self.document.cookie().ok().and_then(|cookies| cookie_value(&cookies, key))
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = format!("{}={}; path=/; max-age={}", key, value, COOKIE_MAX_AGE_SECONDS);
        // A rejected cookie write (e.g. cookies disabled) degrades to the
        // no-preference behavior; nothing to do about it here.
        let _ = self.document.set_cookie(&cookie);
    }
}

// Finds `key` in a `document.cookie` string of the form "a=1; b=2".
pub fn cookie_value(cookies: &str, key: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_owned())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_key() {
        assert_eq!(cookie_value("PowerPreference=record", "PowerPreference").unwrap(), "record");
        assert_eq!(
            cookie_value("a=1; PowerPreference=score; b=2", "PowerPreference").unwrap(),
            "score"
        );
    }

    #[test]
    fn cookie_value_requires_exact_key() {
        assert_eq!(cookie_value("XPowerPreference=record", "PowerPreference"), None);
        assert_eq!(cookie_value("", "PowerPreference"), None);
        assert_eq!(cookie_value("PowerPreference", "PowerPreference"), None);
    }

    #[test]
    fn cookie_value_keeps_embedded_equals() {
        assert_eq!(cookie_value("k=a=b", "k").unwrap(), "a=b");
    }
}
