use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};


// Class shared by every page section that belongs to some display scheme.
pub const SCHEME_SECTION_CLASS: &str = "scheme-section";
// Class hiding an element; toggled by scheme application.
pub const HIDDEN_CLASS: &str = "hidden";
// Class marking the active scheme-selector control.
pub const ACTIVE_SELECTOR_CLASS: &str = "selected";

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    // Teams compared by fantasy points scored.
    Score,
    // Teams compared by win/loss/tie record.
    Record,
}

// A named display mode with its own set of visible page sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    id: String,
    display_name: String,
    kind: SchemeKind,
}

impl Scheme {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, kind: SchemeKind) -> Self {
        Scheme {
            id: id.into(),
            display_name: display_name.into(),
            kind,
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn display_name(&self) -> &str { &self.display_name }
    pub fn kind(&self) -> SchemeKind { self.kind }

    // Class carried by page sections visible under this scheme.
    pub fn section_class(&self) -> String { format!("scheme-{}", self.id) }
}

// The set of schemes the page knows about. Lookup resolves legacy aliases so
// cookies written by older versions of the site keep working.
#[derive(Clone, Debug)]
pub struct Schemes {
    schemes: Vec<Scheme>,
    aliases: Vec<(String, String)>, // alias -> canonical id
}

impl Schemes {
    pub fn new(schemes: Vec<Scheme>) -> Self { Schemes { schemes, aliases: vec![] } }

    pub fn with_alias(mut self, alias: impl Into<String>, id: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), id.into()));
        self
    }

    // The two schemes the site has always shipped. The cookie has always
    // stored "power"/"record"; the server-side ranking scheme behind "power"
    // is called "score", so that id is accepted as an alias.
    pub fn standard() -> Self {
        Schemes::new(vec![
            Scheme::new("power", "Power points", SchemeKind::Score),
            Scheme::new("record", "All-play record", SchemeKind::Record),
        ])
        .with_alias("score", "power")
    }

    pub fn get(&self, id: &str) -> Option<&Scheme> {
        let canonical = self
            .aliases
            .iter()
            .find(|(alias, _)| alias == id)
            .map_or(id, |(_, canonical)| canonical.as_str());
        self.schemes.iter().find(|scheme| scheme.id == canonical)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scheme> { self.schemes.iter() }

    pub fn known_ids(&self) -> String { self.schemes.iter().map(|s| s.id()).join(", ") }
}
