// Browser glue for the power-league page: row/team highlighting, the
// cookie-persisted display-scheme preference and the sort-sync bridge for the
// page's table-sorting plugin. All interaction state lives in the
// `power_league` core crate; this crate only wires DOM events to it and
// re-derives element classes from controller state.

pub mod cookie;
pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;
pub mod web_iterators;

use std::cell::RefCell;

use itertools::Itertools;
use wasm_bindgen::prelude::*;

use power_league::highlight::{SelectionController, HOVER_CLASS, SELECTED_CLASS};
use power_league::preference::DisplayPreference;
use power_league::scheme::{
    Scheme, Schemes, ACTIVE_SELECTOR_CLASS, HIDDEN_CLASS, SCHEME_SECTION_CLASS,
};
use power_league::sort_sync::{SortBroadcast, SortConfig, SortSpec};
use power_league::team::{team_id_from_row_id, TeamId};

use crate::cookie::CookieStore;
use crate::web_document::web_document;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


const RANKING_ROW_SELECTOR: &str = ".overall-table tbody tr[id]";
const SCHEME_SELECTOR_SELECTOR: &str = "[data-scheme-id]";
const WEEKLY_TABLE_SELECTOR: &str = ".weekly table";
const NEWSLETTER_EXPORT_CLASS: &str = "newsletter-export";
const NEWSLETTER_CONTAINER_CLASS: &str = "newsletter-container";

struct PageState {
    selection: SelectionController,
    preference: DisplayPreference,
    store: CookieStore,
    weekly_broadcast: SortBroadcast,
}

// The client is single-threaded, so wrapping all mutable singletons in `thread_local!` seems ok.
thread_local! {
    static PAGE_STATE: RefCell<Option<PageState>> = const { RefCell::new(None) };
}

fn with_state<T>(f: impl FnOnce(&mut PageState) -> JsResult<T>) -> JsResult<T> {
    PAGE_STATE.with(|cell| {
        let mut state = cell.borrow_mut();
        let state = state.as_mut().ok_or_else(|| rust_error!("Page is not initialized"))?;
        f(state)
    })
}

// Installs all event listeners and applies the stored display preference.
// Call once, after the document is ready.
#[wasm_bindgen]
pub fn init_page() -> JsResult<()> {
    let document = web_document();

    let store = CookieStore::new()?;
    let preference = DisplayPreference::new(Schemes::standard());
    let weekly_tables = document.query_selector_all(WEEKLY_TABLE_SELECTOR)?.count();
    let initial_scheme = preference.initialize(&store).cloned();
    PAGE_STATE.with(|cell| {
        *cell.borrow_mut() = Some(PageState {
            selection: SelectionController::new(),
            preference,
            store,
            weekly_broadcast: SortBroadcast::new(weekly_tables),
        });
    });

    let rows = document.query_selector_all_elements(RANKING_ROW_SELECTOR)?.collect_vec();
    for row in rows {
        let team = team_id_from_row_id(&row.id()).map_err(|err| rust_error!("{}", err))?;
        wire_ranking_row(&row, team)?;
    }

    for control in document.query_selector_all_elements(SCHEME_SELECTOR_SELECTOR)? {
        let Some(scheme_id) = control.data_attr("scheme-id") else {
            continue;
        };
        control.add_event_listener_and_forget("click", move |_: web_sys::Event| {
            scheme_selected(&scheme_id)
        })?;
    }

    for control in document.get_elements_by_class_name(NEWSLETTER_EXPORT_CLASS).collect_vec() {
        control.add_event_listener_and_forget("click", |_: web_sys::Event| {
            toggle_newsletter_panel()
        })?;
    }

    if let Some(scheme) = initial_scheme {
        with_state(|state| apply_scheme_classes(&scheme, state.preference.schemes()))?;
    }
    Ok(())
}

fn wire_ranking_row(row: &web_sys::Element, team: TeamId) -> JsResult<()> {
    let enter_team = team.clone();
    row.add_event_listener_and_forget("mouseenter", move |_: web_sys::Event| {
        let affected = with_state(|state| Ok(state.selection.hover_enter(enter_team.clone())))?;
        refresh_team_indicators(&affected)
    })?;

    let leave_team = team.clone();
    row.add_event_listener_and_forget("mouseleave", move |_: web_sys::Event| {
        let affected = with_state(|state| Ok(state.selection.hover_leave(&leave_team)))?;
        refresh_team_indicators(&affected)
    })?;

    row.add_event_listener_and_forget("click", move |_: web_sys::Event| {
        let change = with_state(|state| Ok(state.selection.click(team.clone())))?;
        let affected = change.affected_teams().into_iter().cloned().collect_vec();
        refresh_team_indicators(&affected)
    })?;
    Ok(())
}

// Re-derives hover/selection classes for every indicator element of the given
// teams. Indicators may be legitimately absent (partial render): an empty
// match set is fine.
fn refresh_team_indicators(teams: &[TeamId]) -> JsResult<()> {
    let document = web_document();
    with_state(|state| {
        for team in teams {
            for element in document.get_elements_by_class_name(&team.indicator_class()) {
                element.toggle_class_when(HOVER_CLASS, state.selection.is_hovered(team))?;
                element.toggle_class_when(SELECTED_CLASS, state.selection.is_selected(team))?;
            }
        }
        Ok(())
    })
}

fn scheme_selected(scheme_id: &str) -> JsResult<()> {
    let scheme = with_state(|state| {
        let PageState { preference, store, .. } = state;
        Ok(preference.apply_scheme(store, scheme_id).cloned())
    })?;
    let Some(scheme) = scheme else {
        return Err(rust_error!("Unknown display scheme: {}", scheme_id));
    };
    with_state(|state| apply_scheme_classes(&scheme, state.preference.schemes()))
}

// Hides every scheme-scoped section, shows the chosen scheme's sections and
// moves the active marker on the selector controls. Sections not tagged with
// any scheme keep their markup-default visibility.
fn apply_scheme_classes(scheme: &Scheme, schemes: &Schemes) -> JsResult<()> {
    let document = web_document();
    for section in document.get_elements_by_class_name(SCHEME_SECTION_CLASS).collect_vec() {
        let visible = section.has_class(&scheme.section_class());
        section.toggle_class_when(HIDDEN_CLASS, !visible)?;
    }
    for control in document.query_selector_all_elements(SCHEME_SELECTOR_SELECTOR)? {
        let active = control
            .data_attr("scheme-id")
            .and_then(|id| schemes.get(&id))
            .is_some_and(|control_scheme| control_scheme.id() == scheme.id());
        control.toggle_class_when(ACTIVE_SELECTOR_CLASS, active)?;
    }
    Ok(())
}

fn toggle_newsletter_panel() -> JsResult<()> {
    let document = web_document();
    for panel in document.get_elements_by_class_name(NEWSLETTER_CONTAINER_CLASS).collect_vec() {
        panel.toggle_class(HIDDEN_CLASS)?;
    }
    for control in document.get_elements_by_class_name(NEWSLETTER_EXPORT_CLASS).collect_vec() {
        control.toggle_class(ACTIVE_SELECTOR_CLASS)?;
    }
    Ok(())
}

// Sorting plugin configuration, as JSON. The plugin itself stays on the JS
// side; the page glue translates these settings into plugin options.
#[wasm_bindgen]
pub fn overall_sort_config() -> String { SortConfig::overall_standings().to_json() }

#[wasm_bindgen]
pub fn weekly_sort_config() -> String { SortConfig::weekly_scores().to_json() }

// Entry point for the plugin's sort-completed notification. `table_index` is
// the table's position in document order among the weekly tables. Returns a
// JSON array of `{table, sort}` commands for the tables that must adopt the
// sort; commanded tables report back here too, and the broadcast guard keeps
// one user sort from echoing forever.
#[wasm_bindgen]
pub fn weekly_sort_completed(table_index: usize, column: usize, direction: &str) -> JsResult<String> {
    let direction = direction
        .parse()
        .map_err(|_| rust_error!("Unknown sort direction: {}", direction))?;
    let sort = SortSpec { column, direction };
    let commands =
        with_state(|state| Ok(state.weekly_broadcast.sort_completed(table_index, sort)))?;
    Ok(serde_json::to_string(&commands).unwrap())
}
