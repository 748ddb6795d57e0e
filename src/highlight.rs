use crate::team::TeamId;


pub const HOVER_CLASS: &str = "team-hover";
pub const SELECTED_CLASS: &str = "team-selected";

// Result of a click on a ranking row under the exclusive-selection policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(TeamId),
    Deselected(TeamId),
    Switched { from: TeamId, to: TeamId },
}

impl SelectionChange {
    // Teams whose indicator elements need their classes re-derived.
    pub fn affected_teams(&self) -> Vec<&TeamId> {
        match self {
            SelectionChange::Selected(team) | SelectionChange::Deselected(team) => vec![team],
            SelectionChange::Switched { from, to } => vec![from, to],
        }
    }
}

// Tracks which row is hovered and which is selected.
//
// State is exposed through pure queries (`is_hovered` / `is_selected` /
// `indicator_classes`): the rendering layer re-derives class membership for
// the affected teams after every event instead of toggling classes
// incrementally, so a lost or reordered pointer event cannot leave a stale
// marker behind.
//
// Click policy is exclusive selection: at most one row is selected at a time,
// clicking the selected row deselects it, clicking another row moves the
// selection.
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    hovered: Option<TeamId>,
    selected: Option<TeamId>,
}

impl SelectionController {
    pub fn new() -> Self { Self::default() }

    pub fn is_hovered(&self, team: &TeamId) -> bool { self.hovered.as_ref() == Some(team) }
    pub fn is_selected(&self, team: &TeamId) -> bool { self.selected.as_ref() == Some(team) }
    pub fn selected(&self) -> Option<&TeamId> { self.selected.as_ref() }

    // Returns the teams whose indicators changed. Normally just `team`, but if
    // a hover-leave event was lost the previous team is included so its marker
    // gets cleared.
    pub fn hover_enter(&mut self, team: TeamId) -> Vec<TeamId> {
        let previous = self.hovered.take().filter(|t| *t != team);
        self.hovered = Some(team.clone());
        match previous {
            Some(previous) => vec![previous, team],
            None => vec![team],
        }
    }

    pub fn hover_leave(&mut self, team: &TeamId) -> Vec<TeamId> {
        if self.hovered.as_ref() == Some(team) {
            self.hovered = None;
        }
        vec![team.clone()]
    }

    pub fn click(&mut self, team: TeamId) -> SelectionChange {
        match self.selected.take() {
            Some(previous) if previous == team => SelectionChange::Deselected(previous),
            Some(previous) => {
                self.selected = Some(team.clone());
                SelectionChange::Switched { from: previous, to: team }
            }
            None => {
                self.selected = Some(team.clone());
                SelectionChange::Selected(team)
            }
        }
    }

    // Classes an indicator element of `team` should carry right now.
    pub fn indicator_classes(&self, team: &TeamId) -> Vec<&'static str> {
        let mut classes = vec![];
        if self.is_hovered(team) {
            classes.push(HOVER_CLASS);
        }
        if self.is_selected(team) {
            classes.push(SELECTED_CLASS);
        }
        classes
    }
}
