use std::fmt;

use serde::{Deserialize, Serialize};


// Opaque team identifier, as rendered into the page by the server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self { TeamId(id.into()) }

    pub fn as_str(&self) -> &str { &self.0 }

    // Class carried by every page element associated with this team outside
    // the ranking row itself (chart markers, legend entries).
    pub fn indicator_class(&self) -> String { format!("team-{}", self.0) }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowIdError {
    pub row_id: String,
}

impl fmt::Display for RowIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed row id {:?}: expected \"<prefix>-<team id>\"", self.row_id)
    }
}

impl std::error::Error for RowIdError {}

// Extracts the team id from a row id of the form "<prefix>-<team id>".
//
// The prefix itself may contain the separator ("team-row-17"), so the split
// must happen at the last occurrence, not the first.
pub fn team_id_from_row_id(row_id: &str) -> Result<TeamId, RowIdError> {
    match row_id.rsplit_once('-') {
        Some((_, team)) if !team.is_empty() => Ok(TeamId::new(team)),
        _ => Err(RowIdError { row_id: row_id.to_owned() }),
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn last_separator_wins() {
        assert_eq!(team_id_from_row_id("team-7").unwrap(), TeamId::new("7"));
        assert_eq!(team_id_from_row_id("team-row-17").unwrap(), TeamId::new("17"));
        assert_eq!(team_id_from_row_id("a-b-c").unwrap(), TeamId::new("c"));
    }

    #[test]
    fn malformed_row_ids_fail_loudly() {
        assert!(team_id_from_row_id("team17").is_err());
        assert!(team_id_from_row_id("team-").is_err());
        assert!(team_id_from_row_id("").is_err());
    }

    #[test]
    fn indicator_class() {
        assert_eq!(TeamId::new("17").indicator_class(), "team-17");
    }
}
