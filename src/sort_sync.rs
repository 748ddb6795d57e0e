use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};


#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: usize,
    pub direction: SortDirection,
}

// A sortable column can be addressed by index or by its header class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Index(usize),
    HeaderClass(String),
}

// Configuration handed to the host page's table-sorting plugin. The plugin's
// comparison machinery is not ours; we only describe the initial sort and the
// per-column behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    pub initial_sort: SortSpec,
    // Direction used the first time a column is sorted, unless overridden.
    pub initial_order: SortDirection,
    // Re-sorting a previously sorted column starts over from its initial order.
    pub restart: bool,
    // Equal rows keep their relative order.
    pub stable: bool,
    pub column_orders: Vec<(ColumnRef, SortDirection)>,
}

impl SortConfig {
    // The overall-standings table: sorted by total power points (column 2),
    // highest first. Team name and league rank read naturally ascending.
    pub fn overall_standings() -> Self {
        SortConfig {
            initial_sort: SortSpec { column: 2, direction: SortDirection::Desc },
            initial_order: SortDirection::Desc,
            restart: true,
            stable: true,
            column_orders: vec![
                (ColumnRef::HeaderClass("overall-header-team".to_owned()), SortDirection::Asc),
                (
                    ColumnRef::HeaderClass("overall-header-league-rank".to_owned()),
                    SortDirection::Asc,
                ),
            ],
        }
    }

    // Weekly score tables: sorted by points (column 1), highest first; the
    // team column ascending.
    pub fn weekly_scores() -> Self {
        SortConfig {
            initial_sort: SortSpec { column: 1, direction: SortDirection::Desc },
            initial_order: SortDirection::Desc,
            restart: true,
            stable: true,
            column_orders: vec![(ColumnRef::Index(0), SortDirection::Asc)],
        }
    }

    pub fn to_json(&self) -> String { serde_json::to_string(self).unwrap() }
}

// Instruction for a sibling table to adopt the sort a user applied elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCommand {
    pub table: usize,
    pub sort: SortSpec,
}

// A table the sorting collaborator can command. The concrete implementation
// lives with whatever sorting library the page uses.
pub trait SortableTable {
    fn adopt_sort(&mut self, sort: SortSpec);
}

// Keeps N sibling tables sorted in lock-step.
//
// The sorting plugin reports every completed sort, including the ones we
// commanded ourselves. The first completion of a round broadcasts to the
// other N-1 tables; the counter then swallows their completion reports and
// resets once the round is over, so a synchronized round never re-triggers
// itself.
#[derive(Clone, Debug)]
pub struct SortBroadcast {
    tables: usize,
    completed: usize,
}

impl SortBroadcast {
    pub fn new(tables: usize) -> Self { SortBroadcast { tables, completed: 0 } }

    pub fn tables(&self) -> usize { self.tables }

    pub fn sort_completed(&mut self, origin: usize, sort: SortSpec) -> Vec<SortCommand> {
        self.completed += 1;
        let commands = if self.completed == 1 {
            (0..self.tables)
                .filter(|&table| table != origin)
                .map(|table| SortCommand { table, sort })
                .collect()
        } else {
            vec![]
        };
        if self.completed >= self.tables {
            self.completed = 0;
        }
        commands
    }
}

// Synchronous driver over in-process tables. The wasm layer talks to the
// sorting plugin directly and only shares `SortBroadcast`; this wrapper
// exists for hosts whose tables live in-process (and for tests).
pub struct SyncedTables<T: SortableTable> {
    tables: Vec<T>,
    broadcast: SortBroadcast,
}

impl<T: SortableTable> SyncedTables<T> {
    pub fn new(tables: Vec<T>) -> Self {
        let broadcast = SortBroadcast::new(tables.len());
        SyncedTables { tables, broadcast }
    }

    pub fn tables(&self) -> &[T] { &self.tables }

    // Entry point for the collaborator's sort-completed notification. Each
    // commanded follower reports back immediately, which exercises the same
    // guard path as the asynchronous plugin.
    pub fn sort_completed(&mut self, origin: usize, sort: SortSpec) {
        for command in self.broadcast.sort_completed(origin, sort) {
            self.tables[command.table].adopt_sort(command.sort);
            self.sort_completed(command.table, command.sort);
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Default)]
    struct FakeTable {
        sort: Option<SortSpec>,
        adopted: usize,
    }

    impl SortableTable for FakeTable {
        fn adopt_sort(&mut self, sort: SortSpec) {
            self.sort = Some(sort);
            self.adopted += 1;
        }
    }

    fn spec(column: usize, direction: SortDirection) -> SortSpec { SortSpec { column, direction } }

    #[test]
    fn broadcast_commands_all_followers_once() {
        let mut broadcast = SortBroadcast::new(4);
        let sort = spec(1, SortDirection::Desc);
        let commands = broadcast.sort_completed(2, sort);
        assert_eq!(
            commands,
            vec![
                SortCommand { table: 0, sort },
                SortCommand { table: 1, sort },
                SortCommand { table: 3, sort },
            ]
        );
        // Follower completions are swallowed.
        assert_eq!(broadcast.sort_completed(0, sort), vec![]);
        assert_eq!(broadcast.sort_completed(1, sort), vec![]);
        assert_eq!(broadcast.sort_completed(3, sort), vec![]);
        // Guard has reset: a new user sort starts a fresh round.
        let sort2 = spec(0, SortDirection::Asc);
        assert_eq!(broadcast.sort_completed(1, sort2).len(), 3);
    }

    #[test]
    fn single_table_round_is_trivial() {
        let mut broadcast = SortBroadcast::new(1);
        let sort = spec(1, SortDirection::Desc);
        assert_eq!(broadcast.sort_completed(0, sort), vec![]);
        // And again: the guard must not wedge.
        assert_eq!(broadcast.sort_completed(0, sort), vec![]);
    }

    #[test]
    fn synced_tables_converge_without_looping() {
        let mut synced = SyncedTables::new(vec![
            FakeTable::default(),
            FakeTable::default(),
            FakeTable::default(),
        ]);
        let sort = spec(1, SortDirection::Desc);
        synced.sort_completed(0, sort);
        for table in synced.tables() {
            assert_eq!(table.sort.unwrap_or(sort), sort);
        }
        // The origin table is skipped; each follower was commanded exactly once.
        assert_eq!(synced.tables()[0].adopted, 0);
        assert_eq!(synced.tables()[1].adopted, 1);
        assert_eq!(synced.tables()[2].adopted, 1);
    }

    #[test]
    fn config_serializes_for_the_plugin() {
        let config = SortConfig::weekly_scores();
        let json: serde_json::Value = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(json["initialSort"]["column"], 1);
        assert_eq!(json["initialSort"]["direction"], "desc");
        assert_eq!(json["columnOrders"][0][0], 0);
        assert_eq!(json["columnOrders"][0][1], "asc");
        assert_eq!(json["restart"], true);
        assert_eq!(json["stable"], true);
    }

    #[test]
    fn direction_parses_from_plugin_strings() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
