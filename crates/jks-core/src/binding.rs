#![forbid(unsafe_code)]

//! Fixed single-key navigation bindings.
//!
//! Keys are distinct characters and matching is exact and case-sensitive:
//! `D` navigates, `d` does not. Lookup scans in table order, so the first
//! entry wins if the table were ever to contain a duplicate.

use crate::key::KeyCode;
use crate::route::{DayToken, Route};

/// The binding table, in priority order.
pub const BINDINGS: [(char, Route); 8] = [
    ('L', Route::LatestActivity),
    ('-', Route::Day(DayToken::Yesterday)),
    ('D', Route::Day(DayToken::Today)),
    ('+', Route::Day(DayToken::Tomorrow)),
    ('U', Route::UndoneTasks),
    ('T', Route::NewTask),
    ('A', Route::NewTaskActivity),
    ('S', Route::Settings),
];

/// Route bound to `key`, if any.
#[must_use]
pub fn lookup(key: &KeyCode) -> Option<Route> {
    let c = key.as_char()?;
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == c)
        .map(|&(_, route)| route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_matches_server_routes() {
        let cases = [
            ('L', "/activity/latest"),
            ('-', "/day/yesterday"),
            ('D', "/day/today"),
            ('+', "/day/tomorrow"),
            ('U', "/undone-tasks"),
            ('T', "/task/new"),
            ('A', "/task/new/activity/new"),
            ('S', "/login/settings"),
        ];
        for (key, path) in cases {
            let route = lookup(&KeyCode::Char(key)).expect("bound key");
            assert_eq!(route.path(), path, "key {key:?}");
        }
    }

    #[test]
    fn keys_are_distinct() {
        let keys: HashSet<char> = BINDINGS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), BINDINGS.len());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup(&KeyCode::Char('d')), None);
        assert_eq!(lookup(&KeyCode::Char('s')), None);
    }

    #[test]
    fn named_keys_never_match() {
        assert_eq!(lookup(&KeyCode::Named("Minus".into())), None);
        assert_eq!(lookup(&KeyCode::Named("".into())), None);
    }
}
