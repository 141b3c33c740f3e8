#![forbid(unsafe_code)]

//! Navigation targets owned by the jks server.
//!
//! Only the path is produced here; interpreting it is the server's job.

use std::fmt;

/// Relative day addressed by the `/day/:token` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayToken {
    Yesterday,
    Today,
    Tomorrow,
}

impl DayToken {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yesterday => "yesterday",
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
        }
    }
}

/// A full-page navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Most recent activity.
    LatestActivity,
    /// Day view for a relative day.
    Day(DayToken),
    /// Tasks without a completed activity.
    UndoneTasks,
    /// New task form.
    NewTask,
    /// New task form with an initial activity.
    NewTaskActivity,
    /// Login and timezone settings.
    Settings,
}

impl Route {
    /// Absolute path of this route on the jks server.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::LatestActivity => "/activity/latest",
            Self::Day(DayToken::Yesterday) => "/day/yesterday",
            Self::Day(DayToken::Today) => "/day/today",
            Self::Day(DayToken::Tomorrow) => "/day/tomorrow",
            Self::UndoneTasks => "/undone-tasks",
            Self::NewTask => "/task/new",
            Self::NewTaskActivity => "/task/new/activity/new",
            Self::Settings => "/login/settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_paths_embed_token() {
        for token in [DayToken::Yesterday, DayToken::Today, DayToken::Tomorrow] {
            let path = Route::Day(token).path();
            assert_eq!(path.strip_prefix("/day/"), Some(token.as_str()));
        }
    }

    #[test]
    fn display_is_path() {
        assert_eq!(Route::Settings.to_string(), "/login/settings");
        assert_eq!(Route::NewTaskActivity.to_string(), "/task/new/activity/new");
    }
}
