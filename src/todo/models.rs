use serde::{Deserialize, Serialize};

/// A single todo record as returned by the remote API.
///
/// Immutable after fetch except for `completed`, which the app replaces
/// via the toggle operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterBy {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterBy {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            FilterBy::All => true,
            FilterBy::Active => !todo.completed,
            FilterBy::Completed => todo.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterBy::All => "All",
            FilterBy::Active => "Active",
            FilterBy::Completed => "Completed",
        }
    }

    /// Next filter in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FilterBy::All => FilterBy::Active,
            FilterBy::Active => FilterBy::Completed,
            FilterBy::Completed => FilterBy::All,
        }
    }
}

pub fn count_not_completed(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}
