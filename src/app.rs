//! Views and route declarations of the assignee / to-do application.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routing::{RouteError, RouteTable};

/// Handle for a view component rendered by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    About,
    Assignees,
    CreateEditAssignee,
    Todos,
    CreateEditTodo,
    AssigneeById,
    TodoById,
    ExportTodos,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Home,
        View::About,
        View::Assignees,
        View::CreateEditAssignee,
        View::Todos,
        View::CreateEditTodo,
        View::AssigneeById,
        View::TodoById,
        View::ExportTodos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::Assignees => "assignees",
            View::CreateEditAssignee => "create-edit-assignee",
            View::Todos => "todos",
            View::CreateEditTodo => "create-edit-todo",
            View::AssigneeById => "assignee-by-id",
            View::TodoById => "todo-by-id",
            View::ExportTodos => "export-todos",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view {0:?}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Route declarations of the application, in precedence order.
pub const ROUTES: &[(&str, View)] = &[
    ("/", View::Home),
    ("/about", View::About),
    ("/assignees", View::Assignees),
    ("/create-assignee", View::CreateEditAssignee),
    ("/assignees/:id/edit", View::CreateEditAssignee),
    ("/todos", View::Todos),
    ("/create-todo", View::CreateEditTodo),
    ("/todos/:id/edit", View::CreateEditTodo),
    ("/assignee-by-id", View::AssigneeById),
    ("/todo-by-id", View::TodoById),
    ("/export-todos", View::ExportTodos),
];

/// Build the application's route table.
pub fn route_table() -> Result<RouteTable<View>, RouteError> {
    RouteTable::new(ROUTES.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names_round_trip() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.as_str()));
        }
        assert_eq!(
            "ToDoView".parse::<View>(),
            Err(UnknownView("ToDoView".into()))
        );
    }

    #[test]
    fn test_application_table_has_no_shadowed_routes() {
        let table = route_table().unwrap();
        assert_eq!(table.len(), ROUTES.len());
        assert!(table.shadowed().is_empty());
    }

    #[test]
    fn test_every_view_is_reachable() {
        let table = route_table().unwrap();
        for view in View::ALL {
            assert!(
                table.routes().iter().any(|r| *r.target() == view),
                "{view} has no route"
            );
        }
    }
}
