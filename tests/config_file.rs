//! Loading route configuration from disk.

use std::io::Write;

use tempfile::NamedTempFile;
use todo_routes::config::{load_config, read_config, ConfigError, ValidationError};
use todo_routes::navigation::{Fallback, HistoryMode};
use todo_routes::{Navigator, View};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_install() {
    let file = write_config(
        r#"
        history = "path"

        [fallback]
        kind = "redirect"
        to = "/todos"

        [observability]
        log_level = "debug"
        log_format = "json"

        [[routes]]
        path = "/todos"
        view = "todos"

        [[routes]]
        path = "/todos/:id/edit"
        view = "create-edit-todo"
        "#,
    );

    let config = load_config(file.path()).unwrap();
    let mut navigator = Navigator::from_config(&config).unwrap();
    assert_eq!(navigator.history_mode(), HistoryMode::Path);

    let state = navigator.navigate("https://todo.example/todos/9/edit");
    assert_eq!(state.target(), Some(&View::CreateEditTodo));
    assert_eq!(state.param("id"), Some("9"));

    let state = navigator.navigate("https://todo.example/about");
    assert_eq!(state.target(), Some(&View::Todos));
    assert_eq!(state.redirected_from.as_deref(), Some("/about"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("routes.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_shadowed_static_route_rejected() {
    let file = write_config(
        r#"
        [[routes]]
        path = "/todos"
        view = "todos"

        [[routes]]
        path = "/todos"
        view = "export-todos"
        "#,
    );

    match load_config(file.path()) {
        Err(ConfigError::Validation(errors)) => assert_eq!(
            errors,
            vec![ValidationError::Shadowed {
                path: "/todos".into(),
                shadowed_by: "/todos".into(),
            }]
        ),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_not_found_fallback_by_default() {
    let file = write_config("history = \"hash\"\n");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.fallback, Fallback::NotFound);

    let mut navigator = Navigator::from_config(&config).unwrap();
    assert!(navigator.navigate("#/todos/1").is_not_found());
}

#[test]
fn test_read_config_defers_validation() {
    let file = write_config(
        r#"
        [observability]
        log_level = "debug"

        [[routes]]
        path = "/bad//x"
        view = "about"
        "#,
    );

    let config = read_config(file.path()).unwrap();
    assert_eq!(config.observability.log_level, "debug");
    assert!(matches!(
        load_config(file.path()),
        Err(ConfigError::Validation(_))
    ));
}
