//! Integration tests for the JSON persistence adapter.
//!
//! These tests run against real files in temp directories.

use std::path::PathBuf;
use tempfile::TempDir;
use todo_cli::storage::JsonStorage;
use todo_cli::types::Task;

/// Helper returning a storage handle inside a fresh temp directory.
fn setup() -> (TempDir, JsonStorage, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("todo.json");
    let storage = JsonStorage::new(&path);
    (dir, storage, path)
}

mod load_tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_list() {
        let (_dir, storage, _path) = setup();

        let tasks = storage.load().expect("Load of missing file should succeed");

        assert!(tasks.is_empty());
    }

    #[test]
    fn invalid_json_yields_empty_list() {
        let (_dir, storage, path) = setup();
        std::fs::write(&path, "{ not json at all").unwrap();

        let tasks = storage.load().expect("Load of malformed file should succeed");

        assert!(tasks.is_empty());
    }

    #[test]
    fn valid_file_parses_fields() {
        let (_dir, storage, path) = setup();
        std::fs::write(
            &path,
            r#"[
  {
    "task": "Buy milk",
    "completed": true
  }
]"#,
        )
        .unwrap();

        let tasks = storage.load().unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Buy milk");
        assert!(tasks[0].completed);
    }
}

mod save_tests {
    use super::*;

    #[test]
    fn round_trip_preserves_order_and_flags() {
        let (_dir, storage, _path) = setup();
        let mut tasks = vec![
            Task::new("Buy milk"),
            Task::new("Write report"),
            Task::new("Walk the dog"),
        ];
        tasks[1].completed = true;

        storage.save(&tasks).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("todo.json");
        let storage = JsonStorage::new(&path);

        storage.save(&[Task::new("x")]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn on_disk_format_is_pretty_with_task_then_completed() {
        let (_dir, storage, path) = setup();

        storage.save(&[Task::new("Buy milk")]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        let expected = "[\n  {\n    \"task\": \"Buy milk\",\n    \"completed\": false\n  }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let (dir, storage, _path) = setup();

        storage.save(&[Task::new("x")]).unwrap();

        let entries: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["todo.json".to_string()]);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (_dir, storage, _path) = setup();
        storage.save(&[Task::new("old"), Task::new("older")]).unwrap();

        storage.save(&[Task::new("new")]).unwrap();
        let loaded = storage.load().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description, "new");
    }

    #[test]
    fn empty_list_saves_as_empty_array() {
        let (_dir, storage, path) = setup();

        storage.save(&[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(storage.load().unwrap().is_empty());
    }
}
