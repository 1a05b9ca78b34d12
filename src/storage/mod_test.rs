use crate::config::{MemoryStorage, SqliteStorage};

use super::*;

fn sqlite_config(path: &str) -> StorageConfig {
    StorageConfig::Sqlite(SqliteStorage {
        path: Some(path.to_string()),
    })
}

#[tokio::test]
async fn test_new_storage_sqlite_creates_file_and_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/dir/tasks.db");
    let config = sqlite_config(path.to_str().unwrap());

    let storage = new_storage(&config).await.unwrap();
    assert!(path.exists());
    assert!(storage.list_tasks().await.unwrap().is_empty());
    let id = storage
        .create_task(NewTask::new("Buy milk", "").unwrap())
        .await
        .unwrap();
    drop(storage);

    let storage = new_storage(&config).await.unwrap();
    let tasks = storage.list_tasks().await.unwrap();
    assert_eq!(tasks, vec![Task::new(id, "Buy milk")]);
}

#[tokio::test]
async fn test_new_storage_expands_variables() {
    let dir = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("TASKBOOK_TEST_DATA_DIR", dir.path());
    }

    let storage = new_storage(&sqlite_config("${TASKBOOK_TEST_DATA_DIR}/tasks.db"))
        .await
        .unwrap();
    assert!(storage.list_tasks().await.unwrap().is_empty());
    assert!(dir.path().join("tasks.db").exists());
}

#[tokio::test]
async fn test_new_storage_memory_is_initialized() {
    let storage = new_storage(&StorageConfig::Memory(MemoryStorage {}))
        .await
        .unwrap();
    assert!(storage.list_tasks().await.unwrap().is_empty());

    storage
        .create_task(NewTask::new("Buy milk", "").unwrap())
        .await
        .unwrap();
    assert_eq!(storage.list_tasks().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_new_storage_rejects_empty_path() {
    assert!(new_storage(&sqlite_config("")).await.is_err());

    let err = new_storage(&sqlite_config("$TASKBOOK_TEST_UNSET_VAR"))
        .await
        .err()
        .unwrap();
    assert!(format!("{:?}", err).contains("resolving database path"));
}
