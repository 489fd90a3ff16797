use tempfile::TempDir;
use wallpath_core::{Controller, ControllerBuilder};

/// Helper function to create a test controller
pub async fn create_test_controller() -> (TempDir, Controller) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let controller = ControllerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create controller");
    (temp_dir, controller)
}
