//! Common test utilities for Modforge integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project, creating parents
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).is_file()
    }

    /// Check if a directory exists in the project
    pub fn dir_exists(&self, path: &str) -> bool {
        self.path.join(path).is_dir()
    }

    /// Seed a content store with two modules covering every artifact kind
    pub fn seed_store(&self) {
        self.write_file(
            "modules/core/agents/pm.md",
            "---\nname: pm\n---\n\n# PM persona\n",
        );
        self.write_file("modules/core/agents/dev.md", "# Dev persona\n");
        self.write_file("modules/core/tasks/review.md", "## Review steps\n");
        self.write_file("modules/core/tools/lint.md", "## Lint tool\n");
        self.write_file(
            "modules/core/workflows/release/release.md",
            "# Release workflow\n",
        );
        self.write_file(
            "modules/core/workflows/release/checklist.yaml",
            "steps: []\n",
        );
        self.write_file("modules/web/agents/ux.md", "# UX persona\n");
        self.write_file("modules/web/tasks/audit.md", "## Audit steps\n");
    }

    /// Seed an empty content store
    pub fn seed_empty_store(&self) {
        std::fs::create_dir_all(self.path.join("modules"))
            .expect("Failed to create modules directory");
    }

    /// Create the IDE configuration root
    pub fn create_config_root(&self) {
        std::fs::create_dir_all(self.path.join(".claude"))
            .expect("Failed to create config root");
    }
}
