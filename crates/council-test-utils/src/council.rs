//! [`TestCouncil`] builder for sync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helper methods for test setup and
/// assertion.
///
/// The council root lives at `<project>/.council`, matching the default
/// configuration.
///
/// # Example
///
/// ```rust,no_run
/// use council_test_utils::TestCouncil;
///
/// let council = TestCouncil::new();
/// council.add_expert("", "dhh", "David Heinemeier Hansson", "Rails");
/// council.create_dir(".claude");
/// council.assert_file_exists(".council/experts/dhh.md");
/// ```
pub struct TestCouncil {
    temp_dir: TempDir,
}

impl Default for TestCouncil {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCouncil {
    /// Create an empty temporary project.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root path of the temporary project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Default council root, `<project>/.council`.
    pub fn council_root(&self) -> PathBuf {
        self.root().join(".council")
    }

    /// Create an empty council root.
    pub fn init_council_root(&self) {
        fs::create_dir_all(self.council_root()).unwrap();
    }

    /// Write an expert file with the minimal frontmatter.
    ///
    /// `source` uses the provenance notation: `""`, `"custom"` or
    /// `"installed:<repo>"`.
    pub fn add_expert(&self, source: &str, id: &str, name: &str, focus: &str) -> PathBuf {
        let content = format!("---\nid: {id}\nname: {name}\nfocus: {focus}\n---\n");
        self.add_expert_raw(source, id, &content)
    }

    /// Write an expert file with arbitrary content.
    pub fn add_expert_raw(&self, source: &str, id: &str, content: &str) -> PathBuf {
        let dir = match source {
            "" => "experts".to_string(),
            "custom" => "custom".to_string(),
            other => match other.strip_prefix("installed:") {
                Some(repo) => format!("installed/{repo}"),
                None => panic!("TestCouncil::add_expert: unknown source '{other}'"),
            },
        };
        let relative = format!(".council/{dir}/{id}.md");
        self.write_file(&relative, content);
        self.root().join(relative)
    }

    /// Write `<project>/.council/config.toml`.
    pub fn write_config(&self, content: &str) {
        self.write_file(".council/config.toml", content);
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Create a directory relative to the project root.
    pub fn create_dir(&self, path: &str) {
        fs::create_dir_all(self.root().join(path)).unwrap();
    }

    /// Occupy `path` with a regular file so nothing can be created beneath it.
    ///
    /// Works regardless of the user running the tests, unlike permission bits.
    pub fn block_path(&self, path: &str) {
        let full_path = self.root().join(path);
        if full_path.is_dir() {
            fs::remove_dir_all(&full_path).unwrap();
        }
        self.write_file(path, "blocked");
    }

    /// Read a file relative to the project root.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Sorted file names directly inside `dir`.
    pub fn list_dir(&self, dir: &str) -> Vec<String> {
        let full_path = self.root().join(dir);
        let mut names: Vec<String> = fs::read_dir(&full_path)
            .unwrap_or_else(|_| panic!("Could not list directory: {}", full_path.display()))
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
