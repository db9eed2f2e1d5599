use git2::{ErrorCode, ObjectType, Repository, TreeWalkMode, TreeWalkResult};
use std::path::{Path, PathBuf};

use crate::error::{FameError, Result};

pub struct GitRepository {
    pub repo: Repository,
    pub path: String,
    /// Location of `path` inside the working tree. Empty at the root.
    prefix: PathBuf,
}

impl GitRepository {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let repo = Repository::discover(&path).map_err(|_| FameError::RepoNotFound(path_str.clone()))?;

        let prefix = match repo.workdir() {
            Some(root) => {
                let root = root.canonicalize()?;
                let here = path.as_ref().canonicalize()?;
                here.strip_prefix(&root).map(Path::to_path_buf).unwrap_or_default()
            }
            None => PathBuf::new(),
        };

        Ok(Self {
            repo,
            path: path_str,
            prefix,
        })
    }

    /// Directory git commands should run in. Listed paths are relative to it.
    pub fn workdir(&self) -> PathBuf {
        match self.repo.workdir() {
            Some(root) => root.join(&self.prefix),
            None => self.repo.path().to_path_buf(),
        }
    }

    /// Resolve a revision to the tree it points at.
    pub fn resolve_revision(&self, revision: &str) -> Result<git2::Tree<'_>> {
        let object = self
            .repo
            .revparse_single(revision)
            .map_err(|_| FameError::RevisionNotFound(revision.to_string()))?;
        object
            .peel_to_tree()
            .map_err(|_| FameError::RevisionNotFound(revision.to_string()))
    }

    /// Every file path under the opened directory in the tree at `revision`,
    /// in tree order.
    ///
    /// Submodule entries are skipped. A directory that does not exist at
    /// `revision` has no files.
    pub fn list_files(&self, revision: &str) -> Result<Vec<String>> {
        let mut tree = self.resolve_revision(revision)?;
        if !self.prefix.as_os_str().is_empty() {
            tree = match tree.get_path(&self.prefix) {
                Ok(entry) => entry.to_object(&self.repo)?.peel_to_tree()?,
                Err(e) if e.code() == ErrorCode::NotFound => {
                    tracing::debug!("{} does not exist at {}", self.prefix.display(), revision);
                    return Ok(Vec::new());
                }
                Err(e) => return Err(e.into()),
            };
        }

        let mut files = Vec::new();
        tree.walk(TreeWalkMode::PreOrder, |root, entry| {
            if entry.kind() == Some(ObjectType::Blob) {
                let name = String::from_utf8_lossy(entry.name_bytes());
                files.push(format!("{}{}", root, name));
            }
            TreeWalkResult::Ok
        })?;

        tracing::debug!("Listed {} files at {} in {}", files.len(), revision, self.path);
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rejects_non_repository() {
        let dir = tempfile::tempdir().unwrap();
        let err = GitRepository::open(dir.path()).err().unwrap();
        assert!(matches!(err, FameError::RepoNotFound(_)));
    }

    #[test]
    fn unknown_revision_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let repo = GitRepository::open(dir.path()).unwrap();
        let err = repo.list_files("no-such-branch").err().unwrap();
        assert!(matches!(err, FameError::RevisionNotFound(r) if r == "no-such-branch"));
    }

    fn committed_tree(dir: &Path) {
        let repo = Repository::init(dir).unwrap();
        std::fs::create_dir_all(dir.join("src/bin")).unwrap();
        std::fs::write(dir.join("README.md"), "hello\n").unwrap();
        std::fs::write(dir.join("src/lib.rs"), "fn a() {}\n").unwrap();
        std::fs::write(dir.join("src/bin/main.rs"), "fn main() {}\n").unwrap();

        let mut index = repo.index().unwrap();
        index
            .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("Alice", "alice@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
    }

    #[test]
    fn lists_nested_blobs() {
        let dir = tempfile::tempdir().unwrap();
        committed_tree(dir.path());

        let git_repo = GitRepository::open(dir.path()).unwrap();
        let files = git_repo.list_files("HEAD").unwrap();
        assert_eq!(files, vec!["README.md", "src/bin/main.rs", "src/lib.rs"]);
    }

    #[test]
    fn subdirectory_lists_only_its_own_files() {
        let dir = tempfile::tempdir().unwrap();
        committed_tree(dir.path());

        let git_repo = GitRepository::open(dir.path().join("src")).unwrap();
        assert_eq!(git_repo.list_files("HEAD").unwrap(), vec!["bin/main.rs", "lib.rs"]);
        assert!(git_repo.workdir().ends_with("src"));
    }

    #[test]
    fn subdirectory_missing_at_revision_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        committed_tree(dir.path());
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();

        let git_repo = GitRepository::open(dir.path().join("docs")).unwrap();
        assert!(git_repo.list_files("HEAD").unwrap().is_empty());
    }
}
