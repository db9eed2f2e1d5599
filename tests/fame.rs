//! End-to-end attribution against a real repository built with the git binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use git_fame::fame::OrderBy;
use git_fame::{AuthorStats, Config, FameError};
use tempfile::tempdir;

fn run_git(workspace: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["-c", "commit.gpgsign=false", "-c", "core.autocrlf=false"])
        .args(args)
        .status()
        .expect("run git");
    assert!(status.success(), "git {:?} failed", args);
}

fn git_output(workspace: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(args)
        .output()
        .expect("run git");
    assert!(output.status.success(), "git {:?} failed", args);
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

fn write_file(workspace: &Path, relative: &str, content: &str) {
    let path = workspace.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write file");
}

fn commit_as(workspace: &Path, name: &str, message: &str) {
    let email = format!("{}@example.com", name.to_lowercase());
    run_git(workspace, &["add", "."]);
    let status = Command::new("git")
        .arg("-C")
        .arg(workspace)
        .args(["-c", "commit.gpgsign=false", "commit", "-q", "-m", message])
        .env("GIT_AUTHOR_NAME", name)
        .env("GIT_AUTHOR_EMAIL", &email)
        .env("GIT_COMMITTER_NAME", "Release Bot")
        .env("GIT_COMMITTER_EMAIL", "bot@example.com")
        .status()
        .expect("run git commit");
    assert!(status.success(), "git commit failed");
}

/// Alice writes lib.rs (3 lines), Bob rewrites one of them and adds notes.md,
/// Carol adds an empty file that only the log can attribute.
fn fixture_repo(workspace: &Path) {
    run_git(workspace, &["init", "-q"]);
    write_file(workspace, "src/lib.rs", "fn a() {}\nfn b() {}\nfn c() {}\n");
    commit_as(workspace, "Alice", "initial");

    write_file(workspace, "src/lib.rs", "fn a() {}\nfn b2() {}\nfn c() {}\n");
    write_file(workspace, "notes.md", "one\ntwo\n");
    commit_as(workspace, "Bob", "tweak");

    write_file(workspace, "assets/.keep", "");
    commit_as(workspace, "Carol", "placeholder");
}

fn config_for(workspace: &Path) -> Config {
    Config {
        repository: workspace.to_path_buf(),
        concurrency: 2,
        ..Config::default()
    }
}

fn find<'a>(records: &'a [AuthorStats], name: &str) -> &'a AuthorStats {
    records
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("{name} missing from {records:?}"))
}

#[tokio::test]
async fn attributes_lines_commits_and_files() {
    let temp = tempdir().expect("tempdir");
    fixture_repo(temp.path());

    let records = git_fame::report(&config_for(temp.path())).await.expect("report");

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice", "Carol"]);

    let alice = find(&records, "Alice");
    assert_eq!((alice.lines, alice.commits, alice.files), (2, 1, 1));

    let bob = find(&records, "Bob");
    assert_eq!((bob.lines, bob.commits, bob.files), (3, 1, 2));

    let carol = find(&records, "Carol");
    assert_eq!((carol.lines, carol.commits, carol.files), (0, 1, 1));
}

#[tokio::test]
async fn committer_identity_keeps_log_fallback_on_the_author() {
    let temp = tempdir().expect("tempdir");
    fixture_repo(temp.path());

    let config = Config {
        use_committer: true,
        order_by: OrderBy::Commits,
        ..config_for(temp.path())
    };
    let records = git_fame::report(&config).await.expect("report");

    assert_eq!(
        records,
        vec![
            AuthorStats {
                name: "Release Bot".to_string(),
                lines: 5,
                commits: 2,
                files: 2,
            },
            AuthorStats {
                name: "Carol".to_string(),
                lines: 0,
                commits: 1,
                files: 1,
            },
        ]
    );
}

#[tokio::test]
async fn subdirectory_limits_attribution_to_its_files() {
    let temp = tempdir().expect("tempdir");
    fixture_repo(temp.path());

    let records = git_fame::report(&config_for(&temp.path().join("src")))
        .await
        .expect("report");

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    let alice = find(&records, "Alice");
    assert_eq!((alice.lines, alice.commits, alice.files), (2, 1, 1));
    let bob = find(&records, "Bob");
    assert_eq!((bob.lines, bob.commits, bob.files), (1, 1, 1));
}

#[tokio::test]
async fn filters_narrow_the_file_set() {
    let temp = tempdir().expect("tempdir");
    fixture_repo(temp.path());

    let config = Config {
        languages: vec!["rust".to_string()],
        ..config_for(temp.path())
    };
    let records = git_fame::report(&config).await.expect("report");

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(find(&records, "Bob").files, 1);
}

#[tokio::test]
async fn older_revision_is_attributed_as_of_then() {
    let temp = tempdir().expect("tempdir");
    fixture_repo(temp.path());
    let first = git_output(temp.path(), &["rev-list", "--max-parents=0", "HEAD"]);

    let config = Config {
        revision: first,
        ..config_for(temp.path())
    };
    let records = git_fame::report(&config).await.expect("report");

    assert_eq!(
        records,
        vec![AuthorStats {
            name: "Alice".to_string(),
            lines: 3,
            commits: 1,
            files: 1,
        }]
    );
}

#[tokio::test]
async fn unknown_revision_fails_before_attribution() {
    let temp = tempdir().expect("tempdir");
    fixture_repo(temp.path());

    let config = Config {
        revision: "does-not-exist".to_string(),
        ..config_for(temp.path())
    };
    let err = git_fame::report(&config).await.expect_err("must fail");
    assert!(matches!(err, FameError::RevisionNotFound(_)));
}
