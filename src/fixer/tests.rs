use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;
use crate::logger::{Level, NullLogger, RecordingLogger};

const INDEX_HTML: &str = r#"<!doctype html><html><head><script>var baseUrl = "/"</script><link href="/css/index.css" rel="stylesheet"></head><body><script src="/js/index.js"></script></body></html>"#;

fn write(root: &Path, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn options(base_url: &str) -> FixOptions {
    FixOptions {
        base_url: base_url.to_string(),
        ..FixOptions::default()
    }
}

#[test]
fn test_end_to_end_single_page() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let page = write(root, "a.html", r#"<script src="/js/app.js"></script>"#);
    let other = write(root, "b.txt", r#"<script src="/js/app.js"></script>"#);

    let logger = RecordingLogger::new();
    let summary = fix_archive(root, &options("my/base/"), &logger).unwrap();

    assert_eq!(
        summary,
        FixSummary {
            found: 1,
            fixed: 1,
            skipped: 0
        }
    );
    assert_eq!(
        fs::read_to_string(&page).unwrap(),
        r#"<script src="/my/base/js/app.js"></script>"#
    );
    assert_eq!(
        fs::read_to_string(&other).unwrap(),
        r#"<script src="/js/app.js"></script>"#
    );

    let logs = logger.messages(Level::Log);
    assert!(logs.contains(&"using base URL: my/base/".to_string()));
    assert!(logs.contains(&"found 1 HTML file".to_string()));
    assert!(logs.contains(&"fixed 1 file".to_string()));
    assert_eq!(logs.last().map(String::as_str), Some("done"));
    assert!(logger.contains(Level::Debug, "normalized base URL: /my/base"));
}

#[test]
fn test_nested_pages_and_counts() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let a = write(root, "index.html", INDEX_HTML);
    let b = write(root, "documentation/kit/index.html", INDEX_HTML);
    let c = write(root, "documentation/kit/plain.html", "<p>no assets</p>");

    let logger = RecordingLogger::new();
    let summary = fix_archive(root, &options("/Kit/"), &logger).unwrap();

    assert_eq!(summary.found, 3);
    assert_eq!(summary.fixed, 2);
    assert_eq!(summary.unchanged(), 1);
    assert!(logger.contains(Level::Log, "found 3 HTML files"));
    assert!(logger.contains(Level::Log, "fixed 2 files"));

    for page in [&a, &b] {
        let html = fs::read_to_string(page).unwrap();
        assert!(html.contains(r#"var baseUrl = "/Kit/""#));
        assert!(html.contains(r#"href="/Kit/css/index.css""#));
        assert!(html.contains(r#"src="/Kit/js/index.js""#));
    }
    assert_eq!(fs::read_to_string(&c).unwrap(), "<p>no assets</p>");
}

#[test]
fn test_root_base_url_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let page = write(root, "index.html", INDEX_HTML);

    for base in ["", "/", "///"] {
        let logger = RecordingLogger::new();
        let summary = fix_archive(root, &options(base), &logger).unwrap();
        assert_eq!(summary.found, 1);
        assert_eq!(summary.fixed, 0);
        assert!(logger.contains(Level::Log, "fixed 0 files"));
    }
    assert_eq!(fs::read_to_string(&page).unwrap(), INDEX_HTML);
}

#[test]
fn test_empty_base_url_shown_as_none() {
    let temp = TempDir::new().unwrap();
    let logger = RecordingLogger::new();
    fix_archive(temp.path(), &options(""), &logger).unwrap();
    assert!(logger.contains(Level::Log, "using base URL: (none)"));
    assert!(logger.contains(Level::Log, "found 0 HTML files"));
}

#[test]
fn test_second_run_is_noop() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let page = write(root, "index.html", INDEX_HTML);

    fix_archive(root, &options("docs"), &NullLogger).unwrap();
    let first = fs::read_to_string(&page).unwrap();

    let summary = fix_archive(root, &options("docs"), &NullLogger).unwrap();
    assert_eq!(summary.fixed, 0);
    assert_eq!(fs::read_to_string(&page).unwrap(), first);
    assert!(!first.contains("/docs/docs/"));
}

#[test]
fn test_dry_run_leaves_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let page = write(root, "index.html", INDEX_HTML);

    let logger = RecordingLogger::new();
    let opts = FixOptions {
        dry: true,
        ..options("docs")
    };
    let summary = fix_archive(root, &opts, &logger).unwrap();

    assert_eq!(summary.fixed, 1);
    assert!(logger.contains(Level::Log, "would fix 1 file"));
    assert_eq!(fs::read_to_string(&page).unwrap(), INDEX_HTML);
}

#[test]
fn test_unreadable_file_is_skipped() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    // Not valid UTF-8, so reading it as text fails.
    let broken = write(root, "broken.html", [0xff, 0xfe, 0x00, 0x80]);
    let good = write(root, "good.html", INDEX_HTML);

    let logger = RecordingLogger::new();
    let summary = fix_archive(root, &options("docs"), &logger).unwrap();

    assert_eq!(
        summary,
        FixSummary {
            found: 2,
            fixed: 1,
            skipped: 1
        }
    );
    assert!(logger.contains(Level::Error, "broken.html"));
    assert!(logger.contains(Level::Log, "skipped 1 file"));
    assert_eq!(fs::read(&broken).unwrap(), vec![0xff, 0xfe, 0x00, 0x80]);
    assert!(fs::read_to_string(&good).unwrap().contains("/docs/js/"));
}

#[test]
fn test_fix_file_outcomes() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let rewriter = Rewriter::new(BaseUrl::normalize("docs"));

    let page = write(root, "a.html", r#"href="/css/a.css""#);
    assert_eq!(
        fix_file(&page, &rewriter, false, &NullLogger).unwrap(),
        FileOutcome::Fixed
    );
    assert_eq!(
        fix_file(&page, &rewriter, false, &NullLogger).unwrap(),
        FileOutcome::Unchanged
    );

    let missing = root.join("missing.html");
    let logger = RecordingLogger::new();
    assert_eq!(
        fix_file(&missing, &rewriter, false, &logger).unwrap(),
        FileOutcome::Skipped
    );
    assert!(logger.contains(Level::Error, "failed to process"));
}

#[test]
fn test_missing_root_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");
    let err = fix_archive(&missing, &options("docs"), &NullLogger).unwrap_err();
    assert!(matches!(err, FixError::NotFound(_)));
}

#[test]
fn test_file_root_is_error() {
    let temp = TempDir::new().unwrap();
    let file = write(temp.path(), "index.html", INDEX_HTML);

    let logger = RecordingLogger::new();
    let err = fix_archive(&file, &options("docs"), &logger).unwrap_err();
    assert!(matches!(err, FixError::NotADirectory(_)));
    // Rejected before any narration or processing.
    assert!(logger.messages(Level::Log).is_empty());
    assert_eq!(fs::read_to_string(&file).unwrap(), INDEX_HTML);
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_unwritable_page_aborts_run() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let page = write(root, "index.html", INDEX_HTML);
    set_mode(&page, 0o444);

    // Permission bits do not bind a privileged user.
    if fs::OpenOptions::new().write(true).open(&page).is_ok() {
        set_mode(&page, 0o644);
        return;
    }

    let logger = RecordingLogger::new();
    let result = fix_archive(root, &options("docs"), &logger);
    set_mode(&page, 0o644);

    let err = result.unwrap_err();
    assert!(matches!(&err, FixError::Write(path, _) if path == &page));
    assert!(!logger.contains(Level::Log, "done"));
    assert_eq!(fs::read_to_string(&page).unwrap(), INDEX_HTML);
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_aborts_run() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "index.html", INDEX_HTML);
    write(root, "locked/inner.html", INDEX_HTML);
    let locked = root.join("locked");
    set_mode(&locked, 0o000);

    if fs::read_dir(&locked).is_ok() {
        set_mode(&locked, 0o755);
        return;
    }

    let logger = RecordingLogger::new();
    let result = fix_archive(root, &options("docs"), &logger);
    set_mode(&locked, 0o755);

    assert!(matches!(result, Err(FixError::Walk(..))));
    // Scan fails before any page is touched.
    assert!(!logger.contains(Level::Log, "found"));
    assert_eq!(fs::read_to_string(root.join("index.html")).unwrap(), INDEX_HTML);
}

#[test]
fn test_root_base_url_does_not_read_pages() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "broken.html", [0xff, 0xfe, 0x00, 0x80]);

    let logger = RecordingLogger::new();
    let summary = fix_archive(root, &options("/"), &logger).unwrap();

    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.unchanged(), 1);
    assert!(logger.messages(Level::Error).is_empty());
}
