use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("daylog-{prefix}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn daylog_bin() -> String {
    std::env::var("CARGO_BIN_EXE_daylog").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("daylog.exe");
        } else {
            path.push("daylog");
        }
        path.to_string_lossy().into_owned()
    })
}

/// Run the binary with an isolated HOME so no user config leaks in
fn run_daylog(args: &[&str], home: &Path) -> (bool, String, String) {
    let mut cmd = Command::new(daylog_bin());
    cmd.args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("TZ", "UTC")
        // Keep git from finding a repository above the test folder
        .env("GIT_CEILING_DIRECTORIES", home)
        .env_remove("RUST_LOG");
    for var in [
        "DAYLOG_ROOT",
        "DAYLOG_AUTHOR",
        "DAYLOG_OUTPUT",
        "DAYLOG_JOBS",
        "DAYLOG_TZ",
        "DAYLOG_CONFIG",
    ] {
        cmd.env_remove(var);
    }
    let output = cmd.output().expect("run daylog");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

fn git(dir: &Path, args: &[&str], date: &str, author: &str) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", author)
        .env("GIT_AUTHOR_EMAIL", format!("{}@example.com", author.to_lowercase()))
        .env("GIT_COMMITTER_NAME", author)
        .env("GIT_COMMITTER_EMAIL", format!("{}@example.com", author.to_lowercase()))
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("HOME", dir)
        .env("TZ", "UTC")
        .output()
        .expect("run git");
    assert!(status.status.success(), "git {:?}: {}", args, String::from_utf8_lossy(&status.stderr));
}

fn init_repo(dir: &Path) {
    fs::create_dir_all(dir).expect("create repo dir");
    git(dir, &["init", "-q"], "2024-01-01T00:00:00+00:00", "Setup");
}

fn commit(dir: &Path, message: &str, date: &str, author: &str) {
    git(dir, &["commit", "-q", "--allow-empty", "-m", message], date, author);
}

struct Workspace {
    base: PathBuf,
    root: PathBuf,
    out: PathBuf,
}

impl Workspace {
    fn new(prefix: &str) -> Self {
        let base = unique_temp_dir(prefix);
        let root = base.join("projects");
        let out = base.join("history");
        fs::create_dir_all(&root).expect("root");
        fs::create_dir_all(&out).expect("out");
        Self { base, root, out }
    }

    fn run(&self, args: &[&str]) -> (bool, String, String) {
        let mut full: Vec<&str> = args.to_vec();
        let root = self.root.to_string_lossy().into_owned();
        let out = self.out.to_string_lossy().into_owned();
        full.extend(["--root", &root, "--output", &out, "--no-color"]);
        run_daylog(&full, &self.base)
    }

    fn reports(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.out)
            .expect("read out")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn report(&self, name: &str) -> String {
        fs::read_to_string(self.out.join(name)).expect("read report")
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.base);
    }
}

#[test]
fn nested_repository_is_not_reported_separately() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let ws = Workspace::new("nested");
    let a = ws.root.join("A");
    let b = a.join("B");
    init_repo(&a);
    commit(&a, "first change", "2024-01-02T10:00:00+00:00", "Rangel");
    init_repo(&b);
    commit(&b, "inner change", "2024-01-02T11:00:00+00:00", "Rangel");

    let (ok, _, stderr) = ws.run(&["range", "2024-01-02", "2024-01-02"]);
    assert!(ok, "stderr: {stderr}");

    assert_eq!(ws.reports(), vec!["2024-01-02.txt"]);
    let content = ws.report("2024-01-02.txt");
    let header = format!("{}:\n\t", a.display());
    assert!(content.starts_with(&header), "content: {content:?}");
    let body = &content[header.len()..];
    assert!(body.ends_with(" 2024-01-02 10:00:00 +0000 first change\n"), "content: {content:?}");
    assert_eq!(body.lines().count(), 1);
    assert!(!content.contains("inner change"));
}

#[test]
fn bare_form_writes_each_day_with_its_commits() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let ws = Workspace::new("bare");
    let api = ws.root.join("api");
    let web = ws.root.join("clients").join("web");
    init_repo(&api);
    init_repo(&web);
    commit(&api, "api one", "2024-03-04T09:00:00+00:00", "Rangel");
    commit(&api, "api two", "2024-03-04T15:30:00+00:00", "Rangel");
    commit(&web, "web one", "2024-03-05T12:00:00+00:00", "Rangel");

    let (ok, stdout, stderr) = ws.run(&["2024-03-04", "2024-03-06"]);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("TOTAL"), "stdout: {stdout}");

    assert_eq!(
        ws.reports(),
        vec!["2024-03-04.txt", "2024-03-05.txt", "2024-03-06.txt"]
    );

    let day1 = ws.report("2024-03-04.txt");
    assert!(day1.starts_with(&format!("{}:\n\t", api.display())));
    let lines: Vec<&str> = day1.lines().collect();
    assert_eq!(lines.len(), 3);
    // git log lists newest first
    assert!(lines[1].starts_with('\t') && lines[1].ends_with("api two"));
    assert!(lines[2].starts_with('\t') && lines[2].ends_with("api one"));

    let day2 = ws.report("2024-03-05.txt");
    assert!(day2.starts_with(&format!("{}:\n\t", web.display())));
    assert!(day2.trim_end().ends_with("web one"));

    assert_eq!(ws.report("2024-03-06.txt"), "");
}

#[test]
fn author_filter_without_matches_writes_empty_report() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let ws = Workspace::new("author");
    let repo = ws.root.join("repo");
    init_repo(&repo);
    commit(&repo, "by someone else", "2024-01-02T10:00:00+00:00", "Bruno");

    let (ok, _, stderr) = ws.run(&["range", "2024-01-02", "2024-01-02", "--author", "Rangel"]);
    assert!(ok, "stderr: {stderr}");
    assert_eq!(ws.report("2024-01-02.txt"), "");

    let (ok, _, stderr) = ws.run(&["range", "2024-01-02", "2024-01-02", "--author", "Bruno"]);
    assert!(ok, "stderr: {stderr}");
    assert!(ws.report("2024-01-02.txt").contains("by someone else"));
}

#[test]
fn broken_repository_is_logged_and_skipped() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let ws = Workspace::new("broken");
    let good = ws.root.join("good");
    init_repo(&good);
    commit(&good, "works", "2024-01-02T10:00:00+00:00", "Rangel");
    // A marker that is not a usable repository
    let bad = ws.root.join("bad");
    fs::create_dir_all(bad.join(".git")).expect("bad marker");

    let (ok, stdout, stderr) = ws.run(&["range", "2024-01-02", "2024-01-02"]);
    assert!(ok, "stderr: {stderr}");
    assert!(stderr.contains("history query failed"), "stderr: {stderr}");
    let content = ws.report("2024-01-02.txt");
    assert!(content.starts_with(&format!("{}:\n\t", good.display())));
    assert!(!content.contains(&bad.display().to_string()));
    assert!(stdout.contains("TOTAL"));
}

#[test]
fn reversed_range_writes_nothing() {
    let ws = Workspace::new("reversed");
    let (ok, stdout, stderr) = ws.run(&["range", "2024-01-03", "2024-01-02"]);
    assert!(ok, "stderr: {stderr}");
    assert!(ws.reports().is_empty());
    assert!(stdout.contains("nothing written"));
}

#[test]
fn day_without_repositories_writes_empty_file() {
    let ws = Workspace::new("empty");
    fs::create_dir_all(ws.root.join("plain").join("folder")).expect("plain dirs");
    let (ok, _, stderr) = ws.run(&["range", "20240102", "20240102", "-q"]);
    assert!(ok, "stderr: {stderr}");
    assert_eq!(ws.reports(), vec!["2024-01-02.txt"]);
    assert_eq!(ws.report("2024-01-02.txt"), "");
}

#[test]
fn missing_output_folder_fails() {
    let ws = Workspace::new("no-output");
    let missing = ws.base.join("missing");
    let root = ws.root.to_string_lossy().into_owned();
    let out = missing.to_string_lossy().into_owned();
    let (ok, _, stderr) = run_daylog(
        &["range", "2024-01-02", "2024-01-02", "--root", &root, "--output", &out],
        &ws.base,
    );
    assert!(!ok);
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    assert!(!missing.exists());
}

#[test]
fn invalid_date_fails() {
    let ws = Workspace::new("bad-date");
    let (ok, _, stderr) = ws.run(&["range", "2024-01-02", "tomorrow"]);
    assert!(!ok);
    assert!(stderr.contains(r#"Invalid date "tomorrow""#), "stderr: {stderr}");
}

#[test]
fn scan_lists_project_directories() {
    let ws = Workspace::new("scan");
    for rel in ["alpha/.git", "alpha/nested/.git", "group/beta/.git", "node_modules/pkg/.git", "notes"] {
        fs::create_dir_all(ws.root.join(rel)).expect("dirs");
    }

    let (ok, stdout, stderr) = ws.run(&["scan", "--exclude", "node_modules"]);
    assert!(ok, "stderr: {stderr}");
    let listed: Vec<String> = stdout.lines().map(str::to_string).collect();
    let expected = vec![
        ws.root.join("alpha").display().to_string(),
        ws.root.join("group").join("beta").display().to_string(),
    ];
    assert_eq!(listed, expected);
}

#[test]
fn config_file_supplies_root_and_output() {
    let ws = Workspace::new("config");
    let config = ws.base.join("daylog.toml");
    fs::write(
        &config,
        format!(
            "root = {:?}\noutput = {:?}\nquiet = true\n",
            ws.root.to_string_lossy(),
            ws.out.to_string_lossy()
        ),
    )
    .expect("write config");

    let cfg = config.to_string_lossy().into_owned();
    let (ok, stdout, stderr) = run_daylog(&["--config", &cfg, "2024-01-02", "2024-01-03"], &ws.base);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.is_empty(), "quiet run printed: {stdout}");
    assert_eq!(ws.reports(), vec!["2024-01-02.txt", "2024-01-03.txt"]);
}

#[test]
fn broken_config_file_fails() {
    let ws = Workspace::new("bad-config");
    let config = ws.base.join("daylog.toml");
    fs::write(&config, "jobs = \"lots\"\n").expect("write config");
    let cfg = config.to_string_lossy().into_owned();
    let (ok, _, stderr) = run_daylog(&["--config", &cfg, "scan"], &ws.base);
    assert!(!ok);
    assert!(stderr.contains("Failed to parse config"), "stderr: {stderr}");
}
