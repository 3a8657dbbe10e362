// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway Hugo site with an isolated home directory.
struct Site {
    dir: TempDir,
}

impl Site {
    fn new() -> Self {
        let site = Self::bare();
        site.write("hugo.toml", "baseURL = 'https://example.org/'\ntitle = 'Test'\n");
        site
    }

    fn bare() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::create_dir_all(dir.path().join("home")).expect("create home");
        fs::create_dir_all(dir.path().join("site/content")).expect("create content");
        Self { dir }
    }

    fn root(&self) -> std::path::PathBuf {
        self.dir.path().join("site")
    }

    fn write(&self, rel: &str, content: &str) {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn exists(&self, rel: &str) -> bool {
        self.root().join(rel).exists()
    }

    fn cmd(&self) -> Command {
        self.cmd_in(&self.root())
    }

    /// Run from `dir` with the same isolated home and log settings.
    fn cmd_in(&self, dir: &Path) -> Command {
        let home = self.dir.path().join("home");
        let mut cmd = Command::cargo_bin("hu").unwrap();
        cmd.current_dir(dir)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }
}

fn page(title: &str, body: &str) -> String {
    format!("---\ntitle: {}\ndescription: About {}\n---\n{}\n", title, title, body)
}

#[test]
fn version_flag() {
    Site::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("hu "));
}

#[test]
fn version_command() {
    Site::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_usage_error() {
    Site::new().cmd().assert().failure().code(2);
}

#[test]
fn links_clean_site() {
    let site = Site::new();
    site.write("content/_index.md", "[About](/about/) [Hugo](https://gohugo.io)");
    site.write("content/about/index.md", &page("About", "[Home](/)"));

    site.cmd()
        .arg("404-links")
        .assert()
        .success()
        .stdout(contains("Scanning for broken links in content..."))
        .stdout(contains("✓ No broken links found!"));
}

#[test]
fn links_reports_broken_and_exits_nonzero() {
    let site = Site::new();
    site.write("content/about/index.md", &page("About", "ok"));
    site.write(
        "content/blog/post/index.md",
        &page(
            "Post",
            r#"[ok](/about) [gone](/blog/gone) <a href="../missing">x</a> [top](#top)"#,
        ),
    );

    site.cmd()
        .arg("404-links")
        .assert()
        .failure()
        .code(1)
        .stdout(contains("✗ Found broken links in 1 file(s):"))
        .stdout(contains("content/blog/post/index.md:"))
        .stdout(contains("  - /blog/gone"))
        .stdout(contains("  - ../missing"))
        .stdout(contains("/about\n").not())
        .stderr(contains("Error:"))
        .stderr(contains("2 broken link(s) in 1 file(s)"));
}

#[test]
fn links_json_output() {
    let site = Site::new();
    site.write("content/post/index.md", "[gone](/nowhere)");

    let out = site
        .cmd()
        .args(["--format", "json", "404-links"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(value["files_scanned"], 1);
    assert_eq!(value["broken_link_count"], 1);
    assert_eq!(value["files"][0]["path"], "content/post/index.md");
    assert_eq!(value["files"][0]["links"][0], "/nowhere");
}

#[test]
fn links_from_explicit_root() {
    let site = Site::new();
    site.write("content/post/index.md", "[gone](/nowhere)");

    site.cmd_in(site.dir.path())
        .args(["404-links", "--hugo-root", "site"])
        .assert()
        .failure()
        .stdout(contains("content/post/index.md:"));
}

#[test]
fn links_outside_root_show_full_path() {
    let site = Site::new();
    let external = TempDir::new().unwrap();
    let content = external.path().join("content");
    fs::create_dir_all(&content).unwrap();
    fs::write(content.join("post.md"), "[gone](/nowhere)").unwrap();
    let content = content.canonicalize().unwrap();

    site.cmd()
        .arg("404-links")
        .arg("--content-dir")
        .arg(&content)
        .assert()
        .failure()
        .stdout(contains(format!("{}:", content.join("post.md").display())));
}

#[test]
fn links_ignore_patterns_from_config_and_flag() {
    let site = Site::new();
    site.write("hu.toml", "[links]\nignore = [\"/api/*\"]\n");
    site.write("content/post/index.md", "[api](/api/v1) [old](/old/page)");

    site.cmd().arg("404-links").assert().failure();

    site.cmd()
        .args(["404-links", "--ignore", "/old/*"])
        .assert()
        .success()
        .stdout(contains("No broken links found!"));
}

#[test]
fn links_check_static() {
    let site = Site::new();
    site.write("static/img/logo.png", "png");
    site.write("content/post/index.md", "![logo](/img/logo.png) ![x](/img/missing.png)");

    site.cmd().arg("404-links").assert().success();

    site.cmd()
        .args(["404-links", "--check-static"])
        .assert()
        .failure()
        .stdout(contains("  - /img/missing.png"))
        .stdout(contains("/img/logo.png").not());
}

#[test]
fn refuses_non_hugo_root() {
    let site = Site::bare();
    site.write("content/about/index.md", &page("About", ""));

    site.cmd()
        .arg("svg")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("does not look like a Hugo project root"));

    assert!(!site.exists("content/about/about-image.svg"));
}

#[test]
fn skip_root_check_allows_any_directory() {
    let site = Site::bare();
    site.write("content/about/index.md", &page("About", ""));

    site.cmd()
        .args(["svg", "--skip-root-check"])
        .assert()
        .success();

    assert!(site.exists("content/about/about-image.svg"));
}

#[test]
fn missing_content_dir() {
    let site = Site::new();

    site.cmd()
        .args(["404-links", "--content-dir", "posts"])
        .assert()
        .failure()
        .stderr(contains("Content directory not found"));
}

#[test]
fn svg_generates_and_skips() {
    let site = Site::new();
    site.write("content/about/index.md", &page("About & Contact", ""));
    site.write("content/blog/_index.md", "---\ntitle: Blog\nsummary: All posts\n---\n");
    site.write("content/draft/index.md", "no front matter");

    site.cmd()
        .arg("svg")
        .assert()
        .success()
        .stdout(contains("=== Generating SVGs from "))
        .stdout(contains("  wrote about/about-image.svg"))
        .stdout(contains("  wrote blog/blog-image.svg"))
        .stdout(contains("  skip draft/index.md"))
        .stdout(contains("Generated 2 SVG file(s)"));

    let svg = fs::read_to_string(site.root().join("content/about/about-image.svg")).unwrap();
    assert!(svg.contains(">About &amp; Contact</tspan>"));
    assert!(svg.contains(r##"fill="#f3f4f6""##));

    let blog = fs::read_to_string(site.root().join("content/blog/blog-image.svg")).unwrap();
    assert!(blog.contains(">All posts</tspan>"));
    assert!(!site.exists("content/draft/draft-image.svg"));
}

#[test]
fn svg_options_override_config() {
    let site = Site::new();
    site.write("hu.toml", "[svg]\nwidth = 800\nbg = \"#111111\"\n");
    site.write("content/about/index.md", &page("About", ""));

    site.cmd()
        .args(["svg", "--height", "400", "--fg", "#eeeeee"])
        .assert()
        .success();

    let svg = fs::read_to_string(site.root().join("content/about/about-image.svg")).unwrap();
    assert!(svg.contains(r#"width="800" height="400" viewBox="0 0 800 400""#));
    assert!(svg.contains(r##"fill="#111111""##));
    assert!(svg.contains(r##"fill="#eeeeee""##));
}

#[test]
fn svg_dry_run_writes_nothing() {
    let site = Site::new();
    site.write("content/about/index.md", &page("About", ""));

    site.cmd()
        .args(["svg", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("  wrote about/about-image.svg"))
        .stdout(contains("dry run"));

    assert!(!site.exists("content/about/about-image.svg"));
}

#[test]
fn svg_without_pages() {
    let site = Site::new();

    site.cmd()
        .arg("svg")
        .assert()
        .success()
        .stdout(contains("No markdown files (index.md/_index.md) found"));
}

#[test]
fn svg_json_output() {
    let site = Site::new();
    site.write("content/about/index.md", &page("About", ""));
    site.write("content/empty/index.md", "");

    let out = site
        .cmd()
        .args(["svg", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(value["written"][0], "about/about-image.svg");
    assert_eq!(value["skipped"][0], "empty/index.md");
    assert_eq!(value["dry_run"], false);
}

#[test]
fn invalid_config_is_reported() {
    let site = Site::new();
    site.write("hu.toml", "[svg]\nwidth = 0\n");

    site.cmd()
        .arg("svg")
        .assert()
        .failure()
        .stderr(contains("svg.width"));
}

#[test]
fn init_writes_config_once() {
    let site = Site::new();

    site.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Created"));

    let written = fs::read_to_string(site.root().join("hu.toml")).unwrap();
    assert!(written.contains("[links]"));
    assert!(written.contains("[svg]"));

    site.cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already exists"));

    site.cmd().args(["init", "--force"]).assert().success();
}

#[test]
fn init_dry_run_prints_config() {
    let site = Site::new();

    site.cmd()
        .args(["init", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("check_static = false"));

    assert!(!Path::new(&site.root().join("hu.toml")).exists());
}
