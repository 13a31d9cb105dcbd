use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let commit_date =
        git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d %H:%M"]).unwrap_or_default();

    let is_dirty = git(&["status", "--porcelain"])
        .map(|s| !s.is_empty())
        .unwrap_or(false);

    // A release build is a clean tree whose HEAD carries the version tag
    let version = env!("CARGO_PKG_VERSION");
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .map(|s| {
            s.lines()
                .any(|tag| tag == format!("v{}", version) || tag == version)
        })
        .unwrap_or(false);

    println!("cargo:rustc-env=GIT_HASH={}", hash);
    println!("cargo:rustc-env=GIT_COMMIT_DATE={}", commit_date);
    println!("cargo:rustc-env=IS_RELEASE={}", tagged && !is_dirty);
}
