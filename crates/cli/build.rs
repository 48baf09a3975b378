use std::process::Command;

/// Short commit hash for `swt --version`: `BUILD_GIT_HASH`, then git, then `unknown`.
fn git_hash() -> String {
    if let Some(hash) = std::env::var("BUILD_GIT_HASH").ok().filter(|h| !h.trim().is_empty()) {
        return hash;
    }
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".into())
}

fn main() {
    println!("cargo:rerun-if-env-changed=BUILD_GIT_HASH");
    println!("cargo:rustc-env=BUILD_GIT_HASH={}", git_hash());
}
