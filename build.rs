use std::process::Command;

/// Output of `git <args>`, or "unknown" outside a checkout.
fn git_output(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // shown by `gridwords --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_output(&["rev-parse", "--short", "HEAD"]));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
