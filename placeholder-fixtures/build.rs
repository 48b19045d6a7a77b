use std::process::Command;
use std::str;

fn git_output(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| str::from_utf8(&output.stdout).ok().map(str::to_string))
        .unwrap_or_default()
}

fn main() {
    // 最近的 tag 与 commit 时间戳
    let version = git_output(&["describe", "--tags", "--long", "--always"]);
    let commit_timestamp = git_output(&["log", "-1", "--format=%ct"]);

    let version = format!("{}-t{}", version.trim(), commit_timestamp.trim());
    println!("cargo:rustc-env=FIXTURES_GIT_VERSION={}", version)
}
