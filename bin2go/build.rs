// Provides `GIT_HASH` for the startup banner. A missing git checkout only
// produces a warning.

use std::process::Command;

fn main() {
    println!("cargo::rerun-if-changed=Cargo.toml");
    println!("cargo::rerun-if-changed=../.git/HEAD");

    let output = match Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
        Ok(output) if output.status.success() => output,
        Ok(_) => return println!("cargo::warning=`git rev-parse` exited with non-success error code"),
        Err(why) => return println!("cargo::warning=cannot find git commit hash: {why}"),
    };

    match String::from_utf8(output.stdout) {
        Ok(hash) => println!("cargo::rustc-env=GIT_HASH={}", hash.trim()),
        Err(_) => println!("cargo::warning=`git rev-parse` output is invalid utf-8"),
    }
}
