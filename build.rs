use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=ABTRACK_VERSION");

    if std::env::var("ABTRACK_VERSION").is_ok() {
        return;
    }

    let version = match Command::new("git").args(["describe", "--tags"]).output() {
        Ok(o) if o.status.success() => String::from_utf8_lossy(&o.stdout).trim().to_string(),
        // Building from a tarball, fall back to the manifest version.
        _ => env!("CARGO_PKG_VERSION").to_string(),
    };

    let version = version.strip_prefix('v').unwrap_or(&version);
    println!("cargo:rustc-env=ABTRACK_VERSION={version}");
}
