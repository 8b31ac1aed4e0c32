// Assembles the deployable site: wasm-pack output (when targeting wasm32)
// plus everything under static/, copied into dist/.
use std::process::Command;
use std::{env, fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    // Only run the heavy wasm-pack build when targeting wasm32.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        let status = Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web"])
            .status();

        match status {
            Ok(st) if !st.success() => println!("cargo:warning=wasm-pack build failed"),
            Err(_) => println!("cargo:warning=wasm-pack not installed – skipping"),
            _ => {}
        }
    }

    let dist = Path::new("dist");
    if dist.exists() {
        fs::remove_dir_all(dist).ok();
    }
    fs::create_dir_all(dist).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.content_only = true;
        options.overwrite = true;
        if let Err(e) = fs_extra::dir::copy(static_dir, dist, &options) {
            println!("cargo:warning=copying static assets failed: {e}");
        }
    }
}
