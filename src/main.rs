//! Host-side helper: `cargo run` compiles the wasm bundle and serves the
//! page locally so it can be previewed without deploying anywhere.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const PORT: &str = "8080";

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    build_site();
    serve_site();

    // Keep process alive while the server child runs.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

/// Compile the crate, then bundle the wasm module into static/pkg where
/// index.html imports it from.
fn build_site() {
    println!("Running cargo build …");
    let cargo_status = Command::new("cargo")
        .args(["build", "--release"])
        .status()
        .expect("failed to run cargo build");
    if !cargo_status.success() {
        eprintln!("cargo build failed");
        std::process::exit(1);
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }
}

fn serve_site() {
    println!("Launching local server at http://127.0.0.1:{PORT} …");
    let _server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");
}
