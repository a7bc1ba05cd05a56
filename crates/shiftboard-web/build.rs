use std::env;
use std::fs;
use std::path::Path;

// Propagate API settings from a local .env file into compile-time env vars
// so `option_env!("API_BASE_URL")` picks them up.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=API_BASE_URL");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }

    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            // The process environment wins over the .env file.
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value.trim());
            }
        }
    }
}
