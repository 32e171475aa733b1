use std::env;

const ENV_FILES: &[&str] = &[".env.local", ".env"];

// Forwarded to `option_env!` in `src/cfg.rs`.
const FORWARDED_VARS: &[&str] = &["GOOGLE_MAPS_API_KEY", "PROSPER_LOG_LEVEL"];

fn main() {
    for file in ENV_FILES {
        println!("cargo:rerun-if-changed={file}");
        // Variables that are already set take precedence.
        if let Err(err) = dotenvy::from_filename(file) {
            if !err.not_found() {
                println!("cargo:warning=Unable to read {file}: {err}");
            }
        }
    }
    for var in FORWARDED_VARS {
        println!("cargo:rerun-if-env-changed={var}");
        if let Ok(value) = env::var(var) {
            println!("cargo:rustc-env={var}={value}");
        }
    }
}
