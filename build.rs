//! Records the compiler version for `core::debug_info::runtime_version`.

fn main() {
    let version = rustc_version::version()
        .map(|v| v.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=LOGHARBOUR_RUSTC_VERSION={}", version);
    println!("cargo:rerun-if-changed=build.rs");
}
