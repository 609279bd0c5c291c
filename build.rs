use std::env;

fn main() {
    // allow #[cfg(host_codec)]
    println!("cargo:rustc-check-cfg=cfg(host_codec)");
    println!("cargo:rerun-if-env-changed=OPUS_LIB_DIR");

    let target = env::var("TARGET").unwrap();

    // The Emscripten/clang-built libopus only ever gets linked into the
    // browser-facing wasm module. Every other target uses the in-crate
    // stand-in codec so the crate builds and tests without the native
    // library installed.
    if target.starts_with("wasm32-unknown-") {
        // When rustc performs the final link itself, `OPUS_LIB_DIR` points
        // at libopus.a. The usual emcc flow passes the archive on its own
        // command line instead, so the variable is optional.
        if let Ok(dir) = env::var("OPUS_LIB_DIR") {
            println!("cargo:rustc-link-search=native={dir}");
            println!("cargo:rustc-link-lib=static=opus");
        }
    } else {
        println!("cargo:rustc-cfg=host_codec");
    }
}
