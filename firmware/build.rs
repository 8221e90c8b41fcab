use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    // Put `memory.x` in our output directory and ensure it's on the linker
    // search path.
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Loop periods, in milliseconds
    forward("BLINK_PERIOD_MS", "1000");
    forward("BUTTON_PERIOD_MS", "100");

    // Button polarity: unset means the button pulls the line to ground
    forward("BUTTON_ACTIVE_HIGH", "false");

    // Samples a button change must last before it reaches the LED
    forward("BUTTON_DEBOUNCE", "0");
}

/// Forward an environment variable to the firmware, with a default value
fn forward(name: &str, default: &str) {
    if let Ok(value) = env::var(name) {
        println!("cargo:rustc-env={}={}", name, value);
        println!("cargo:warning=Using {} from environment: {}", name, value);
    } else {
        println!("cargo:rustc-env={}={}", name, default);
    }
    println!("cargo:rerun-if-env-changed={}", name);
}
