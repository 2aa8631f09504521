use std::env;

fn main() {
    let target = env::var("TARGET").unwrap();

    if target.contains("avr") {
        // Configure for ATmega8A
        println!("cargo:rustc-link-arg=-mmcu=atmega8");
        println!("cargo:warning=Building for ATmega8 at 8MHz");
    }

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=8000000");

    // Debug builds get serial logging
    if env::var("PROFILE").unwrap() == "debug" && target.contains("avr") {
        println!("cargo:rustc-cfg=feature=\"debug\"");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
