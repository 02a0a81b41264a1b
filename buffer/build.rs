// Buffer capacities are fixed at build time. They can be overridden through
// the environment, e.g. LOGSTREAM_SMALL_BUFFER=8000 cargo build

const DEFAULT_SMALL_BUFFER: usize = 4000;
const DEFAULT_LARGE_BUFFER: usize = 64 * 1024;

// Anything smaller cannot hold a single numeric field plus the NUL sentinel
const MIN_BUFFER: usize = 64;

fn read_size(name: &str, default: usize) -> usize {
    println!("cargo:rerun-if-env-changed={}", name);
    let raw = match std::env::var(name) {
        Ok(raw) => raw,
        Err(_) => return default,
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= MIN_BUFFER => n,
        _ => panic!(
            "{} must be an integer greater or equal to {}, got {:?}",
            name, MIN_BUFFER, raw
        ),
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let small = read_size("LOGSTREAM_SMALL_BUFFER", DEFAULT_SMALL_BUFFER);
    let large = read_size("LOGSTREAM_LARGE_BUFFER", DEFAULT_LARGE_BUFFER);
    if large < small {
        panic!(
            "LOGSTREAM_LARGE_BUFFER ({}) cannot be smaller than LOGSTREAM_SMALL_BUFFER ({})",
            large, small
        );
    }
    println!("cargo:rustc-env=LOGSTREAM_SMALL_BUFFER={}", small);
    println!("cargo:rustc-env=LOGSTREAM_LARGE_BUFFER={}", large);
}
