//! Version command implementation.

/// Version information for the CLI.
const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");
const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
const RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

pub fn run() {
    println!("{NAME} {VERSION}");
    println!();
    println!("Lazy, possibly-infinite sequences, printed one bounded slice at a time.");
    println!();
    println!("Homepage:       {HOMEPAGE}");
    println!();
    println!("Build info:");
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
    println!("  Rust (min):   {RUST_VERSION}");
}
