fn main() {
    // This is essential to be able to generate the structured log index within the project out directory.
    println!(
        "cargo:rustc-env=LOG_INDEX_DIR={}",
        std::env::var("OUT_DIR").unwrap()
    );
}
