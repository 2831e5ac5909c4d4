// Records where the binary was built for `lexicode version --extended`.
fn main() {
    for (var, key) in [("TARGET", "LEXICODE_BUILD_TARGET"), ("PROFILE", "LEXICODE_BUILD_PROFILE")] {
        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={key}={value}");
        }
        println!("cargo:rerun-if-env-changed={var}");
    }
}
