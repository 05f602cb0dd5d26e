use std::env;
use std::path::Path;

const HEADER: &str = "memstat.h";

fn main() {
    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-changed=src");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let root = Path::new(&manifest_dir);

    let config = cbindgen::Config::from_file(root.join("cbindgen.toml"))
        .expect("cbindgen.toml is readable");

    let include = root.join("include");
    std::fs::create_dir_all(&include).expect("include/ can be created");

    let bindings = cbindgen::Builder::new()
        .with_crate(root)
        .with_config(config)
        .generate()
        .expect("memstat-ffi exports a valid C surface");
    bindings.write_to_file(include.join(HEADER));
}
