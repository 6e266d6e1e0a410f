use std::{
    env,
    path::{Path, PathBuf},
};

#[path = "build/codegen.rs"]
mod codegen;
#[path = "src/text.rs"]
mod text;

const B4_FILE: &str = "weights/b4.txt";
const B4_LEN: usize = 256;

fn main() {
    let path = match env::var("B4_WEIGHTS") {
        Ok(file) => {
            if PathBuf::from(&file).is_relative() {
                Path::new(env!("CARGO_MANIFEST_DIR")).join(file)
            } else {
                PathBuf::from(&file)
            }
        }
        Err(_) => Path::new(env!("CARGO_MANIFEST_DIR")).join(B4_FILE),
    };

    println!("cargo:rerun-if-env-changed=B4_WEIGHTS");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-changed=build/codegen.rs");
    println!("cargo:rerun-if-changed=src/text.rs");

    // Synthesis builds declare zeroed tables and never read the literals.
    if env::var_os("CARGO_FEATURE_SYNTHESIS").is_some() {
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    codegen::write_table(&path, B4_LEN, &Path::new(&out_dir).join("b4.rs"));
}
