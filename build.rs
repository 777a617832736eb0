use std::path::PathBuf;
use std::process::Command;
use std::{env, fs};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let shader_dir = PathBuf::from("assets/shaders");
    println!("cargo:rerun-if-changed={}", shader_dir.to_string_lossy());

    for entry in fs::read_dir(&shader_dir).expect("Could not read shader directory") {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let input_path = entry.path();
        if !input_path.is_file() {
            continue;
        }

        let mut output_name = entry.file_name();
        output_name.push(".spv");
        let output_path = out_dir.join(output_name);

        let status = Command::new("glslc")
            .arg("--target-env=vulkan1.3")
            .arg(&input_path)
            .arg("-o")
            .arg(&output_path)
            .status()
            .expect("Could not run glslc");

        if !status.success() {
            panic!(
                "Shader compilation for {} failed: {}",
                input_path.to_string_lossy(),
                status
            );
        }
    }
}
