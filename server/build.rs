use std::error::Error;
use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = "<!DOCTYPE html>\n<html><body><p>Frontend not built. Run `trunk build` in ../frontend.</p></body></html>\n";

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )?;
    }

    // include_dir! needs the directory to exist even before the first frontend build
    let embedded = out_dir.join("dist");
    fs::create_dir_all(&embedded)?;
    let index = embedded.join("index.html");
    if !index.exists() {
        fs::write(index, PLACEHOLDER)?;
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
