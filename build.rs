//! Bundles the site stylesheet before compilation so `asset!` in the layout
//! always finds `assets/dist/bundle.css`.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

/// Resolve the `@import` chain from `entry` and return minified CSS
fn bundle_stylesheet(entry: &Path) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut sheet = bundler
        .bundle(entry)
        .map_err(|e| format!("bundling {}: {}", entry.display(), e))?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minifying {}: {}", entry.display(), e))?;

    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("printing {}: {}", entry.display(), e))?;

    Ok(printed.code)
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");
    println!("cargo:rerun-if-changed=assets/site.json");

    let css = match bundle_stylesheet(Path::new(ENTRY)) {
        Ok(css) => css,
        Err(e) => panic!("stylesheet build failed: {}", e),
    };

    if let Err(e) = fs::create_dir_all(OUT_DIR).and_then(|_| fs::write(OUT_FILE, css)) {
        panic!("cannot write {}: {}", OUT_FILE, e);
    }
}
