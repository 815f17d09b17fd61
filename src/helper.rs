use std::path::{Path, PathBuf};

/// `static/img/texture.png` + "blue" -> `static/img/texture_blue.png`
pub fn tinted_output_path(input: &Path, tint_name: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "texture".to_string());
    let file_name = format!("{stem}_{tint_name}.png");

    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}
