//! Common test utilities

use std::path::{Path, PathBuf};

/// Two-role palette table with one faded override
pub const SMALL_PALETTE_JSON: &str = r##"{
  "entries": [
    { "category": "main", "role": "hero", "regular": "#353795",
      "saturation_fade": 1.2, "lightness_fade": 1.3,
      "saturation_dim": 0.8, "lightness_dim": 0.8 },
    { "category": "alert", "role": "danger", "regular": "#e54225" }
  ],
  "overrides": [
    { "category": "alert", "role": "danger", "variant": "faded", "color": "#ffeeee" }
  ]
}"##;

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

/// Every `#rrggbb` token in `text`, in order of appearance
pub fn hex_codes(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut codes = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'#'
            && i + 7 <= bytes.len()
            && bytes[i + 1..i + 7].iter().all(|b| b.is_ascii_hexdigit())
        {
            codes.push(text[i..i + 7].to_string());
            i += 7;
        } else {
            i += 1;
        }
    }
    codes
}

/// Assert that a PNG file exists at `path` and is not empty
pub fn assert_png_written(path: &Path) {
    assert!(path.exists(), "Image file should be created: {}", path.display());
    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.len() > 8, "Image file should not be empty");
    assert_eq!(&bytes[1..4], b"PNG", "Image should be a PNG");
}
