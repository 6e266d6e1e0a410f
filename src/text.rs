//! Exporter text format, shared by `build.rs` and the loader: decimals separated by commas
//! and/or whitespace. Std only, since the build script compiles this file too.

/// Empty tokens are skipped, so `", "` separators and trailing commas are fine.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty())
}

/// `None` unless the token is a finite decimal.
pub fn decimal(token: &str) -> Option<f32> {
    token.parse::<f32>().ok().filter(|v| v.is_finite())
}
