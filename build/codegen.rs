use std::io::Write;
use std::path::Path;
use std::{fs::File, io::BufWriter};

use crate::text::{decimal, tokens};

/// Turns a token into an `f32` literal, or `None` if it isn't a finite decimal.
/// `{:?}` prints the shortest form that reads back to the same bits as the token.
pub fn literal(token: &str) -> Option<String> {
    decimal(token).map(|value| format!("{value:?}"))
}

/// Array literal for an exported weight file, which must hold exactly `len` finite decimals.
pub fn render(text: &str, len: usize) -> Result<String, String> {
    let mut literals = Vec::with_capacity(len);
    for (i, t) in tokens(text).enumerate() {
        match literal(t) {
            Some(l) => literals.push(l),
            None => return Err(format!("token {i} ({t:?}) is not a decimal value")),
        }
    }
    if literals.len() != len {
        return Err(format!("expected {len} values, found {}", literals.len()));
    }

    let mut out = String::from("[\n");
    for row in literals.chunks(8) {
        out.push_str(&format!("    {},\n", row.join(", ")));
    }
    out.push_str("]\n");
    Ok(out)
}

/// Writes the array literal for `src` into `dest`. A malformed file fails the build.
pub fn write_table(src: &Path, len: usize, dest: &Path) {
    let text = std::fs::read_to_string(src)
        .unwrap_or_else(|e| panic!("Failed to read weights from {}: {e}", src.display()));
    let table = render(&text, len).unwrap_or_else(|e| panic!("{}: {e}", src.display()));

    let out = File::create(dest).unwrap();
    let mut w = BufWriter::new(out);
    w.write_all(table.as_bytes()).unwrap();
}
