//! Reads table contents supplied outside the build: the exporter's text files (one line of
//! comma-separated decimals) and raw native-endian `f32` blobs. Results are owned arrays; the
//! static tables are never written.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Read},
    path::Path,
};

use log::debug;

use crate::{
    error::{Result, WeightError},
    text::{decimal, tokens},
    weights::Weight,
};

/// Parses exactly `N` decimals separated by commas and/or whitespace.
pub fn parse_txt<const N: usize>(text: &str) -> Result<[Weight; N]> {
    let mut values = [0.0; N];
    let mut found = 0;
    for (index, token) in tokens(text).enumerate() {
        let value = decimal(token).ok_or_else(|| WeightError::parse(index, token))?;
        if index < N {
            values[index] = value;
        }
        found += 1;
    }

    if found != N {
        return Err(WeightError::Length { expected: N, found });
    }
    Ok(values)
}

pub fn load_txt<const N: usize>(mut reader: impl BufRead) -> Result<[Weight; N]> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    debug!("Read {} bytes of weight text", text.len());
    parse_txt(&text)
}

pub fn load_txt_path<const N: usize>(path: impl AsRef<Path>) -> Result<[Weight; N]> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => WeightError::file_not_found(path),
        _ => e.into(),
    })?;
    debug!("Loading weights from {}", path.display());
    load_txt(BufReader::new(file))
}

/// Reads `N` native-endian `f32`s. `bytes` needn't be aligned.
pub fn from_ne_bytes<const N: usize>(bytes: &[u8]) -> Result<[Weight; N]> {
    let expected = N * std::mem::size_of::<Weight>();
    if bytes.len() != expected {
        return Err(WeightError::ByteLength { expected, found: bytes.len() });
    }
    Ok(bytemuck::pod_read_unaligned(bytes))
}

#[cfg(test)]
mod loader_tests {
    use super::*;
    use crate::{B4, B4_LEN, B4_TABLE};

    const B4_TXT: &str = include_str!("../weights/b4.txt");

    #[test]
    fn separators() {
        assert_eq!(parse_txt::<4>("1.5, -2,0.25\n\t3e-1").unwrap(), [1.5, -2.0, 0.25, 0.3]);
        assert_eq!(parse_txt::<2>(",, 1.0 ,\n, 2.0,").unwrap(), [1.0, 2.0]);
        assert!(parse_txt::<0>("  \n").unwrap().is_empty());
    }

    #[test]
    fn wrong_count() {
        assert!(matches!(parse_txt::<3>("1, 2"), Err(WeightError::Length { expected: 3, found: 2 })));
        assert!(matches!(parse_txt::<1>("1, 2"), Err(WeightError::Length { expected: 1, found: 2 })));
    }

    #[test]
    fn bad_token() {
        match parse_txt::<3>("0.1, zero, 0.3") {
            Err(WeightError::Parse { index, token }) => {
                assert_eq!(index, 1);
                assert_eq!(token, "zero");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(parse_txt::<1>("inf"), Err(WeightError::Parse { index: 0, .. })));
        assert!(matches!(parse_txt::<1>("NaN"), Err(WeightError::Parse { index: 0, .. })));
    }

    #[test]
    fn exported_file() {
        let values = load_txt::<B4_LEN>(B4_TXT.as_bytes()).unwrap();
        assert_eq!(values[0], -0.1326);
        assert_eq!(values[255], -0.0721);
        #[cfg(not(feature = "synthesis"))]
        assert_eq!(values.map(f32::to_bits), B4.map(f32::to_bits));
    }

    #[test]
    fn from_path() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/weights/b4.txt");
        let values = load_txt_path::<B4_LEN>(path).unwrap();
        assert_eq!(values, load_txt::<B4_LEN>(B4_TXT.as_bytes()).unwrap());

        let missing = load_txt_path::<B4_LEN>("weights/does_not_exist.txt");
        assert!(matches!(missing, Err(WeightError::FileNotFound { .. })));
    }

    #[test]
    fn bytes() {
        let values = from_ne_bytes::<B4_LEN>(B4_TABLE.as_bytes()).unwrap();
        assert_eq!(values.map(f32::to_bits), B4.map(f32::to_bits));

        let mut shifted = vec![0u8];
        shifted.extend_from_slice(&1.5f32.to_ne_bytes());
        shifted.extend_from_slice(&(-0.25f32).to_ne_bytes());
        assert_eq!(from_ne_bytes::<2>(&shifted[1..]).unwrap(), [1.5, -0.25]);

        assert!(matches!(from_ne_bytes::<2>(&shifted), Err(WeightError::ByteLength { expected: 8, found: 9 })));
    }
}
