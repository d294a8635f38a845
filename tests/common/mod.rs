#![allow(dead_code)]

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temp dir holding `INPUT.txt` with the given contents.
pub fn input_dir(contents: &str) -> Result<(TempDir, PathBuf), std::io::Error> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("INPUT.txt");
    std::fs::write(&input, contents)?;
    Ok((dir, input))
}

pub fn output_path(dir: &Path) -> PathBuf {
    dir.join("OUTPUT.TXT")
}

/// Closed form of the geometric series K^2 + ... + K^N.
pub fn geometric_reference(n: u32, k: u32) -> BigUint {
    if n < 2 {
        return BigUint::zero();
    }
    if k == 1 {
        return BigUint::from(n - 1);
    }
    let k = BigUint::from(k);
    (k.pow(n + 1) - k.pow(2)) / (k - BigUint::one())
}
