use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read one JSON object per line from `path`, or stdin when `None`.
///
/// Blank lines are skipped.
pub fn read_rows<R: DeserializeOwned>(path: Option<&Path>) -> Result<Vec<R>> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("invalid row on line {}", i + 1))
        })
        .collect()
}
