use etl::Result;

use std::{
    env,
    fs,
    path::PathBuf,
};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),
}

pub struct Args {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Parses the input arguments: first the base data directory holding the
/// per-message-category folders, optionally second the output directory
/// (defaults to `output`)
pub fn parse_args() -> Result<Args> {
    let data_dir = env::args().nth(1)
        .ok_or_else(|| InputArgsError::Parse("First argument must be the data directory.".to_string()))?;

    let output_dir = env::args().nth(2).unwrap_or_else(|| "output".to_string());

    let data_dir = fs::canonicalize(data_dir.clone())
        .with_context(|| InputArgsError::DirectoryNotFound(data_dir))?;

    Ok(Args {
        data_dir,
        output_dir: PathBuf::from(output_dir),
    })
}
