use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collections::unique_copy;
use crate::tour::{TourError, Transcript};

/// Where the file topic keeps its scratch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    pub path: PathBuf,
}

impl StreamConfig {
    pub fn new<P: Into<PathBuf>>(path: P) -> StreamConfig {
        StreamConfig { path: path.into() }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig::new("test.dat")
    }
}

/// Creates or truncates `path` and writes each line followed by a newline.
pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[&str]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    debug!(path = %path.as_ref().display(), lines = lines.len(), "file written");
    Ok(())
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    BufReader::new(File::open(path)?).lines().collect()
}

/// Reads every whitespace separated token of the file at `path`.
pub fn read_tokens<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Appends `value` on its own line with exactly `precision` decimals.
pub fn append_fixed<P: AsRef<Path>>(path: P, value: f64, precision: usize) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{value:.precision$}")
}

/// Runs the file topic against the file named by `config`.
pub fn files_demo(config: &StreamConfig, out: &mut Transcript) -> Result<(), TourError> {
    write_lines(&config.path, &["B", "D", "A", "B", "C"])?;

    for line in read_lines(&config.path)? {
        out.raw(line)?;
    }
    out.raw(' ')?;

    let reader = BufReader::new(File::open(&config.path)?);
    for line in reader.lines() {
        for word in line?.split_whitespace() {
            out.raw(word)?;
        }
    }
    out.raw(' ')?;

    let mut tokens = read_tokens(&config.path)?;
    out.token(tokens.concat())?;

    tokens.sort();
    out.token(unique_copy(&tokens).concat())?;

    append_fixed(&config.path, 7.1182, 6)?;
    Ok(())
}

pub fn run_files(out: &mut Transcript) -> Result<(), TourError> {
    files_demo(&StreamConfig::default(), out)
}
