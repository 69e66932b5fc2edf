//! Plain-text model files.
//!
//! Layout: a header line `<vocab_size> <dims>`, then one line per term:
//! `<term> <count> <v1> ... <v_dims>`, whitespace separated.
//! Files are named `<prefix>_<window>_boot<resample>.vec` under the store root.

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use semdim_core::config::StudyConfig;
use semdim_core::errors::StoreError;
use semdim_core::models::RunId;
use tracing::info;

use super::IEmbeddingStore;
use crate::space::VectorSpace;

/// Reads bootstrapped models from a directory of `.vec` files.
#[derive(Debug, Clone)]
pub struct TextEmbeddingStore {
    root: PathBuf,
    prefix: String,
}

impl TextEmbeddingStore {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(study: &StudyConfig) -> Self {
        Self::new(&study.model_root, &study.model_prefix)
    }

    /// File holding the model for `run`.
    pub fn path_for(&self, run: RunId) -> PathBuf {
        self.root.join(format!(
            "{}_{}_boot{}.vec",
            self.prefix, run.window, run.resample
        ))
    }
}

impl IEmbeddingStore for TextEmbeddingStore {
    fn load(&self, run: RunId) -> Result<VectorSpace, StoreError> {
        let path = self.path_for(run);
        let space = read_text_model(&path)?;
        info!(
            %run,
            path = %path.display(),
            terms = space.len(),
            dims = space.dims(),
            "loaded model"
        );
        Ok(space)
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// Parse one model file.
pub fn read_text_model(path: &Path) -> Result<VectorSpace, StoreError> {
    let display = path.display().to_string();
    let file = fs::File::open(path).map_err(|e| StoreError::ModelLoadError {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    let mut lines = BufReader::new(file).lines().enumerate();

    let parse_err = |line: usize, reason: String| StoreError::ParseError {
        path: display.clone(),
        line: line + 1,
        reason,
    };

    let (vocab_size, dims) = match lines.next() {
        Some((n, line)) => {
            let line = line.map_err(|e| parse_err(n, e.to_string()))?;
            let mut fields = line.split_whitespace();
            let vocab = parse_field::<usize>(fields.next(), "vocab_size").map_err(|r| parse_err(n, r))?;
            let dims = parse_field::<usize>(fields.next(), "dims").map_err(|r| parse_err(n, r))?;
            (vocab, dims)
        }
        None => return Err(parse_err(0, "missing header".to_string())),
    };

    let mut space = VectorSpace::new(dims);
    for (n, line) in lines {
        let line = line.map_err(|e| parse_err(n, e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let term = fields
            .next()
            .ok_or_else(|| parse_err(n, "missing term".to_string()))?;
        let count = parse_field::<u64>(fields.next(), "count").map_err(|r| parse_err(n, r))?;
        let vector = fields
            .map(|f| f.parse::<f32>().map_err(|e| parse_err(n, format!("component {f:?}: {e}"))))
            .collect::<Result<Vec<f32>, _>>()?;
        space
            .insert_or_replace(term, vector, count)
            .map_err(|e| parse_err(n, e.to_string()))?;
    }

    if space.len() != vocab_size {
        return Err(StoreError::ModelLoadError {
            path: display,
            reason: format!("header declares {vocab_size} terms, found {}", space.len()),
        });
    }
    Ok(space)
}

/// Write `space` in the text model layout.
pub fn write_text_model(space: &VectorSpace, path: &Path) -> Result<(), StoreError> {
    let io_err = |e: std::io::Error| StoreError::ModelLoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    };
    let mut out = BufWriter::new(fs::File::create(path).map_err(io_err)?);
    writeln!(out, "{} {}", space.len(), space.dims()).map_err(io_err)?;
    for term in space.terms() {
        // Terms come from the space itself, so lookups cannot miss.
        let (Ok(vector), Ok(count)) = (space.vector_of(term), space.frequency_of(term)) else {
            continue;
        };
        write!(out, "{term} {count}").map_err(io_err)?;
        for x in vector {
            write!(out, " {x}").map_err(io_err)?;
        }
        writeln!(out).map_err(io_err)?;
    }
    out.flush().map_err(io_err)
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, name: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    let raw = field.ok_or_else(|| format!("missing {name}"))?;
    raw.parse::<T>().map_err(|e| format!("{name} {raw:?}: {e}"))
}
