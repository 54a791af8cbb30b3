//! store — durable round-trip of a Catalog to a JSON file.
//!
//! Формат: UTF-8 JSON-объект word -> meaning, отступ 4 пробела, non-ASCII без
//! экранирования:
//! {
//!     "apple": "a fruit",
//!     "banana": "a tropical fruit"
//! }
//!
//! Замечания:
//! - load: отсутствующий файл => пустой каталог (не ошибка).
//! - load: принимается только плоский объект строк; вложенные объекты, массивы,
//!   числа, bool и null => StoreError::Decode.
//! - load не нормализует ключи и не проверяет лимит (это забота вызывающего).
//! - save: обычная перезапись (create+truncate), без tmp+rename.

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::consts::JSON_INDENT;
use crate::metrics::{record_store_load, record_store_save, record_store_save_failed};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file exists but could not be read, or could not be written.
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file content is not a flat JSON object of strings.
    #[error("cannot decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
    /// Serialization failed before anything was written.
    #[error("cannot encode wordbook for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Load a catalog from `path`. A missing file yields an empty catalog.
pub fn load(path: &Path) -> Result<Catalog, StoreError> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("store::load: {} not found, starting empty", path.display());
            return Ok(Catalog::new());
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };

    let text = String::from_utf8(bytes).map_err(|e| StoreError::Decode {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8: {e}"),
    })?;

    let cat = decode_catalog(&text).map_err(|reason| StoreError::Decode {
        path: path.to_path_buf(),
        reason,
    })?;

    record_store_load();
    debug!("store::load: {} entries from {}", cat.len(), path.display());
    Ok(cat)
}

/// Overwrite `path` with the JSON form of `catalog`.
pub fn save(path: &Path, catalog: &Catalog) -> Result<(), StoreError> {
    let res = save_inner(path, catalog);
    match &res {
        Ok(()) => {
            record_store_save();
            debug!("store::save: {} entries to {}", catalog.len(), path.display());
        }
        Err(_) => record_store_save_failed(),
    }
    res
}

fn save_inner(path: &Path, catalog: &Catalog) -> Result<(), StoreError> {
    let data = encode_catalog(catalog).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
    }

    let mut f = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;
    f.write_all(&data).map_err(|e| StoreError::io(path, e))?;
    f.sync_all().map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

/// Pretty JSON bytes (4-space indent, trailing newline).
pub fn encode_catalog(catalog: &Catalog) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(64 + catalog.len() * 32);
    let fmt = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    catalog.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Parse and validate a flat string -> string JSON object.
pub fn decode_catalog(text: &str) -> Result<Catalog, String> {
    let root: Value = serde_json::from_str(text).map_err(|e| format!("malformed JSON: {e}"))?;
    let map = match root {
        Value::Object(map) => map,
        other => {
            return Err(format!(
                "top level must be an object, found {}",
                json_kind(&other)
            ))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (k, v) in map {
        match v {
            Value::String(s) => pairs.push((k, s)),
            other => {
                return Err(format!(
                    "value for {:?} must be a string, found {}",
                    k,
                    json_kind(&other)
                ))
            }
        }
    }
    // serde_json::Map уже схлопнул повторные ключи
    Ok(Catalog::from_unique_entries(pairs))
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
