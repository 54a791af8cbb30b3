//! catalog — in-memory word -> meaning mapping and its operations.
//!
//! Разделение по подмодулям:
//! - core.rs    — тип Catalog (упорядоченные записи), нормализация слов, сериализация
//! - ops.rs     — мутации add/update/delete (лимит MAX_WORDS, дубликаты, not found)
//! - query.rs   — чтение: prefix search, sorted list, statistics
//! - outcome.rs — Outcome / Rejection (закрытый набор результатов вместо (ok, msg))
//!
//! Nothing here performs I/O; persistence lives in `crate::store`.

pub mod core;
pub mod ops;
pub mod outcome;
pub mod query;

pub use core::{normalize_word, Catalog};
pub use outcome::{Outcome, Rejection};
pub use query::{Order, Statistics};
