// Базовые модули
pub mod consts;
pub mod config;
pub mod metrics;
pub mod lock;

// Каталог (бизнес-логика без I/O) и персистентность
pub mod catalog; // src/catalog/{mod,core,ops,query,outcome}.rs
pub mod store;

// Жизненный цикл: open → load → operate → save → close
pub mod session;

// Интерактивное меню (тонкая оболочка над Session)
pub mod shell;

// Удобные реэкспорты
pub use catalog::{normalize_word, Catalog, Order, Outcome, Rejection, Statistics};
pub use config::{SessionBuilder, WordbookConfig};
pub use session::{Session, SessionError};
pub use store::{load, save, StoreError};
