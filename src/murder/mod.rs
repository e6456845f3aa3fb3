//! Murder history: an append-only log with undo-last and undo-all.

pub mod history;

pub use history::MurderHistory;
