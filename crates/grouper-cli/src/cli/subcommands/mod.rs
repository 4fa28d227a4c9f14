mod import;
mod snapshots;

pub use import::ImportCommands;
pub use snapshots::SnapshotCommands;
