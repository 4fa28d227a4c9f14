pub mod assign;
pub mod dispatch;
pub mod highlight;
pub mod import;
pub mod init;
pub mod relocate;
pub mod rename;
pub mod reset;
pub mod shared;
pub mod show;
pub mod snapshots;
pub mod stats;
pub mod validate;
