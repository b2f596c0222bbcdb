pub mod create;
pub mod list;
pub mod profile;
pub mod update;
