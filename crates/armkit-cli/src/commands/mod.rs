pub mod export;
pub mod figure;
pub mod list;
pub mod show;
pub mod validate;
