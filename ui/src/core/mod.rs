//! Framework-free logic behind the site shell.

pub mod hover;
pub mod meta;
pub mod nav;
pub mod theme;
