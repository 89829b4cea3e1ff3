//! One component per route; each wraps its content in `Container`.

mod blog;
mod dashboard;
mod home;
mod projects;
mod snippets;

pub use blog::Blog;
pub use dashboard::Dashboard;
pub use home::Home;
pub use projects::Projects;
pub use snippets::Snippets;
