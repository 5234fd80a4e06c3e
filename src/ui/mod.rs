//! Console front end split across logical submodules: `app` owns the menu
//! loop, `prompt` the input primitives, `helpers` the error formatting.

mod app;
mod helpers;
mod prompt;

pub use app::{run_app, App};
