//! Binary entry point that glues the SQLite-backed collection to the menu
//! shell. The bootstrapping pipeline is short on purpose: resolve the
//! per-user database location, make sure the schema exists, then hand control
//! to the menu loop until the user exits.
use personal_library_manager::{run_app, Library};

/// Initialize persistence and launch the menu loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// a home directory that cannot be resolved or created under) to the terminal
/// instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let library = Library::at_default_location()?;
    library.ensure_schema()?;
    run_app(library)
}
