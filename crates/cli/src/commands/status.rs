//! Report what the store holds.

use super::{CliError, open_store};

/// Run the `status` command.
///
/// # Errors
///
/// Returns an error if the store is unavailable or cannot list collections.
#[allow(clippy::print_stdout)]
pub async fn run() -> Result<(), CliError> {
    let store = open_store()?;
    let collections = store.collection_names().await?;

    println!(
        "database:    {}",
        store.database_name().unwrap_or("(unknown)")
    );
    if collections.is_empty() {
        println!("collections: (none)");
    } else {
        println!("collections:");
        for name in &collections {
            println!("  - {name}");
        }
    }

    Ok(())
}
