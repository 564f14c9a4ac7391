//! List command implementation

use std::path::Path;

use colored::Colorize;
use overrides_core::documents::load_store;
use overrides_core::{Error, OverrideStore};
use overrides_fs::ProjectLayout;

use crate::error::Result;

/// Run the list-manifests command
///
/// A project without a store lists nothing.
pub fn run_list(root: &Path, json: bool) -> Result<()> {
    let store = match load_store(&ProjectLayout::new(root)) {
        Ok(store) => store,
        Err(Error::MissingDocument { .. }) => OverrideStore::new(),
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&store)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No overrides defined.");
        println!("Run {} to add one.", "overrides manifest".cyan());
        return Ok(());
    }

    println!("{} Manifest overrides:", "=>".blue().bold());
    for (id, record) in store.iter() {
        let keys = record.manifest.len();
        println!(
            "   {} {}: {} {}",
            "-".cyan(),
            id.bold(),
            record.description,
            format!("({} key{})", keys, if keys == 1 { "" } else { "s" }).dimmed()
        );
    }
    Ok(())
}
