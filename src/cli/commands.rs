use std::path::Path;

use crate::persist::store::{RestoreOutcome, StateFile};
use crate::screen::element_model::Element;

// ============================================================================
// capture subcommand
// ============================================================================

pub fn cmd_capture(
    store: &StateFile,
    tree_path: &str,
    page: &str,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = load_tree(tree_path)?;

    if verbose > 0 {
        eprintln!("Capturing {} as page '{}'...", tree_path, page);
    }

    let outcome = store.capture(tree.as_ref(), page)?;

    println!(
        "Captured {} controls for page '{}' into {} ({})",
        outcome.controls,
        outcome.page,
        store.path().display(),
        outcome.changes.summary()
    );

    if verbose > 1 {
        eprintln!("  fingerprint: {}", outcome.fingerprint);
        for name in &outcome.changes.added {
            eprintln!("  + {}", name);
        }
        for name in &outcome.changes.changed {
            eprintln!("  ~ {}", name);
        }
        for name in &outcome.changes.removed {
            eprintln!("  - {}", name);
        }
    }

    Ok(())
}

// ============================================================================
// restore subcommand
// ============================================================================

/// Restore `page` onto the tree and emit the resulting tree.
///
/// The tree is emitted even when nothing was restored, so the command can sit
/// in a pipeline.
pub fn cmd_restore(
    store: &StateFile,
    tree_path: &str,
    page: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<RestoreOutcome, Box<dyn std::error::Error>> {
    let mut tree = load_tree(tree_path)?;

    let outcome = store.restore(tree.as_mut(), page)?;

    match outcome {
        RestoreOutcome::NoStateFile => {
            eprintln!("No state file at {}, nothing restored", store.path().display());
        }
        RestoreOutcome::PageNotFound => {
            eprintln!("Page '{}' is not stored, nothing restored", page);
        }
        RestoreOutcome::Restored { applied } => {
            if verbose > 0 {
                eprintln!("Restored {} controls for page '{}'", applied, page);
            }
        }
    }

    let json = serde_json::to_string_pretty(&tree)?;
    match output {
        Some(path) => std::fs::write(path, &json)?,
        None => println!("{}", json),
    }

    Ok(outcome)
}

// ============================================================================
// show / forget subcommands
// ============================================================================

pub fn cmd_show(store: &StateFile, page: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match page {
        Some(name) => match store.page(name)? {
            Some(controls) => println!("{}", serde_json::to_string_pretty(&controls)?),
            None => eprintln!("Page '{}' is not stored", name),
        },
        None => {
            let state = store.load()?;
            println!(
                "Selected page: {}",
                Some(state.selected_page.as_str())
                    .filter(|p| !p.is_empty())
                    .unwrap_or("<none>")
            );
            for (name, controls) in &state.pages {
                println!("  {} ({} controls)", name, controls.len());
            }
        }
    }

    Ok(())
}

pub fn cmd_forget(store: &StateFile, page: &str) -> Result<(), Box<dyn std::error::Error>> {
    if store.remove_page(page)? {
        println!("Removed page '{}'", page);
    } else {
        eprintln!("Page '{}' is not stored", page);
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Load an element tree from a JSON or YAML file.
///
/// A document that is just `null` yields `None`, which the walkers reject.
pub fn load_tree(path: &str) -> Result<Option<Element>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;

    let is_yaml = Path::new(path)
        .extension()
        .map_or(false, |e| e == "yaml" || e == "yml");

    let tree = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(tree)
}
