//! Query command implementation.
//!
//! Flattens the validated navigation to JSON entries `{ route, trail }`
//! for external tooling (search seeding, link checkers, sitemaps).

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::args::{QueryArgs, QueryTree};
use crate::config::SiteConfig;
use crate::core::SitePlan;
use crate::log;
use crate::utils::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let plan = SitePlan::assemble(config)?;

    let (value, count) = match args.tree {
        QueryTree::Nav => {
            let entries = plan.nav.flatten();
            let count = entries.len();
            (json!(entries), count)
        }
        QueryTree::Sidebar => {
            let entries = plan.sidebar.flatten();
            let count = entries.len();
            (json!(entries), count)
        }
        QueryTree::All => {
            let nav = plan.nav.flatten();
            let sidebar = plan.sidebar.flatten();
            let count = nav.len() + sidebar.len();
            (json!({ "nav": nav, "sidebar": sidebar }), count)
        }
    };

    log!("query"; "flattened {}", plural_count(count, "route"));

    let output = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            log!("query"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{output}")?;
        }
    }

    Ok(())
}
