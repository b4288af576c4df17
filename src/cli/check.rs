//! Check command implementation.
//!
//! Config shape errors are already fatal during load; this command
//! additionally assembles the site plan, runs the duplicate-route
//! guardrail, and dry-runs the engine hand-off so `check` exercises the
//! same path as a real run.

use anyhow::Result;

use crate::cli::args::CheckArgs;
use crate::config::SiteConfig;
use crate::core::SitePlan;
use crate::engine::{self, NullEngine};
use crate::log;
use crate::utils::{plural_count, plural_s};

/// Validate the site configuration and navigation trees.
pub fn check_site(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    let plan = SitePlan::assemble(config)?;

    let nav_routes = plan.nav.flatten().len();
    let sidebar_routes = plan.sidebar.flatten().len();
    log!(
        "check";
        "{} in nav, {} in sidebar",
        plural_count(nav_routes, "route"),
        plural_count(sidebar_routes, "route")
    );

    // Dry-run the hand-off against the no-op engine
    let mut engine = NullEngine::default();
    engine::hand_off(&mut engine, Vec::new(), &plan)?;

    // Duplicate routes were already printed as warnings during load;
    // here they only decide the exit status
    let duplicates = plan.duplicate_links();
    if duplicates.is_empty() {
        log!("check"; "all routes valid");
    } else if args.strict {
        anyhow::bail!(
            "check failed: {} duplicate route{}",
            duplicates.len(),
            plural_s(duplicates.len())
        );
    } else {
        log!(
            "check";
            "passed with {} (rerun with --strict to fail on duplicates)",
            plural_count(duplicates.len(), "warning")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_check_passes_clean_config() {
        let config = test_parse_config(
            r#"
            [theme]
            nav = [{ text = "Home", link = "/" }]
            sidebar = [{ text = "Guide", items = [{ text = "Intro", link = "/guide/intro" }] }]
            "#,
        );
        let args = CheckArgs { strict: false };
        assert!(check_site(&args, &config).is_ok());
    }

    #[test]
    fn test_strict_fails_on_duplicates() {
        let config = test_parse_config(
            r#"
            [theme]
            sidebar = [
                { text = "A", link = "/x" },
                { text = "B", link = "/x" },
            ]
            "#,
        );

        assert!(check_site(&CheckArgs { strict: false }, &config).is_ok());

        let err = check_site(&CheckArgs { strict: true }, &config).unwrap_err();
        assert!(err.to_string().contains("duplicate route"));
    }
}
