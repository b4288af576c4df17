//! Rendering engine seam.
//!
//! waypost does not render anything itself: the validated [`SitePlan`] is
//! handed, unmodified in shape, to an external engine. This module owns
//! that seam and the one-time theme-extension hook that runs against the
//! engine's application handle before first render.
//!
//! The application handle is opaque to waypost - extensions are the only
//! code that touches it, and what they do there (typically registering a
//! UI component library) carries no return contract beyond success.

use anyhow::{Context, Result};

use crate::core::SitePlan;
use crate::log;

/// External rendering engine.
///
/// `App` is the engine's application handle, opaque to waypost; it exists
/// only to be passed to theme extensions during [`hand_off`].
pub trait Engine {
    type App;

    /// Engine name for logs.
    fn name(&self) -> &'static str;

    /// The application handle theme extensions enhance.
    fn app(&mut self) -> &mut Self::App;

    /// Render the site. Called exactly once, after all extensions ran.
    fn render(&mut self, plan: &SitePlan) -> Result<()>;
}

/// A one-time theme extension attached to the engine's app handle before
/// first render (e.g. registering a UI component library).
pub trait ThemeExtension<App> {
    /// Extension name for logs and error context.
    fn name(&self) -> &'static str;

    /// Side-effecting registration against the opaque app handle.
    fn enhance(&self, app: &mut App) -> Result<()>;
}

/// Hand the site plan to the engine.
///
/// Runs every extension once, in registration order, against the engine's
/// app handle, then renders. Extensions are consumed: the hook is a
/// startup-time integration point, not a runtime phase. Any extension
/// failure aborts before render (fail-fast).
pub fn hand_off<E: Engine>(
    engine: &mut E,
    extensions: Vec<Box<dyn ThemeExtension<E::App>>>,
    plan: &SitePlan,
) -> Result<()> {
    for extension in &extensions {
        log!("theme"; "`{}` attaching", extension.name());
        extension
            .enhance(engine.app())
            .with_context(|| format!("theme extension `{}` failed", extension.name()))?;
    }

    engine.render(plan)
}

/// No-op engine: validates the hand-off path without producing output.
///
/// Used by `waypost check` so validation exercises the same assembly and
/// hand-off steps as a real run.
#[derive(Debug, Default)]
pub struct NullEngine {
    app: (),
    rendered: usize,
}

impl Engine for NullEngine {
    type App = ();

    fn name(&self) -> &'static str {
        "null"
    }

    fn app(&mut self) -> &mut Self::App {
        &mut self.app
    }

    fn render(&mut self, _plan: &SitePlan) -> Result<()> {
        self.rendered += 1;
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use anyhow::bail;

    fn plan() -> SitePlan {
        let config = test_parse_config(
            r#"
            [theme]
            sidebar = [{ text = "Home", link = "/" }]
            "#,
        );
        SitePlan::assemble(&config).unwrap()
    }

    /// Engine whose app handle records what extensions did to it.
    #[derive(Default)]
    struct RecordingEngine {
        app: Vec<String>,
        rendered_after: Option<usize>,
    }

    impl Engine for RecordingEngine {
        type App = Vec<String>;

        fn name(&self) -> &'static str {
            "recording"
        }

        fn app(&mut self) -> &mut Self::App {
            &mut self.app
        }

        fn render(&mut self, _plan: &SitePlan) -> Result<()> {
            // Remember how many registrations had happened by render time
            self.rendered_after = Some(self.app.len());
            Ok(())
        }
    }

    struct ComponentLibrary(&'static str);

    impl ThemeExtension<Vec<String>> for ComponentLibrary {
        fn name(&self) -> &'static str {
            self.0
        }

        fn enhance(&self, app: &mut Vec<String>) -> Result<()> {
            app.push(self.0.to_string());
            Ok(())
        }
    }

    struct FailingExtension;

    impl ThemeExtension<Vec<String>> for FailingExtension {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn enhance(&self, _app: &mut Vec<String>) -> Result<()> {
            bail!("registration failed")
        }
    }

    #[test]
    fn test_extensions_run_in_order_before_render() {
        let mut engine = RecordingEngine::default();
        let extensions: Vec<Box<dyn ThemeExtension<Vec<String>>>> = vec![
            Box::new(ComponentLibrary("antd")),
            Box::new(ComponentLibrary("icons")),
        ];

        hand_off(&mut engine, extensions, &plan()).unwrap();

        assert_eq!(engine.app, ["antd", "icons"]);
        // Both registrations were visible before render ran
        assert_eq!(engine.rendered_after, Some(2));
    }

    #[test]
    fn test_failing_extension_aborts_before_render() {
        let mut engine = RecordingEngine::default();
        let extensions: Vec<Box<dyn ThemeExtension<Vec<String>>>> = vec![
            Box::new(ComponentLibrary("antd")),
            Box::new(FailingExtension),
        ];

        let err = hand_off(&mut engine, extensions, &plan()).unwrap_err();
        assert!(err.to_string().contains("broken"));
        assert_eq!(engine.rendered_after, None, "render must not run");
    }

    #[test]
    fn test_null_engine_renders_once() {
        let mut engine = NullEngine::default();
        hand_off(&mut engine, Vec::new(), &plan()).unwrap();
        assert_eq!(engine.rendered, 1);
    }
}
