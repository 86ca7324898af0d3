#![allow(dead_code)]

use std::sync::{Arc, Once};
use tinyroute::testing::{RecordingNavigator, RecordingObserver, TestScreen};
use tinyroute::{Context, Registrar, RegistrarExt, RegistryError, RouteKey, RouteModule, Router};

// ============================================================================
// Keys
// ============================================================================

pub const X1: RouteKey = RouteKey::new("abc://123.com/x1");
pub const X2: RouteKey = RouteKey::new("abc://123.com/x2");
pub const X3: RouteKey = RouteKey::new("abc://123.com/x3");
pub const SETTINGS: RouteKey = RouteKey::new("abc://123.com/settings");

// ============================================================================
// Context Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn context(name: &str, age: u32) -> Context {
        Context::new(Self {
            name: name.to_owned(),
            age,
        })
    }
}

// ============================================================================
// Modules
// ============================================================================

/// Registers `x1` (a screen reading `page`, `index` and a [`User`]) and
/// `x2` (an action that always succeeds).
pub struct DemoModule;

impl RouteModule for DemoModule {
    fn register(&self, r: &mut dyn Registrar) -> Result<(), RegistryError> {
        r.screen(X1, |key, query, context| {
            let page = query.and_then(|q| q.get("page")).unwrap_or("-");
            let index = query.and_then(|q| q.get("index")).unwrap_or("-");
            let mut screen = TestScreen::new(key.as_str()).with_title(format!("{page}/{index}"));
            if let Some(user) = context.and_then(|c| c.downcast_ref::<User>()) {
                screen = screen.with_note(format!("{}:{}", user.name, user.age));
            }
            Some(Arc::new(screen))
        })?;
        r.action(X2, |_, _, _| true)
    }
}

/// Registers a settings screen that is already a navigation stack.
pub struct SettingsModule;

impl RouteModule for SettingsModule {
    fn register(&self, r: &mut dyn Registrar) -> Result<(), RegistryError> {
        r.screen(SETTINGS, |_, _, _| Some(Arc::new(TestScreen::stack("settings"))))
    }
}

// ============================================================================
// Setup
// ============================================================================

static INIT: Once = Once::new();

/// Route `tracing` output to the test writer, filtered by `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A navigator showing `home` inside the `main` stack.
pub fn navigator() -> RecordingNavigator {
    RecordingNavigator::new()
        .with_topmost(TestScreen::handle("home"))
        .with_stack(Arc::new(TestScreen::stack("main")))
}

/// A router with both demo modules, observed by `observer`.
pub fn router(navigator: RecordingNavigator, observer: RecordingObserver) -> Router<RecordingNavigator> {
    init_tracing();
    Router::builder()
        .module(DemoModule)
        .module(SettingsModule)
        .observer(observer)
        .navigator(navigator)
        .build()
        .unwrap()
}
