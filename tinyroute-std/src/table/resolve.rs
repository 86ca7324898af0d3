//! Lookups by URL.
//!
//! Every input is normalized first, so a registered key can be reached by
//! its own text (a canonical key normalizes to itself) or by any URL with
//! the same scheme, host and path. Resolution is a single map lookup
//! followed by at most one factory call.

use super::registry::RouteTable;
use crate::normalize::{self, Normalized};
use tinyroute_core::{Context, DispatchError, DispatchEvent, PendingAction, RouteKind, ScreenHandle};

impl RouteTable {
    /// Build the screen registered for `input`.
    ///
    /// `None` when `input` is not a URL, nothing is registered for it, or
    /// the factory declined.
    pub fn resolve_screen(&self, input: &str, context: Option<Context>) -> Option<ScreenHandle> {
        self.try_resolve_screen(input, context).ok()
    }

    /// Like [`resolve_screen`](Self::resolve_screen), with the reason for a miss.
    pub fn try_resolve_screen(
        &self,
        input: &str,
        context: Option<Context>,
    ) -> Result<ScreenHandle, DispatchError> {
        let Normalized { key, query } = self.normalized(RouteKind::Screen, input)?;
        let Some(factory) = self.screens.get(key.as_str()) else {
            self.notify(&DispatchEvent::NotRouted {
                kind: RouteKind::Screen,
                input,
            });
            return Err(DispatchError::NotRouted(key.into_string()));
        };

        self.notify(&DispatchEvent::Resolved {
            kind: RouteKind::Screen,
            key: key.as_str(),
        });
        factory
            .build(&key, query.as_ref(), context.as_ref())
            .ok_or_else(|| DispatchError::FactoryDeclined(key.into_string()))
    }

    /// Bind the action registered for `input` without running it.
    pub fn resolve_action(&self, input: &str, context: Option<Context>) -> Option<PendingAction<'_>> {
        self.try_resolve_action(input, context).ok()
    }

    /// Like [`resolve_action`](Self::resolve_action), with the reason for a miss.
    pub fn try_resolve_action(
        &self,
        input: &str,
        context: Option<Context>,
    ) -> Result<PendingAction<'_>, DispatchError> {
        let Normalized { key, query } = self.normalized(RouteKind::Action, input)?;
        let Some(factory) = self.actions.get(key.as_str()) else {
            self.notify(&DispatchEvent::NotRouted {
                kind: RouteKind::Action,
                input,
            });
            return Err(DispatchError::NotRouted(key.into_string()));
        };

        self.notify(&DispatchEvent::Resolved {
            kind: RouteKind::Action,
            key: key.as_str(),
        });
        Ok(PendingAction::new(factory.as_ref(), key, query, context))
    }

    fn normalized(&self, kind: RouteKind, input: &str) -> Result<Normalized, DispatchError> {
        normalize::normalize(input).ok_or_else(|| {
            self.notify(&DispatchEvent::NotRouted { kind, input });
            DispatchError::InvalidUrl(input.to_owned())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        table::RouteTable,
        testing::{RecordingObserver, TestScreen},
    };
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tinyroute_core::{Context, DispatchError, RegistrarExt, RouteKind};

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: String,
        age: u32,
    }

    fn table() -> RouteTable {
        let mut table = RouteTable::new();
        table
            .screen("abc://123.com/x1", |key, query, context| {
                let title = query.map(ToString::to_string).unwrap_or_default();
                let mut screen = TestScreen::new(key.as_str()).with_title(title);
                if let Some(user) = context.and_then(|c| c.downcast_ref::<User>()) {
                    screen = screen.with_note(format!("{}:{}", user.name, user.age));
                }
                Some(Arc::new(screen))
            })
            .unwrap();
        table
            .screen("abc://123.com/broken", |_, _, _| None)
            .unwrap();
        table.action("abc://123.com/x2", |_, _, _| true).unwrap();
        table
    }

    fn screen_of(screen: &tinyroute_core::ScreenHandle) -> &TestScreen {
        screen.downcast_ref::<TestScreen>().unwrap()
    }

    #[test]
    fn resolves_with_query_and_context() {
        let table = table();
        let user = User {
            name: "name".into(),
            age: 12,
        };

        let screen = table
            .resolve_screen(
                "abc://123.com/x1?page=10&index=20",
                Some(Context::new(user)),
            )
            .unwrap();

        let screen = screen_of(&screen);
        assert_eq!(screen.tag(), "abc://123.com/x1");
        assert_eq!(screen.title(), "index=20&page=10");
        assert_eq!(screen.note(), Some("name:12"));
    }

    #[test]
    fn canonical_key_resolves_without_query() {
        let table = table();
        let screen = table.resolve_screen("abc://123.com/x1", None).unwrap();
        assert_eq!(screen_of(&screen).title(), "");
    }

    #[test]
    fn other_keys_resolve_to_none() {
        let table = table();
        assert!(table.resolve_screen("abc://123.com/x3", None).is_none());
        assert!(table.resolve_screen("abc://other.com/x1", None).is_none());
        assert!(table.resolve_screen("/x1", None).is_none());
    }

    #[test]
    fn screen_and_action_mappings_are_separate() {
        let table = table();
        assert!(table.resolve_screen("abc://123.com/x2", None).is_none());
        assert!(table.resolve_action("abc://123.com/x1", None).is_none());
    }

    #[test]
    fn try_resolve_reports_reason() {
        let table = table();
        assert_eq!(
            table.try_resolve_screen("no scheme", None).unwrap_err(),
            DispatchError::InvalidUrl("no scheme".into())
        );
        assert_eq!(
            table.try_resolve_screen("abc://123.com/x9?a=1", None).unwrap_err(),
            DispatchError::NotRouted("abc://123.com/x9".into())
        );
        assert_eq!(
            table.try_resolve_screen("abc://123.com/broken", None).unwrap_err(),
            DispatchError::FactoryDeclined("abc://123.com/broken".into())
        );
    }

    #[test]
    fn action_runs_only_when_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let mut table = RouteTable::new();
        table
            .action("abc://123.com/count", move |_, query, _| {
                seen.fetch_add(1, Ordering::SeqCst);
                query.is_some_and(|q| q.get("n") == Some("1"))
            })
            .unwrap();

        let pending = table.resolve_action("abc://123.com/count?n=1", None).unwrap();
        assert_eq!(pending.key(), "abc://123.com/count");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(pending.run());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn observers_see_hits_and_misses() {
        let observer = RecordingObserver::new();
        let mut table = table();
        table.add_observer(Arc::new(observer.clone()));

        table.resolve_screen("abc://123.com/x1", None);
        table.resolve_action("abc://123.com/nothing", None);
        table.resolve_action("garbage", None);

        assert_eq!(
            observer.resolutions(),
            vec![(RouteKind::Screen, "abc://123.com/x1".to_owned())]
        );
        assert_eq!(
            observer.misses(),
            vec![
                (RouteKind::Action, "abc://123.com/nothing".to_owned()),
                (RouteKind::Action, "garbage".to_owned()),
            ]
        );
    }
}
