//! Dispatch entry points: push, present, handle.
//!
//! Each entry point comes in two flavours. The plain one collapses every
//! failure to `None` / `false`; the `try_` one says what went wrong.
//! Targets are anything string-like: a [`RouteKey`](tinyroute_core::RouteKey),
//! a `&str` or a `String`.

use crate::{
    options::{PresentOptions, PushOptions},
    router::Router,
};
use tinyroute_core::{Context, DispatchError, DispatchEvent, Navigator, PendingAction, ScreenHandle};

/// Input reported for transitions of screens built by the caller.
const PREBUILT: &str = "<prebuilt screen>";

impl<N: Navigator> Router<N> {
    /// Build the screen registered for `target` without showing it.
    pub fn screen(&self, target: impl AsRef<str>, context: Option<Context>) -> Option<ScreenHandle> {
        self.table.resolve_screen(target.as_ref(), context)
    }

    /// Bind the action registered for `target` without running it.
    pub fn action(&self, target: impl AsRef<str>, context: Option<Context>) -> Option<PendingAction<'_>> {
        self.table.resolve_action(target.as_ref(), context)
    }

    /// Resolve a screen and push it onto a navigation stack.
    ///
    /// Returns the pushed screen, or `None` if nothing was pushed.
    pub fn push(
        &self,
        target: impl AsRef<str>,
        context: Option<Context>,
        options: PushOptions,
    ) -> Option<ScreenHandle> {
        self.try_push(target, context, options).ok()
    }

    /// Like [`push`](Self::push), with the reason nothing was pushed.
    pub fn try_push(
        &self,
        target: impl AsRef<str>,
        context: Option<Context>,
        options: PushOptions,
    ) -> Result<ScreenHandle, DispatchError> {
        let input = target.as_ref();
        let screen = self.table.try_resolve_screen(input, context)?;
        self.observed(input, self.push_transition(screen, options))
    }

    /// Push an already built screen.
    pub fn push_screen(&self, screen: ScreenHandle, options: PushOptions) -> Option<ScreenHandle> {
        self.observed(PREBUILT, self.push_transition(screen, options)).ok()
    }

    /// Resolve a screen and present it modally.
    ///
    /// Returns the resolved screen (not the wrapping stack), or `None` if
    /// nothing was presented.
    pub fn present(
        &self,
        target: impl AsRef<str>,
        context: Option<Context>,
        options: PresentOptions,
    ) -> Option<ScreenHandle> {
        self.try_present(target, context, options).ok()
    }

    /// Like [`present`](Self::present), with the reason nothing was presented.
    pub fn try_present(
        &self,
        target: impl AsRef<str>,
        context: Option<Context>,
        options: PresentOptions,
    ) -> Result<ScreenHandle, DispatchError> {
        let input = target.as_ref();
        let screen = self.table.try_resolve_screen(input, context)?;
        self.observed(input, self.present_transition(screen, options))
    }

    /// Present an already built screen.
    pub fn present_screen(&self, screen: ScreenHandle, options: PresentOptions) -> Option<ScreenHandle> {
        self.observed(PREBUILT, self.present_transition(screen, options)).ok()
    }

    /// Run the action registered for `target`.
    ///
    /// `false` both when the action reports failure and when nothing is
    /// registered; use [`try_handle`](Self::try_handle) to tell them apart.
    pub fn handle(&self, target: impl AsRef<str>, context: Option<Context>) -> bool {
        self.try_handle(target, context).unwrap_or(false)
    }

    /// Run the action registered for `target`.
    ///
    /// `Ok` carries the action's own result; `Err` means no action ran.
    pub fn try_handle(&self, target: impl AsRef<str>, context: Option<Context>) -> Result<bool, DispatchError> {
        let pending = self.table.try_resolve_action(target.as_ref(), context)?;
        let key = pending.key().clone();
        let success = pending.run();
        self.table.notify(&DispatchEvent::ActionCompleted {
            key: key.as_str(),
            success,
        });
        Ok(success)
    }

    fn push_transition(&self, screen: ScreenHandle, options: PushOptions) -> Result<ScreenHandle, DispatchError> {
        if screen.is_navigation_stack() {
            return Err(DispatchError::StackOnStack);
        }

        let stack = match options.source {
            Some(stack) if stack.is_navigation_stack() => stack,
            Some(_) => return Err(DispatchError::NotANavigationStack),
            None => self
                .navigator
                .topmost()
                .and_then(|top| self.navigator.enclosing_stack(&top))
                .ok_or(DispatchError::NoNavigationStack)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(animated = options.animated, "pushing screen");

        self.navigator.push(&stack, screen.clone(), options.animated);
        Ok(screen)
    }

    fn present_transition(
        &self,
        screen: ScreenHandle,
        options: PresentOptions,
    ) -> Result<ScreenHandle, DispatchError> {
        let PresentOptions {
            wrap,
            source,
            animated,
            completion,
        } = options;

        let from = source
            .or_else(|| self.navigator.topmost())
            .ok_or(DispatchError::NoPresentingSurface)?;

        let presented = match wrap {
            Some(wrapper) if !screen.is_navigation_stack() => wrapper.wrap(screen.clone()),
            _ => screen.clone(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            animated,
            wrapped = !std::sync::Arc::ptr_eq(&presented, &screen),
            "presenting screen"
        );

        self.navigator.present(&from, presented, animated, completion);
        Ok(screen)
    }

    /// Report a refused transition to observers.
    fn observed(
        &self,
        input: &str,
        result: Result<ScreenHandle, DispatchError>,
    ) -> Result<ScreenHandle, DispatchError> {
        if let Err(reason) = &result {
            self.table.notify(&DispatchEvent::Rejected { input, reason });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{PresentOptions, PushOptions, Router, RouteTable};
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };
    use tinyroute_core::{DispatchError, Registrar, RegistrarExt, RouteKey};
    use tinyroute_std::testing::{
        CountingAction, NavCall, RecordingNavigator, RecordingObserver, TestScreen, TestStack,
    };

    const X1: RouteKey = RouteKey::new("abc://123.com/x1");
    const X2: RouteKey = RouteKey::new("abc://123.com/x2");
    const STACK: RouteKey = RouteKey::new("abc://123.com/stack");

    fn navigator() -> RecordingNavigator {
        RecordingNavigator::new()
            .with_topmost(TestScreen::handle("home"))
            .with_stack(Arc::new(TestScreen::stack("main")))
    }

    fn router(navigator: RecordingNavigator) -> Router<RecordingNavigator> {
        let mut table = RouteTable::new();
        table
            .screen(X1, |key, _, _| Some(TestScreen::handle(key.as_str())))
            .unwrap();
        table
            .screen(STACK, |_, _, _| Some(Arc::new(TestScreen::stack("nested"))))
            .unwrap();
        Router::new(table, navigator)
    }

    #[test]
    fn push_uses_enclosing_stack_of_topmost() {
        let navigator = navigator();
        let router = router(navigator.clone());

        let screen = router.push(X1, None, PushOptions::new().animated(false)).unwrap();
        assert!(screen.is::<TestScreen>());
        assert_eq!(
            navigator.calls(),
            vec![NavCall::Push {
                stack: "main".into(),
                screen: X1.as_str().into(),
                animated: false,
            }]
        );
    }

    #[test]
    fn push_prefers_explicit_stack() {
        let navigator = navigator();
        let router = router(navigator.clone());

        let explicit = Arc::new(TestScreen::stack("explicit"));
        router.push(X1, None, PushOptions::new().source(explicit)).unwrap();
        assert!(matches!(
            &navigator.calls()[0],
            NavCall::Push { stack, animated: true, .. } if stack == "explicit"
        ));
    }

    #[test]
    fn push_refuses_stack_screens() {
        let navigator = navigator();
        let router = router(navigator.clone());

        assert_eq!(
            router.try_push(STACK, None, PushOptions::new()).unwrap_err(),
            DispatchError::StackOnStack
        );
        assert_eq!(navigator.count(), 0);
    }

    #[test]
    fn push_refuses_non_stack_source() {
        let navigator = navigator();
        let router = router(navigator.clone());

        let err = router
            .try_push(X1, None, PushOptions::new().source(TestScreen::handle("plain")))
            .unwrap_err();
        assert_eq!(err, DispatchError::NotANavigationStack);
    }

    #[test]
    fn push_without_stack_is_noop() {
        let navigator = RecordingNavigator::new().with_topmost(TestScreen::handle("home"));
        let router = router(navigator.clone());

        assert!(router.push(X1, None, PushOptions::new()).is_none());
        assert_eq!(
            router.try_push(X1, None, PushOptions::new()).unwrap_err(),
            DispatchError::NoNavigationStack
        );
        assert_eq!(navigator.count(), 0);
    }

    #[test]
    fn present_wraps_when_asked() {
        let navigator = navigator();
        let router = router(navigator.clone());
        let completed = Arc::new(AtomicBool::new(false));
        let flag = completed.clone();

        let screen = router
            .present(
                format!("{X1}?page=10&index=20"),
                None,
                PresentOptions::new()
                    .wrap(TestStack::wrapper())
                    .on_complete(move || flag.store(true, Ordering::SeqCst)),
            )
            .unwrap();

        // The caller gets the resolved screen, the navigator the wrapper.
        assert!(screen.is::<TestScreen>());
        assert_eq!(
            navigator.calls(),
            vec![NavCall::Present {
                from: "home".into(),
                screen: format!("stack({X1})"),
                animated: true,
                completion: true,
            }]
        );
        assert!(completed.load(Ordering::SeqCst));
    }

    #[test]
    fn present_does_not_wrap_stacks() {
        let navigator = navigator();
        let router = router(navigator.clone());

        router
            .present(STACK, None, PresentOptions::new().wrap(TestStack::wrapper()))
            .unwrap();
        assert!(matches!(
            &navigator.calls()[0],
            NavCall::Present { screen, completion: false, .. } if screen == "nested"
        ));
    }

    #[test]
    fn present_needs_a_surface() {
        let navigator = RecordingNavigator::new();
        let router = router(navigator.clone());

        assert_eq!(
            router.try_present(X1, None, PresentOptions::new()).unwrap_err(),
            DispatchError::NoPresentingSurface
        );
        let explicit = TestScreen::handle("sheet-host");
        assert!(router
            .present(X1, None, PresentOptions::new().source(explicit))
            .is_some());
        assert_eq!(navigator.count(), 1);
    }

    #[test]
    fn unrouted_targets_do_not_navigate() {
        let navigator = navigator();
        let router = router(navigator.clone());

        assert!(router.push("abc://123.com/x3", None, PushOptions::new()).is_none());
        assert!(router.present("not a url", None, PresentOptions::new()).is_none());
        assert_eq!(navigator.count(), 0);
    }

    #[test]
    fn handle_returns_action_result() {
        let succeeding = CountingAction::new(true);
        let failing = CountingAction::new(false);
        let mut table = RouteTable::new();
        table.register_action(X2.as_str(), Box::new(succeeding.clone())).unwrap();
        table.register_action("abc://123.com/fails", Box::new(failing.clone())).unwrap();
        let router = Router::new(table, navigator());

        assert!(router.handle(X2, None));
        assert!(!router.handle("abc://123.com/fails", None));
        assert!(!router.handle("abc://123.com/x3", None));
        assert_eq!(succeeding.count(), 1);
        assert_eq!(failing.count(), 1);
    }

    #[test]
    fn try_handle_separates_not_routed_from_failure() {
        let mut table = RouteTable::new();
        table.action("abc://123.com/fails", |_, _, _| false).unwrap();
        let router = Router::new(table, navigator());

        assert_eq!(router.try_handle("abc://123.com/fails", None), Ok(false));
        assert_eq!(
            router.try_handle("abc://123.com/x3", None),
            Err(DispatchError::NotRouted("abc://123.com/x3".into()))
        );
    }

    #[test]
    fn push_screen_skips_resolution() {
        let navigator = navigator();
        let router = router(navigator.clone());

        assert!(router
            .push_screen(TestScreen::handle("built"), PushOptions::new())
            .is_some());
        assert!(router
            .push_screen(Arc::new(TestScreen::stack("s")), PushOptions::new())
            .is_none());
        assert_eq!(navigator.count(), 1);
    }

    #[test]
    fn refused_prebuilt_transitions_are_reported() {
        let observer = RecordingObserver::new();
        let router = Router::new(RouteTable::new(), RecordingNavigator::new())
            .with_observer(observer.clone());

        assert!(router
            .push_screen(Arc::new(TestScreen::stack("s")), PushOptions::new())
            .is_none());
        assert!(router
            .present_screen(TestScreen::handle("sheet"), PresentOptions::new())
            .is_none());

        assert_eq!(
            observer.rejections(),
            vec![
                (super::PREBUILT.to_owned(), DispatchError::StackOnStack),
                (super::PREBUILT.to_owned(), DispatchError::NoPresentingSurface),
            ]
        );
    }
}
