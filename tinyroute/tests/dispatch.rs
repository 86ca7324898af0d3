mod common;

use common::{SETTINGS, User, X1, X2, X3, navigator, router};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tinyroute::testing::{NavCall, RecordingObserver, TestScreen, TestStack};
use tinyroute::{DispatchError, PresentOptions, PushOptions, RegistrarExt};

fn tested(screen: &tinyroute::ScreenHandle) -> &TestScreen {
    screen.downcast_ref::<TestScreen>().unwrap()
}

#[test]
fn test_push_with_query_and_context() {
    let navigator = navigator();
    let router = router(navigator.clone(), RecordingObserver::new());

    let screen = router
        .push(
            "abc://123.com/x1?page=10&index=20",
            Some(User::context("name", 12)),
            PushOptions::new(),
        )
        .unwrap();

    let screen = tested(&screen);
    assert_eq!(screen.tag(), "abc://123.com/x1");
    assert_eq!(screen.title(), "10/20");
    assert_eq!(screen.note(), Some("name:12"));
    assert_eq!(
        navigator.calls(),
        vec![NavCall::Push {
            stack: "main".into(),
            screen: X1.as_str().into(),
            animated: true,
        }]
    );
}

#[test]
fn test_push_by_key_constant() {
    let navigator = navigator();
    let router = router(navigator.clone(), RecordingObserver::new());

    let screen = router.push(X1, None, PushOptions::new()).unwrap();
    assert_eq!(tested(&screen).title(), "-/-");
}

#[test]
fn test_handle_registered_and_unregistered() {
    let observer = RecordingObserver::new();
    let router = router(navigator(), observer.clone());

    assert!(router.handle(X2, None));
    assert!(!router.handle(X3, None));
    assert_eq!(observer.actions(), vec![(X2.as_str().to_owned(), true)]);
    assert_eq!(observer.misses().len(), 1);
}

#[test]
fn test_try_handle_not_routed() {
    let router = router(navigator(), RecordingObserver::new());

    assert_eq!(router.try_handle(X2, None), Ok(true));
    assert_eq!(
        router.try_handle(X3, None),
        Err(DispatchError::NotRouted(X3.as_str().into()))
    );
    assert_eq!(
        router.try_handle("::", None),
        Err(DispatchError::InvalidUrl("::".into()))
    );
}

#[test]
fn test_action_is_lazy() {
    let router = router(navigator(), RecordingObserver::new());

    let pending = router.action("abc://123.com/x2?from=test", None).unwrap();
    assert_eq!(pending.key(), X2.as_str());
    assert_eq!(pending.query().and_then(|q| q.get("from")), Some("test"));
    assert!(pending.run());
}

#[test]
fn test_screen_builds_without_navigating() {
    let navigator = navigator();
    let router = router(navigator.clone(), RecordingObserver::new());

    assert!(router.screen(X1, None).is_some());
    assert!(router.screen(X2, None).is_none());
    assert_eq!(navigator.count(), 0);
}

#[test]
fn test_push_rejects_navigation_stack() {
    let navigator = navigator();
    let observer = RecordingObserver::new();
    let router = router(navigator.clone(), observer.clone());

    assert!(router.push(SETTINGS, None, PushOptions::new()).is_none());
    assert_eq!(navigator.count(), 0);
    assert_eq!(
        observer.rejections(),
        vec![(SETTINGS.as_str().to_owned(), DispatchError::StackOnStack)]
    );
}

#[test]
fn test_push_without_visible_screen() {
    let navigator = tinyroute::testing::RecordingNavigator::new();
    let router = router(navigator.clone(), RecordingObserver::new());

    assert_eq!(
        router.try_push(X1, None, PushOptions::new()).unwrap_err(),
        DispatchError::NoNavigationStack
    );
    assert_eq!(navigator.count(), 0);
}

#[test]
fn test_present_wrapped_returns_inner_screen() {
    let navigator = navigator();
    let router = router(navigator.clone(), RecordingObserver::new());

    let screen = router
        .present(
            X1,
            None,
            PresentOptions::new().wrap(TestStack::wrapper()).animated(false),
        )
        .unwrap();

    assert_eq!(tested(&screen).tag(), X1.as_str());
    assert_eq!(
        navigator.calls(),
        vec![NavCall::Present {
            from: "home".into(),
            screen: format!("stack({X1})"),
            animated: false,
            completion: false,
        }]
    );
}

#[test]
fn test_present_stack_is_not_wrapped() {
    let navigator = navigator();
    let router = router(navigator.clone(), RecordingObserver::new());

    let screen = router
        .present(SETTINGS, None, PresentOptions::new().wrap(TestStack::wrapper()))
        .unwrap();

    assert!(screen.is_navigation_stack());
    assert!(matches!(
        &navigator.calls()[0],
        NavCall::Present { screen, .. } if screen == "settings"
    ));
}

#[test]
fn test_present_runs_completion() {
    let navigator = navigator();
    let router = router(navigator.clone(), RecordingObserver::new());
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();

    router
        .present(
            X1,
            None,
            PresentOptions::new().on_complete(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_present_unrouted_skips_completion() {
    let navigator = navigator();
    let router = router(navigator.clone(), RecordingObserver::new());
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();

    let presented = router.present(
        X3,
        None,
        PresentOptions::new().on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    assert!(presented.is_none());
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert_eq!(navigator.count(), 0);
}

#[test]
fn test_present_screen_from_explicit_source() {
    let navigator = tinyroute::testing::RecordingNavigator::new();
    let router = router(navigator.clone(), RecordingObserver::new());

    let presented = router.present_screen(
        TestScreen::handle("sheet"),
        PresentOptions::new().source(TestScreen::handle("anchor")),
    );

    assert!(presented.is_some());
    assert_eq!(
        navigator.calls(),
        vec![NavCall::Present {
            from: "anchor".into(),
            screen: "sheet".into(),
            animated: true,
            completion: false,
        }]
    );
}

#[test]
fn test_url_variants_reach_same_route() {
    let router = router(navigator(), RecordingObserver::new());

    for input in [
        "abc://123.com/x2",
        "abc://123.com/x2?",
        "abc://123.com/x2?a=1&b",
        "abc://123.com:8080/x2",
        "abc://123.com/x2#fragment",
    ] {
        assert!(router.handle(input, None), "{input} should reach x2");
    }
    assert!(!router.handle("abc://123.com/x2/", None));
    assert!(!router.handle("abc://123.com/X2", None));
}

#[test]
fn test_web_keys_reach_their_routes() {
    let navigator = navigator();
    let mut router = router(navigator.clone(), RecordingObserver::new());
    router
        .table_mut()
        .screen("https://Example.com", |key, _, _| Some(TestScreen::handle(key.as_str())))
        .unwrap();
    router
        .table_mut()
        .action("http://example.com/home/", |_, _, _| true)
        .unwrap();

    for input in [
        "https://Example.com",
        "https://example.com/",
        "HTTPS://EXAMPLE.COM?tab=1",
    ] {
        let screen = router.push(input, None, PushOptions::new()).unwrap();
        assert_eq!(tested(&screen).tag(), "https://example.com/", "{input}");
    }
    assert!(router.handle("http://example.com/home/", None));
    assert!(router.handle("http://Example.com:80/home/?from=web", None));
    assert!(!router.handle("http://example.com/home", None));
    assert_eq!(navigator.count(), 3);
}
