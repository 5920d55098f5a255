use nebula_common::{ShellError, ViewId, WindowId};
use serde_json::json;

use super::*;
use crate::error::{CommandParseError, RouterError};
use crate::events::{EngineEvent, OutboundEvent};
use crate::geometry::ShellLayout;
use crate::mux::Multiplexer;
use crate::registry::LoadGeneration;
use crate::testing::RecordingHost;

const SEARCH: &str = "https://search.test/?q={query}";

fn setup() -> (CommandRouter, RecordingHost) {
    let mux = Multiplexer::new(ShellLayout::default(), "https://home.test");
    (CommandRouter::new(mux, SEARCH), RecordingHost::new())
}

fn created(outcome: Outcome) -> ViewId {
    match outcome {
        Outcome::ViewCreated(id) => id,
        other => panic!("expected a view, got {other:?}"),
    }
}

// -- parsing --

#[test]
fn parse_payloadless_commands() {
    assert_eq!(Command::parse("new-window", &json!(null)).unwrap(), Command::NewWindow);
    assert_eq!(Command::parse("sidebar-on", &json!(null)).unwrap(), Command::SidebarOn);
    assert_eq!(Command::parse("sidebar-off", &json!({})).unwrap(), Command::SidebarOff);
    assert_eq!(Command::parse("ping", &json!(null)).unwrap(), Command::Ping);
}

#[test]
fn parse_new_view_string_or_object() {
    assert_eq!(
        Command::parse("new-view", &json!("example.com")).unwrap(),
        Command::NewView {
            url: Some("example.com".into())
        }
    );
    assert_eq!(
        Command::parse("new-view", &json!({"url": "example.com"})).unwrap(),
        Command::NewView {
            url: Some("example.com".into())
        }
    );
    assert_eq!(
        Command::parse("new-view", &json!(null)).unwrap(),
        Command::NewView { url: None }
    );
    assert_eq!(
        Command::parse("new-view", &json!("  ")).unwrap(),
        Command::NewView { url: None }
    );
}

#[test]
fn parse_request_view() {
    assert_eq!(
        Command::parse("request-view", &json!({"viewId": "v1"})).unwrap(),
        Command::RequestView {
            view: ViewId::from_raw("v1")
        }
    );
    assert_eq!(
        Command::parse("close-view", &json!("v2")).unwrap(),
        Command::CloseView {
            view: ViewId::from_raw("v2")
        }
    );
}

#[test]
fn parse_navigate_requires_both_fields() {
    assert_eq!(
        Command::parse("navigate", &json!({"viewId": "v1", "url": "a.test"})).unwrap(),
        Command::Navigate {
            view: ViewId::from_raw("v1"),
            url: "a.test".into()
        }
    );
    assert_eq!(
        Command::parse("navigate", &json!({"viewId": "v1"})).unwrap_err(),
        CommandParseError::MissingField {
            kind: "navigate",
            field: "url"
        }
    );
    assert!(Command::parse("navigate", &json!("v1")).is_err());
}

#[test]
fn parse_request_view_without_id_fails() {
    assert!(matches!(
        Command::parse("request-view", &json!(null)),
        Err(CommandParseError::MissingField { field: "viewId", .. })
    ));
}

#[test]
fn parse_unknown_kind_fails() {
    assert_eq!(
        Command::parse("eval", &json!(null)).unwrap_err(),
        CommandParseError::UnknownKind("eval".into())
    );
}

#[test]
fn every_kind_parses() {
    let payload = json!({"viewId": "v", "url": "u"});
    for kind in Command::KINDS {
        let command = Command::parse(kind, &payload).unwrap();
        assert_eq!(command.kind(), *kind);
    }
}

// -- dispatch --

#[test]
fn open_window_displays_home_view() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();

    let window = router.mux().window(w).unwrap();
    let view = window.displayed_view().unwrap();
    assert_eq!(router.mux().view(view).unwrap().url(), "https://home.test");
    assert_eq!(router.mux().view(view).unwrap().owner(), Some(w));
}

#[test]
fn open_window_with_startup_url_resolves_it() {
    let (mut router, mut host) = setup();
    let w = router.open_window(Some("example.com"), &mut host).unwrap();
    let url = router.mux().displayed_url(w).unwrap();
    assert_eq!(url, Some("https://example.com"));
}

#[test]
fn open_window_host_failure_is_reported() {
    let (mut router, mut host) = setup();
    host.refuse_windows = true;
    assert!(matches!(
        router.open_window(None, &mut host),
        Err(RouterError::Host(_))
    ));
    assert!(router.mux().windows().is_empty());
}

#[test]
fn new_window_command_opens_window() {
    let (mut router, mut host) = setup();
    let a = router.open_window(None, &mut host).unwrap();
    let outcome = router.handle(a, Command::NewWindow, &mut host).unwrap();
    let Outcome::WindowOpened(b) = outcome else {
        panic!("expected a window, got {outcome:?}");
    };
    assert_ne!(a, b);
    assert_eq!(router.mux().windows().len(), 2);
}

#[test]
fn new_view_resolves_address_input() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();

    let v = created(
        router
            .handle_ipc(w, "new-view", &json!("rust lifetimes"), &mut host)
            .unwrap(),
    );

    assert_eq!(
        router.mux().view(&v).unwrap().url(),
        "https://search.test/?q=rust%20lifetimes"
    );
}

#[test]
fn new_view_is_ready_but_not_displayed() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    let shown = router.mux().window(w).unwrap().displayed_view().cloned();
    host.drain_all();

    let v = created(router.handle(w, Command::NewView { url: None }, &mut host).unwrap());

    assert_eq!(router.mux().window(w).unwrap().displayed_view().cloned(), shown);
    assert!(matches!(
        host.drain(w).as_slice(),
        [OutboundEvent::ViewReady(snap)] if snap.id == v
    ));
}

#[test]
fn request_view_attaches_to_origin() {
    let (mut router, mut host) = setup();
    let a = router.open_window(None, &mut host).unwrap();
    let b = router.open_window(None, &mut host).unwrap();
    let v = router.mux().window(a).unwrap().displayed_view().cloned().unwrap();

    router
        .handle_ipc(b, "request-view", &json!({"viewId": v.as_str()}), &mut host)
        .unwrap();

    assert!(router.mux().window(a).unwrap().displayed_view().is_none());
    assert_eq!(router.mux().window(b).unwrap().displayed_view(), Some(&v));
}

#[test]
fn request_unknown_view_reports_not_found() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    let err = router
        .handle(
            w,
            Command::RequestView {
                view: ViewId::from_raw("ghost"),
            },
            &mut host,
        )
        .unwrap_err();
    assert_eq!(
        err,
        RouterError::Shell(ShellError::ViewNotFound(ViewId::from_raw("ghost")))
    );
}

#[test]
fn navigate_resolves_and_loads() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    let v = router.mux().window(w).unwrap().displayed_view().cloned().unwrap();

    router
        .handle_ipc(
            w,
            "navigate",
            &json!({"viewId": v.as_str(), "url": "example.org"}),
            &mut host,
        )
        .unwrap();

    assert_eq!(router.mux().view(&v).unwrap().url(), "https://example.org");
    assert_eq!(host.surface(&v).url, "https://example.org");
}

#[test]
fn close_view_twice_is_ok() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    let v = router.mux().window(w).unwrap().displayed_view().cloned().unwrap();

    for _ in 0..2 {
        let outcome = router
            .handle(w, Command::CloseView { view: v.clone() }, &mut host)
            .unwrap();
        assert_eq!(outcome, Outcome::Handled);
    }
    assert!(router.mux().window(w).unwrap().displayed_view().is_none());
}

#[test]
fn sidebar_commands_target_origin_window() {
    let (mut router, mut host) = setup();
    let a = router.open_window(None, &mut host).unwrap();
    let b = router.open_window(None, &mut host).unwrap();

    router.handle(a, Command::SidebarOn, &mut host).unwrap();
    assert!(router.mux().window(a).unwrap().sidebar_visible());
    assert!(!router.mux().window(b).unwrap().sidebar_visible());

    router.handle(a, Command::ToggleSidebar, &mut host).unwrap();
    assert!(!router.mux().window(a).unwrap().sidebar_visible());

    router.handle(b, Command::ToggleSidebar, &mut host).unwrap();
    router.handle(b, Command::SidebarOff, &mut host).unwrap();
    assert!(!router.mux().window(b).unwrap().sidebar_visible());
}

#[test]
fn sidebar_for_closed_window_reports_not_found() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    router.window_closed(w, &mut host);
    assert!(matches!(
        router.handle(w, Command::SidebarOn, &mut host),
        Err(RouterError::Shell(ShellError::WindowNotFound(_)))
    ));
}

#[test]
fn copy_url_returns_displayed_url() {
    let (mut router, mut host) = setup();
    let w = router.open_window(Some("https://copy.test/page"), &mut host).unwrap();
    assert_eq!(
        router.handle(w, Command::CopyUrl, &mut host).unwrap(),
        Outcome::CopyToClipboard("https://copy.test/page".into())
    );
}

#[test]
fn copy_url_with_nothing_displayed_is_noop() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    let v = router.mux().window(w).unwrap().displayed_view().cloned().unwrap();
    router.handle(w, Command::CloseView { view: v }, &mut host).unwrap();
    assert_eq!(
        router.handle(w, Command::CopyUrl, &mut host).unwrap(),
        Outcome::Handled
    );
}

#[test]
fn chrome_commands_pass_through() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    assert_eq!(
        router.handle(w, Command::CloseWindow, &mut host).unwrap(),
        Outcome::Chrome(ChromeRequest::Close)
    );
    assert_eq!(
        router.handle(w, Command::MinimizeWindow, &mut host).unwrap(),
        Outcome::Chrome(ChromeRequest::Minimize)
    );
    assert_eq!(
        router.handle(w, Command::MaximizeWindow, &mut host).unwrap(),
        Outcome::Chrome(ChromeRequest::ToggleMaximize)
    );
    // Close is only a request; the window stays until the host confirms.
    assert!(router.mux().window(w).is_ok());
}

#[test]
fn ping_replies_pong_to_origin() {
    let (mut router, mut host) = setup();
    let a = router.open_window(None, &mut host).unwrap();
    let b = router.open_window(None, &mut host).unwrap();
    host.drain_all();

    router.handle_ipc(a, "ping", &json!(null), &mut host).unwrap();

    assert_eq!(host.drain(a), vec![OutboundEvent::Pong]);
    assert!(host.drain(b).is_empty());
}

#[test]
fn unknown_ipc_kind_is_rejected() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    assert!(matches!(
        router.handle_ipc(w, "rm-rf", &json!(null), &mut host),
        Err(RouterError::Parse(CommandParseError::UnknownKind(_)))
    ));
}

// -- host notifications --

#[test]
fn window_closed_cascades_once() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    let v = router.mux().window(w).unwrap().displayed_view().cloned().unwrap();

    assert_eq!(router.window_closed(w, &mut host), 1);
    assert_eq!(router.window_closed(w, &mut host), 0);
    assert!(router.mux().view(&v).is_err());
    assert_eq!(host.destroyed, vec![v]);
}

#[test]
fn window_closed_takes_its_background_tabs() {
    let (mut router, mut host) = setup();
    let a = router.open_window(None, &mut host).unwrap();
    let b = router.open_window(None, &mut host).unwrap();
    let bg1 = created(router.handle(a, Command::NewView { url: None }, &mut host).unwrap());
    let bg2 = created(router.handle(a, Command::NewView { url: None }, &mut host).unwrap());
    let other = created(router.handle(b, Command::NewView { url: None }, &mut host).unwrap());

    assert_eq!(router.window_closed(a, &mut host), 3);

    assert!(router.mux().view(&bg1).is_err());
    assert!(router.mux().view(&bg2).is_err());
    assert!(router.mux().view(&other).is_ok());
    // b keeps its initial view and its own background tab.
    assert_eq!(router.mux().views().len(), 2);
    assert!(host.destroyed.contains(&bg1));
    assert!(host.destroyed.contains(&bg2));
}

#[test]
fn window_resized_reapplies_geometry() {
    let (mut router, mut host) = setup();
    let w = router.open_window(None, &mut host).unwrap();
    let v = router.mux().window(w).unwrap().displayed_view().cloned().unwrap();

    host.sizes
        .insert(w, nebula_common::Size::new(1000.0, 800.0));
    router.window_resized(w, &mut host);

    let bounds = host.bounds(&v).unwrap();
    assert_eq!(bounds.width, 1000.0);
    assert_eq!(bounds.height, 750.0);

    // Unknown windows are ignored.
    router.window_resized(WindowId(99), &mut host);
}

#[test]
fn engine_title_change_is_broadcast() {
    let (mut router, mut host) = setup();
    let a = router.open_window(None, &mut host).unwrap();
    let b = router.open_window(None, &mut host).unwrap();
    let v = router.mux().window(a).unwrap().displayed_view().cloned().unwrap();
    host.drain_all();

    router.handle_engine_event(
        EngineEvent::TitleChanged {
            view: v.clone(),
            generation: LoadGeneration::INITIAL,
            title: "Home".into(),
        },
        &mut host,
    );

    for w in [a, b] {
        assert!(matches!(
            host.drain(w).as_slice(),
            [OutboundEvent::ViewMetadata(snap)] if snap.id == v && snap.title == "Home"
        ));
    }
}

#[test]
fn popup_request_creates_view_for_owner_window() {
    let (mut router, mut host) = setup();
    let a = router.open_window(None, &mut host).unwrap();
    let v = router.mux().window(a).unwrap().displayed_view().cloned().unwrap();
    host.drain_all();

    router.handle_engine_event(
        EngineEvent::OpenRequested {
            view: v,
            url: "https://popup.test".into(),
        },
        &mut host,
    );

    let events = host.drain(a);
    let Some(OutboundEvent::ViewReady(snap)) = events.first() else {
        panic!("expected view-ready, got {events:?}");
    };
    assert_eq!(snap.url, "https://popup.test");
    assert_eq!(router.mux().views().len(), 2);
}

#[test]
fn popup_from_background_tab_lands_in_its_window() {
    let (mut router, mut host) = setup();
    let a = router.open_window(None, &mut host).unwrap();
    let bg = created(router.handle(a, Command::NewView { url: None }, &mut host).unwrap());
    host.drain_all();

    router.handle_engine_event(
        EngineEvent::OpenRequested {
            view: bg,
            url: "https://popup.test".into(),
        },
        &mut host,
    );

    let events = host.drain(a);
    assert!(matches!(events.first(), Some(OutboundEvent::ViewReady(s)) if s.url == "https://popup.test"));
    // The popup is a background tab of `a` and goes away with it.
    assert_eq!(router.window_closed(a, &mut host), 3);
    assert!(router.mux().views().is_empty());
}
