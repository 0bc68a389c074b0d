use deferred_view::loader::{LoadError, ModuleId};
use deferred_view::ui::placeholder::{LoadingIndicator, Placeholder};
use deferred_view::ui::scope::{LoadFailure, Propagation, Scope};
use parking_lot::Mutex;
use std::sync::Arc;

fn failure(module: &'static str) -> LoadFailure {
    LoadFailure {
        module: ModuleId::from(module),
        error: LoadError::Aborted {
            module: ModuleId::from(module),
        },
    }
}

fn record(scope: &Scope, log: &Arc<Mutex<Vec<String>>>, propagation: Propagation) {
    let log = Arc::clone(log);
    let name = scope.name().to_string();
    scope.on_load_failure(move |failure| {
        log.lock().push(format!("{}:{}", name, failure.module));
        propagation
    });
}

#[test]
fn failure_bubbles_innermost_first() {
    let root = Scope::root();
    let page = root.child("page");
    let panel = page.child("panel");
    let log = Arc::new(Mutex::new(Vec::new()));
    record(&root, &log, Propagation::Continue);
    record(&page, &log, Propagation::Continue);
    record(&panel, &log, Propagation::Continue);

    assert!(!panel.dispatch(&failure("charts")));
    assert_eq!(
        *log.lock(),
        vec!["panel:charts", "page:charts", "root:charts"]
    );
}

#[test]
fn stop_halts_propagation() {
    let root = Scope::root();
    let page = root.child("page");
    let log = Arc::new(Mutex::new(Vec::new()));
    record(&root, &log, Propagation::Continue);
    record(&page, &log, Propagation::Stop);

    assert!(page.dispatch(&failure("charts")));
    assert_eq!(*log.lock(), vec!["page:charts"]);
}

#[test]
fn listeners_on_one_scope_run_in_registration_order() {
    let root = Scope::root();
    let log = Arc::new(Mutex::new(Vec::new()));
    for label in ["first", "second"] {
        let log = Arc::clone(&log);
        root.on_load_failure(move |_| {
            log.lock().push(label.to_string());
            Propagation::Continue
        });
    }

    root.dispatch(&failure("charts"));
    assert_eq!(*log.lock(), vec!["first", "second"]);
}

#[test]
fn sibling_scopes_do_not_see_each_other() {
    let root = Scope::root();
    let left = root.child("left");
    let right = root.child("right");
    let log = Arc::new(Mutex::new(Vec::new()));
    record(&right, &log, Propagation::Stop);

    assert!(!left.dispatch(&failure("charts")));
    assert!(log.lock().is_empty());
}

#[test]
fn nearest_placeholder_is_inherited() {
    let root = Scope::root();
    assert!(root.placeholder().is_none());

    let page = root.child_with_placeholder(
        "page",
        Placeholder::from(LoadingIndicator::new("Page loading")),
    );
    let section = page.child("section");
    let nested = section.child_with_placeholder(
        "nested",
        Placeholder::from(LoadingIndicator::new("Nested loading")),
    );

    match section.placeholder() {
        Some(Placeholder::Indicator(indicator)) => assert_eq!(indicator.label(), "Page loading"),
        other => panic!("unexpected placeholder: {:?}", other),
    }
    match nested.placeholder() {
        Some(Placeholder::Indicator(indicator)) => {
            assert_eq!(indicator.label(), "Nested loading")
        }
        other => panic!("unexpected placeholder: {:?}", other),
    }
}

#[test]
fn parent_links_back_up_the_chain() {
    let root = Scope::root();
    let page = root.child("page");
    assert_eq!(page.parent().map(|parent| parent.name()), Some("root"));
    assert!(root.parent().is_none());
}

#[test]
fn listener_may_register_another_listener() {
    let root = Scope::root();
    let log = Arc::new(Mutex::new(Vec::new()));
    {
        let scope = Arc::downgrade(&root);
        let log = Arc::clone(&log);
        root.on_load_failure(move |failure| {
            log.lock().push(format!("outer:{}", failure.module));
            if let Some(scope) = scope.upgrade() {
                let log = Arc::clone(&log);
                scope.on_load_failure(move |failure| {
                    log.lock().push(format!("late:{}", failure.module));
                    Propagation::Continue
                });
            }
            Propagation::Continue
        });
    }

    assert!(!root.dispatch(&failure("charts")));
    assert_eq!(*log.lock(), vec!["outer:charts"]);

    assert!(!root.dispatch(&failure("maps")));
    assert_eq!(
        *log.lock(),
        vec!["outer:charts", "outer:maps", "late:maps"]
    );
}

#[test]
fn listener_may_dispatch_again() {
    let root = Scope::root();
    let panel = root.child("panel");
    let log = Arc::new(Mutex::new(Vec::new()));
    record(&root, &log, Propagation::Stop);
    {
        let scope = Arc::downgrade(&panel);
        let log = Arc::clone(&log);
        panel.on_load_failure(move |notice| {
            log.lock().push(format!("panel:{}", notice.module));
            if notice.module.as_str() == "charts" {
                if let Some(scope) = scope.upgrade() {
                    scope.dispatch(&failure("fallback"));
                }
            }
            Propagation::Continue
        });
    }

    assert!(panel.dispatch(&failure("charts")));
    assert_eq!(
        *log.lock(),
        vec![
            "panel:charts",
            "panel:fallback",
            "root:fallback",
            "root:charts"
        ]
    );
}
