//! Navigation scenarios through a fully booted shell.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use userapp_shell::config::{Precedence, ShellConfig};
use userapp_shell::navigation::NavigationEvent;
use userapp_shell::view::{MemoryMount, MountTarget, Rendered, View, ViewContext, ViewRegistry};
use userapp_shell::{ShellBuilder, Shutdown};

fn current(shell: &userapp_shell::Shell<MemoryMount>) -> String {
    shell
        .dispatcher
        .mount()
        .current()
        .map(|id| id.to_string())
        .unwrap_or_default()
}

#[test]
fn test_unknown_path_renders_main() {
    let mut shell = ShellBuilder::new(ShellConfig::default())
        .build(MemoryMount::new())
        .unwrap();

    shell.dispatcher.navigate("/unknown/path").unwrap();
    assert_eq!(current(&shell), "Main");
}

#[test]
fn test_specific_routes_render_their_views() {
    let mut shell = ShellBuilder::new(ShellConfig::default())
        .build(MemoryMount::new())
        .unwrap();

    shell.dispatcher.navigate("/edit").unwrap();
    assert_eq!(current(&shell), "Edit");

    shell.dispatcher.navigate("/profile").unwrap();
    assert_eq!(current(&shell), "Profile");

    for path in ["/", "", "/editor", "/profile/x", "/EDIT"] {
        shell.dispatcher.replace(path).unwrap();
        assert_eq!(current(&shell), "Main", "path {:?}", path);
    }
}

#[test]
fn test_declaration_order_reproduces_shadowing() {
    let mut config = ShellConfig::default();
    config.routing.precedence = Precedence::DeclarationOrder;
    config.routing.allow_shadowing = true;

    let mut shell = ShellBuilder::new(config).build(MemoryMount::new()).unwrap();
    shell.dispatcher.navigate("/edit").unwrap();
    assert_eq!(current(&shell), "Main");
}

/// Records the context each render receives.
#[derive(Clone, Default)]
struct RecordingView {
    seen: Arc<Mutex<Vec<(String, String, Vec<&'static str>)>>>,
}

impl View for RecordingView {
    fn render(&self, ctx: &ViewContext) -> Rendered {
        self.seen.lock().unwrap().push((
            ctx.path.clone(),
            ctx.pattern.clone(),
            ctx.http.interceptors().names(),
        ));
        Rendered::new("recorded")
    }
}

#[test]
fn test_views_receive_credentialed_client() {
    let view = RecordingView::default();
    let mut views = ViewRegistry::with_builtin();
    views.register("Profile", view.clone());

    let mut shell = ShellBuilder::new(ShellConfig::default())
        .views(views)
        .build(MemoryMount::new())
        .unwrap();
    shell.dispatcher.navigate("/profile?tab=avatar").unwrap();

    let seen = view.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (path, pattern, interceptors) = &seen[0];
    assert_eq!(path, "/profile?tab=avatar");
    assert_eq!(pattern, "/profile");
    assert_eq!(interceptors.last(), Some(&"credentials"));
}

#[tokio::test]
async fn test_event_loop_drives_dispatcher() {
    let mut shell = ShellBuilder::new(ShellConfig::default())
        .build(MemoryMount::new())
        .unwrap();
    let shutdown = Shutdown::new();
    let (tx, rx) = mpsc::channel(8);

    for event in [
        NavigationEvent::Push("/".into()),
        NavigationEvent::Push("/edit".into()),
        NavigationEvent::Push("/profile".into()),
        NavigationEvent::Back,
        NavigationEvent::Replace("/nowhere".into()),
    ] {
        tx.send(event).await.unwrap();
    }
    drop(tx);

    shell.dispatcher.run(rx, shutdown.subscribe()).await;

    assert_eq!(current(&shell), "Main");
    let paths: Vec<&str> = shell
        .dispatcher
        .history()
        .entries()
        .iter()
        .map(|e| e.path.as_str())
        .collect();
    assert_eq!(paths, vec!["/", "/nowhere", "/profile"]);
}

#[test]
fn test_query_changes_remount_and_replace_in_place_does_not() {
    let mut shell = ShellBuilder::new(ShellConfig::default())
        .build(MemoryMount::new())
        .unwrap();

    shell.dispatcher.navigate("/edit?tab=a").unwrap();
    shell.dispatcher.navigate("/edit?tab=b").unwrap();
    assert_eq!(shell.dispatcher.mount().mount_count(), 2);
    assert_eq!(shell.dispatcher.history().len(), 2);

    shell.dispatcher.replace("/edit/?tab=b").unwrap();
    assert_eq!(shell.dispatcher.mount().mount_count(), 2);
    assert_eq!(shell.dispatcher.history().len(), 2);
    assert_eq!(
        shell.dispatcher.history().current().unwrap().path,
        "/edit/?tab=b"
    );
}
