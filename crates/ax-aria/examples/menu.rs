//! Example: Menu with owned panels and an atomic alert region

use ax_aria::{atomic, attr, role, RelationEditor, RelationSpec, RoleSpec, Targets};
use ax_dom::Document;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut doc = Document::new();
    let root = doc.root();

    let menu = doc.create_element("ul");
    let panel = doc.create_element("div");
    let popup = doc.create_element("div");
    doc.append_child(root, menu);
    doc.append_child(root, panel);
    doc.append_child(menu, popup);
    doc.set_id(menu, "menu");
    doc.set_id(panel, "settings-panel");

    role::add_roles(&mut doc, &[menu], &RoleSpec::Tokens("menu"));

    let mut editor = RelationEditor::new();
    editor
        .add_related(
            &mut doc,
            &[menu],
            &RelationSpec::Name("controls"),
            &Targets::ids("settings-panel"),
        )
        .expect("valid relation");
    // The popup has no id; linking it mints one
    editor
        .add_related(&mut doc, &[menu], &RelationSpec::Default, &Targets::node(popup))
        .expect("valid relation");

    println!("menu controls: {:?}", doc.get_attribute(menu, "aria-controls"));
    println!("menu owns:     {:?}", doc.get_attribute(menu, "aria-owns"));
    println!("popup id:      {:?}", doc.id(popup));

    let owned = editor
        .related(&doc, &[menu], &RelationSpec::Default, None)
        .expect("valid relation");
    println!("owned nodes:   {}", owned.len());

    // Alerts inside an atomic region are announced as one unit
    attr::set(&mut doc, &[menu], "atomic", "true");
    let scope = atomic(&doc, &[popup]);
    println!("atomic scope:  {:?}", scope.nodes());
}
