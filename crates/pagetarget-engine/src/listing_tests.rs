use super::*;

fn candidate(role: &str, name: &str, targetable: bool) -> InteractiveCandidate {
    InteractiveCandidate {
        role: role.to_string(),
        name: name.to_string(),
        backend_dom_node_id: targetable.then_some(1),
        frame_id: None,
        targetable,
    }
}

#[test]
fn test_listing_line_with_name() {
    let line = candidate("button", "Place order", true).to_listing_line(0);
    assert_eq!(line, "[0] <button> \"Place order\"");
}

#[test]
fn test_listing_line_without_name() {
    let line = candidate("textbox", "", true).to_listing_line(3);
    assert_eq!(line, "[3] <textbox>");
}

#[test]
fn test_listing_line_untargetable_marker() {
    let line = candidate("link", "Home", false).to_listing_line(1);
    assert_eq!(line, "[1] <link> \"Home\" (untargetable)");
}

#[test]
fn test_render_candidates_preserves_order() {
    let candidates = vec![
        candidate("button", "Save", true),
        candidate("link", "Cancel", true),
    ];
    let rendered = render_candidates(&candidates);
    assert_eq!(rendered, "[0] <button> \"Save\"\n[1] <link> \"Cancel\"");
}

#[test]
fn test_render_candidates_empty() {
    assert_eq!(render_candidates(&[]), "");
}
