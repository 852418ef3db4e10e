use super::*;
use pagetarget_protocols::{DescribedNode, DomNode};
use serde_json::json;

fn candidate(backend_dom_node_id: Option<i64>, frame_id: Option<&str>) -> InteractiveCandidate {
    InteractiveCandidate {
        role: "button".to_string(),
        name: "Place order".to_string(),
        backend_dom_node_id,
        frame_id: frame_id.map(|f| f.to_string()),
        targetable: backend_dom_node_id.is_some(),
    }
}

fn described_batch() -> Vec<NodeDescription> {
    vec![NodeDescription {
        node: Some(DescribedNode {
            node_id: Some(7),
            backend_node_id: Some(11),
            local_name: Some("button".to_string()),
            attributes: Some(vec![json!("id"), json!("place-order")]),
            ..Default::default()
        }),
    }]
}

fn document() -> DomDocument {
    DomDocument {
        root: DomNode {
            node_id: 1,
            node_type: Some(1),
            local_name: Some("html".to_string()),
            children: Some(vec![DomNode {
                node_id: 7,
                node_type: Some(1),
                local_name: Some("button".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        },
    }
}

#[test]
fn test_untargetable_candidate_yields_none() {
    let result = selector_for_candidate(&candidate(None, None), &described_batch(), &document());
    assert!(result.is_none());
}

#[test]
fn test_unresolvable_candidate_yields_none() {
    let result = selector_for_candidate(&candidate(Some(99), None), &described_batch(), &document());
    assert!(result.is_none());
}

#[test]
fn test_facade_matches_individual_steps() {
    let batch = described_batch();
    let document = document();
    let target = selector_for_candidate(&candidate(Some(11), None), &batch, &document).unwrap();

    let resolved = resolve_backend_node(11, &batch).unwrap();
    let selector = build_selector(&resolved, &document);
    assert_eq!(target.resolved, resolved);
    assert_eq!(target.selector, selector);
    assert_eq!(target.selector.selector, "#place-order");
    assert!(!target.selector.best_effort);
}

#[test]
fn test_frame_id_passes_through() {
    let target = selector_for_candidate(
        &candidate(Some(11), Some("frame-9")),
        &described_batch(),
        &document(),
    )
    .unwrap();
    assert_eq!(target.frame_id.as_deref(), Some("frame-9"));
}
