use super::*;
use serde_json::json;

#[test]
fn test_ax_node_deserialize_wire_fields() {
    let json = r#"{
        "role": "button",
        "name": "Place order",
        "backendDOMNodeId": 11,
        "frameId": "frame-1"
    }"#;
    let node: AxNode = serde_json::from_str(json).unwrap();
    assert_eq!(node.role.as_deref(), Some("button"));
    assert_eq!(node.name.as_deref(), Some("Place order"));
    assert_eq!(node.backend_dom_node_id, Some(11));
    assert_eq!(node.frame_id.as_deref(), Some("frame-1"));
    assert!(!node.ignored);
}

#[test]
fn test_ax_node_missing_fields_default() {
    let node: AxNode = serde_json::from_str("{}").unwrap();
    assert!(node.role.is_none());
    assert!(node.name.is_none());
    assert!(node.backend_dom_node_id.is_none());
    assert!(!node.ignored);
}

#[test]
fn test_ax_node_serialize_round_trip() {
    let node = AxNode {
        role: Some("link".to_string()),
        backend_dom_node_id: Some(7),
        ..Default::default()
    };
    let json = serde_json::to_string(&node).unwrap();
    assert!(json.contains("backendDOMNodeId"));
    let back: AxNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back.backend_dom_node_id, Some(7));
}

#[test]
fn test_ax_snapshot_from_value() {
    let snapshot = AxSnapshot::from_value(json!({
        "nodes": [
            {"role": "button", "name": "Save", "backendDOMNodeId": 3},
            {"ignored": true}
        ]
    }))
    .unwrap();
    assert_eq!(snapshot.nodes.len(), 2);
    assert!(snapshot.nodes[1].ignored);
}

#[test]
fn test_ax_snapshot_from_value_rejects_broken_envelope() {
    let result = AxSnapshot::from_value(json!({"nodes": "not-a-list"}));
    assert!(matches!(result, Err(SnapshotError::Deserialization(_))));
}

#[test]
fn test_described_node_deserialize() {
    let json = r#"{
        "node": {
            "nodeId": 5,
            "backendNodeId": 11,
            "localName": "button",
            "attributes": ["id", "place-order"]
        }
    }"#;
    let description: NodeDescription = serde_json::from_str(json).unwrap();
    let node = description.node.unwrap();
    assert_eq!(node.node_id, Some(5));
    assert_eq!(node.backend_node_id, Some(11));
    assert_eq!(node.local_name.as_deref(), Some("button"));
    assert_eq!(node.attributes.unwrap().len(), 2);
}

#[test]
fn test_decode_descriptions_lenient() {
    let values = vec![
        json!({"node": {"nodeId": 1, "backendNodeId": 10}}),
        json!({"node": {"nodeId": "broken"}}),
        json!(42),
    ];
    let decoded = decode_descriptions(&values);
    assert_eq!(decoded.len(), 3);
    assert!(decoded[0].node.is_some());
    assert!(decoded[1].node.is_none());
    assert!(decoded[2].node.is_none());
}

#[test]
fn test_dom_document_from_bare_value() {
    let document = DomDocument::from_value(json!({
        "root": {"nodeId": 1, "nodeName": "HTML", "nodeType": 1}
    }))
    .unwrap();
    assert_eq!(document.root.node_id, 1);
    assert_eq!(document.root.node_name.as_deref(), Some("HTML"));
}

#[test]
fn test_dom_document_from_enveloped_value() {
    let document = DomDocument::from_value(json!({
        "document": {
            "root": {
                "nodeId": 1,
                "children": [{"nodeId": 2, "localName": "body"}]
            }
        }
    }))
    .unwrap();
    assert_eq!(document.root.children.as_ref().unwrap().len(), 1);
}

#[test]
fn test_dom_document_from_value_rejects_non_object() {
    let result = DomDocument::from_value(json!([1, 2, 3]));
    assert!(matches!(
        result,
        Err(SnapshotError::UnexpectedShape { .. })
    ));
}

#[test]
fn test_dom_node_type_optional() {
    let node: DomNode = serde_json::from_str(r#"{"nodeId": 9}"#).unwrap();
    assert_eq!(node.node_id, 9);
    assert!(node.node_type.is_none());
    assert!(node.children.is_none());
}
