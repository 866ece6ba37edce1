use jtree_core::{Node, NodeKind, Object};

// ============================================================================
// Construction and Kinds
// ============================================================================

#[test]
fn default_node_is_null() {
    assert_eq!(Node::default(), Node::Null);
}

#[test]
fn default_of_each_kind() {
    assert_eq!(Node::default_of(NodeKind::Object), Node::Object(Object::new()));
    assert_eq!(Node::default_of(NodeKind::Array), Node::Array(Vec::new()));
    assert_eq!(Node::default_of(NodeKind::String), Node::String(String::new()));
    assert_eq!(Node::default_of(NodeKind::Number), Node::Number(0.0));
    assert_eq!(Node::default_of(NodeKind::Bool), Node::Bool(false));
    assert_eq!(Node::default_of(NodeKind::Null), Node::Null);
    for kind in NodeKind::ALL {
        assert_eq!(Node::default_of(kind).kind(), kind);
    }
}

#[test]
fn from_conversions() {
    assert_eq!(Node::from(true), Node::Bool(true));
    assert_eq!(Node::from(2.5f32), Node::Number(2.5));
    assert_eq!(Node::from("x"), Node::String("x".into()));
    assert_eq!(Node::from(String::from("y")), Node::String("y".into()));
    assert_eq!(Node::from(vec![Node::Null]), Node::Array(vec![Node::Null]));
    assert_eq!(Node::from(()), Node::Null);
    assert!(Node::from(Object::new()).is_object());
}

#[test]
fn kind_names() {
    let names: Vec<&str> = NodeKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names, ["object", "array", "string", "number", "bool", "null"]);
    assert_eq!(NodeKind::Bool.to_string(), "bool");
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn predicates_match_kind() {
    let node = Node::from("s");
    assert!(node.is_string());
    assert!(!node.is_number() && !node.is_bool() && !node.is_null());
    assert!(!node.is_object() && !node.is_array());
}

#[test]
fn typed_accessors() {
    assert_eq!(Node::Number(1.5).as_number(), Some(1.5));
    assert_eq!(Node::Bool(true).as_bool(), Some(true));
    assert_eq!(Node::from("abc").as_str(), Some("abc"));
    assert_eq!(Node::Null.as_str(), None);
    assert_eq!(Node::Bool(true).as_number(), None);
    assert!(Node::array().as_array().is_some_and(Vec::is_empty));
    assert!(Node::object().as_object().is_some_and(Object::is_empty));
}

#[test]
fn get_and_at() {
    let object: Object = [("k", Node::Array(vec![Node::Number(1.0), Node::Number(2.0)]))]
        .into_iter()
        .collect();
    let root = Node::Object(object);
    assert_eq!(root.get("k").and_then(|n| n.at(1)), Some(&Node::Number(2.0)));
    assert_eq!(root.get("missing"), None);
    assert_eq!(root.at(0), None);
    assert_eq!(Node::Null.get("k"), None);
}

#[test]
fn mutable_accessors() {
    let mut root = Node::object();
    root.as_object_mut()
        .unwrap()
        .insert("items", Node::array());
    root.as_object_mut()
        .and_then(|o| o.get_mut("items"))
        .and_then(Node::as_array_mut)
        .unwrap()
        .push(Node::Bool(true));
    assert_eq!(root.get("items").and_then(|n| n.at(0)), Some(&Node::Bool(true)));
}

#[test]
fn into_conversions_hand_back_on_mismatch() {
    assert_eq!(Node::from("s").into_string(), Ok("s".to_string()));
    assert_eq!(Node::Null.into_string(), Err(Node::Null));
    assert_eq!(Node::array().into_array(), Ok(Vec::new()));
    assert_eq!(Node::Bool(true).into_object(), Err(Node::Bool(true)));
}

// ============================================================================
// Object
// ============================================================================

#[test]
fn object_insert_overwrites_in_place() {
    let mut object = Object::new();
    assert_eq!(object.insert("a", Node::Number(1.0)), None);
    assert_eq!(object.insert("b", Node::Number(2.0)), None);
    assert_eq!(object.insert("a", Node::Number(3.0)), Some(Node::Number(1.0)));
    assert_eq!(object.len(), 2);
    let entries: Vec<(&str, &Node)> = object.iter().collect();
    assert_eq!(entries, [("a", &Node::Number(3.0)), ("b", &Node::Number(2.0))]);
}

#[test]
fn object_try_insert_refuses_duplicates() {
    let mut object = Object::new();
    assert!(object.try_insert("a".into(), Node::Null).is_ok());
    let rejected = object.try_insert("a".into(), Node::Bool(true));
    assert_eq!(rejected, Err(("a".to_string(), Node::Bool(true))));
    assert_eq!(object.get("a"), Some(&Node::Null));
}

#[test]
fn object_remove_keeps_order_and_index() {
    let mut object: Object = [
        ("a", Node::Number(1.0)),
        ("b", Node::Number(2.0)),
        ("c", Node::Number(3.0)),
    ]
    .into_iter()
    .collect();
    assert_eq!(object.remove("a"), Some(Node::Number(1.0)));
    assert_eq!(object.remove("a"), None);
    assert_eq!(object.keys().collect::<Vec<_>>(), ["b", "c"]);
    assert_eq!(object.get("c"), Some(&Node::Number(3.0)));
    assert!(!object.contains_key("a"));
    object.insert("a", Node::Null);
    assert_eq!(object.keys().collect::<Vec<_>>(), ["b", "c", "a"]);
}

#[test]
fn object_equality_ignores_order() {
    let left: Object = [("x", Node::Null), ("y", Node::Bool(true))].into_iter().collect();
    let right: Object = [("y", Node::Bool(true)), ("x", Node::Null)].into_iter().collect();
    assert_eq!(left, right);
    let shorter: Object = [("x", Node::Null)].into_iter().collect();
    assert_ne!(left, shorter);
}

#[test]
fn object_into_iter_yields_owned_pairs() {
    let object: Object = [("k", Node::from("v"))].into_iter().collect();
    let pairs: Vec<(String, Node)> = object.into_iter().collect();
    assert_eq!(pairs, vec![("k".to_string(), Node::from("v"))]);
}

#[test]
fn values_iterates_in_order() {
    let object: Object = [("a", Node::Number(1.0)), ("b", Node::Number(2.0))]
        .into_iter()
        .collect();
    let values: Vec<f32> = object.values().filter_map(Node::as_number).collect();
    assert_eq!(values, [1.0, 2.0]);
}
