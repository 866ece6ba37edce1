use jtree_core::{render, render_into, Node, Object};

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn render_null() {
    assert_eq!(render(&Node::Null), "null");
}

#[test]
fn render_bools() {
    assert_eq!(render(&Node::Bool(true)), "true");
    assert_eq!(render(&Node::Bool(false)), "false");
}

#[test]
fn render_integer_valued_numbers() {
    assert_eq!(render(&Node::Number(42.0)), "42");
    assert_eq!(render(&Node::Number(-200.0)), "-200");
    assert_eq!(render(&Node::Number(0.0)), "0");
}

#[test]
fn render_fractional_numbers() {
    assert_eq!(render(&Node::Number(1.5)), "1.5");
    assert_eq!(render(&Node::Number(-0.25)), "-0.25");
    assert_eq!(render(&Node::Number(0.1)), "0.1");
}

#[test]
fn render_non_finite_numbers_as_null() {
    assert_eq!(render(&Node::Number(f32::INFINITY)), "null");
    assert_eq!(render(&Node::Number(f32::NEG_INFINITY)), "null");
    assert_eq!(render(&Node::Number(f32::NAN)), "null");
}

#[test]
fn render_plain_string() {
    assert_eq!(render(&Node::from("hello")), r#""hello""#);
    assert_eq!(render(&Node::from("")), r#""""#);
}

#[test]
fn render_string_escapes_reserved_characters() {
    assert_eq!(render(&Node::from("say \"hi\"")), r#""say \"hi\"""#);
    assert_eq!(render(&Node::from("a\\b")), r#""a\\b""#);
    assert_eq!(render(&Node::from("l1\nl2\tx\r")), r#""l1\nl2\tx\r""#);
    assert_eq!(render(&Node::from("\u{8}\u{c}")), r#""\b\f""#);
    assert_eq!(render(&Node::from("\u{1}\u{1f}")), r#""\u0001\u001f""#);
}

#[test]
fn render_string_keeps_non_ascii_and_slash() {
    assert_eq!(render(&Node::from("caf\u{e9}/\u{1f600}")), "\"caf\u{e9}/\u{1f600}\"");
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn render_empty_containers() {
    assert_eq!(render(&Node::object()), "{ }");
    assert_eq!(render(&Node::array()), "[ ]");
}

#[test]
fn render_array() {
    let node = Node::Array(vec![Node::Number(1.0), Node::from("two"), Node::Null]);
    assert_eq!(render(&node), r#"[ 1, "two", null ]"#);
}

#[test]
fn render_object_in_insertion_order() {
    let mut object = Object::new();
    object.insert("b", Node::Bool(true));
    object.insert("a", Node::Number(2.5));
    assert_eq!(render(&Node::Object(object)), r#"{ "b" : true, "a" : 2.5 }"#);
}

#[test]
fn render_escapes_object_keys() {
    let object: Object = [("a\"b", Node::Null)].into_iter().collect();
    assert_eq!(render(&Node::Object(object)), r#"{ "a\"b" : null }"#);
}

#[test]
fn render_nested_structure() {
    let inner: Object = [("list", Node::Array(vec![Node::array(), Node::object()]))]
        .into_iter()
        .collect();
    let node = Node::Array(vec![Node::Object(inner)]);
    assert_eq!(render(&node), r#"[ { "list" : [ [ ], { } ] } ]"#);
}

// ============================================================================
// Entry Points
// ============================================================================

#[test]
fn display_and_render_agree() {
    let node = Node::Array(vec![Node::Bool(false), Node::Number(3.5)]);
    assert_eq!(node.to_string(), render(&node));
    assert_eq!(node.render(), "[ false, 3.5 ]");
}

#[test]
fn render_into_appends() {
    let mut out = String::from("value = ");
    render_into(&Node::Number(7.0), &mut out);
    assert_eq!(out, "value = 7");
}
