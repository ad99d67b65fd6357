use serde_json::Value;

use crate::template::parser::Node;
use crate::template::TemplateError;

/// Render nodes against a stack of context frames, innermost last
pub fn render_nodes<'v>(
    nodes: &[Node],
    stack: &mut Vec<&'v Value>,
    out: &mut String,
) -> Result<(), TemplateError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Variable(name) => {
                let value = lookup(name, stack)?;
                write_value(value, out);
            }
            Node::Section {
                name,
                inverted,
                children,
            } => {
                let value = lookup(name, stack)?;

                if *inverted {
                    if !is_truthy(value) {
                        render_nodes(children, stack, out)?;
                    }
                    continue;
                }

                match value {
                    Value::Array(items) => {
                        for item in items {
                            stack.push(item);
                            render_nodes(children, stack, out)?;
                            stack.pop();
                        }
                    }
                    other if is_truthy(other) => {
                        stack.push(other);
                        render_nodes(children, stack, out)?;
                        stack.pop();
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

/// Resolve a dotted name, searching frames from innermost to outermost
fn lookup<'v>(name: &str, stack: &[&'v Value]) -> Result<&'v Value, TemplateError> {
    if name == "." {
        return stack
            .last()
            .copied()
            .ok_or_else(|| TemplateError::UnknownField(name.to_string()));
    }

    let mut segments = name.split('.');
    let head = segments.next().unwrap_or(name);

    let found = stack
        .iter()
        .rev()
        .copied()
        .find_map(|frame| frame.as_object().and_then(|map| map.get(head)));

    let mut value = found.ok_or_else(|| TemplateError::UnknownField(name.to_string()))?;
    for segment in segments {
        value = value
            .get(segment)
            .ok_or_else(|| TemplateError::UnknownField(name.to_string()))?;
    }

    Ok(value)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Number(_) | Value::Object(_) => true,
    }
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => {}
        Value::String(s) => out.push_str(s),
        other => out.push_str(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parser::parse;
    use serde_json::json;

    fn render(source: &str, context: Value) -> Result<String, TemplateError> {
        let nodes = parse(source)?;
        let mut out = String::new();
        render_nodes(&nodes, &mut vec![&context], &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_variable_types() {
        let out = render(
            "{{s}}|{{n}}|{{b}}|{{z}}",
            json!({"s": "text", "n": 3, "b": true, "z": null}),
        )
        .unwrap();
        assert_eq!(out, "text|3|true|");
    }

    #[test]
    fn test_dotted_lookup() {
        let out = render("{{release.version}}", json!({"release": {"version": "2.0"}})).unwrap();
        assert_eq!(out, "2.0");
    }

    #[test]
    fn test_array_section_iterates() {
        let out = render("{{#items}}[{{.}}]{{/items}}", json!({"items": ["a", "b"]})).unwrap();
        assert_eq!(out, "[a][b]");
    }

    #[test]
    fn test_outer_frame_visible_in_section() {
        let out = render(
            "{{#items}}{{name}}@{{version}} {{/items}}",
            json!({"version": "1.0", "items": [{"name": "x"}, {"name": "y"}]}),
        )
        .unwrap();
        assert_eq!(out, "x@1.0 y@1.0 ");
    }

    #[test]
    fn test_falsy_sections_skip() {
        let out = render(
            "{{#a}}A{{/a}}{{#b}}B{{/b}}{{#c}}C{{/c}}{{#d}}D{{/d}}",
            json!({"a": "", "b": [], "c": false, "d": null}),
        )
        .unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_inverted_section() {
        let out = render(
            "{{^items}}empty{{/items}}{{^name}}anon{{/name}}",
            json!({"items": [], "name": "set"}),
        )
        .unwrap();
        assert_eq!(out, "empty");
    }

    #[test]
    fn test_truthy_string_section_pushes_value() {
        let out = render("{{#from}}{{.}} - {{/from}}{{to}}", json!({"from": "v1", "to": "v2"}))
            .unwrap();
        assert_eq!(out, "v1 - v2");
    }

    #[test]
    fn test_unknown_field() {
        let err = render("{{missing}}", json!({"present": 1})).unwrap_err();
        assert_eq!(err, TemplateError::UnknownField("missing".to_string()));
    }

    #[test]
    fn test_unknown_nested_field() {
        let err = render("{{release.name}}", json!({"release": {"version": "1"}})).unwrap_err();
        assert_eq!(err, TemplateError::UnknownField("release.name".to_string()));
    }
}
