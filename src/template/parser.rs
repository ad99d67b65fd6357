use crate::template::TemplateError;

/// A parsed template element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Variable(String),
    Section {
        name: String,
        inverted: bool,
        children: Vec<Node>,
    },
}

struct OpenSection {
    name: String,
    inverted: bool,
    children: Vec<Node>,
}

/// Parse template source into a node tree.
///
/// Tags are `{{name}}`, `{{#name}}`, `{{^name}}`, `{{/name}}` and `{{! comment }}`.
/// Whitespace inside the braces is ignored.
pub fn parse(source: &str) -> Result<Vec<Node>, TemplateError> {
    let mut root = Vec::new();
    let mut open: Vec<OpenSection> = Vec::new();
    let mut rest = source;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            push(&mut root, &mut open, Node::Text(rest[..start].to_string()));
        }

        let inner = &rest[start + 2..];
        let end = inner
            .find("}}")
            .ok_or(TemplateError::UnclosedTag(offset + start))?;
        let tag = inner[..end].trim();

        match tag.chars().next() {
            None => return Err(TemplateError::EmptyTag(offset + start)),
            Some('!') => {}
            Some(marker @ ('#' | '^')) => {
                let name = section_name(tag, offset + start)?;
                open.push(OpenSection {
                    name,
                    inverted: marker == '^',
                    children: Vec::new(),
                });
            }
            Some('/') => {
                let name = section_name(tag, offset + start)?;
                let section = open
                    .pop()
                    .ok_or_else(|| TemplateError::UnexpectedClose(name.clone()))?;
                if section.name != name {
                    return Err(TemplateError::MismatchedClose {
                        expected: section.name,
                        found: name,
                    });
                }
                push(
                    &mut root,
                    &mut open,
                    Node::Section {
                        name: section.name,
                        inverted: section.inverted,
                        children: section.children,
                    },
                );
            }
            Some(_) => push(&mut root, &mut open, Node::Variable(tag.to_string())),
        }

        let consumed = start + 2 + end + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if !rest.is_empty() {
        push(&mut root, &mut open, Node::Text(rest.to_string()));
    }

    if let Some(section) = open.pop() {
        return Err(TemplateError::UnclosedSection(section.name));
    }

    Ok(root)
}

fn push(root: &mut Vec<Node>, open: &mut [OpenSection], node: Node) {
    match open.last_mut() {
        Some(section) => section.children.push(node),
        None => root.push(node),
    }
}

fn section_name(tag: &str, offset: usize) -> Result<String, TemplateError> {
    let name = tag[1..].trim();
    if name.is_empty() {
        Err(TemplateError::EmptyTag(offset))
    } else {
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    fn var(s: &str) -> Node {
        Node::Variable(s.to_string())
    }

    #[test]
    fn test_parse_plain_text() {
        assert_eq!(parse("no tags here").unwrap(), vec![text("no tags here")]);
    }

    #[test]
    fn test_parse_variable_with_spaces() {
        assert_eq!(
            parse("v{{ version }}!").unwrap(),
            vec![text("v"), var("version"), text("!")]
        );
    }

    #[test]
    fn test_parse_nested_sections() {
        let nodes = parse("{{#sections}}{{^changes}}none{{/changes}}{{/sections}}").unwrap();
        assert_eq!(
            nodes,
            vec![Node::Section {
                name: "sections".to_string(),
                inverted: false,
                children: vec![Node::Section {
                    name: "changes".to_string(),
                    inverted: true,
                    children: vec![text("none")],
                }],
            }]
        );
    }

    #[test]
    fn test_parse_comment_is_dropped() {
        assert_eq!(parse("a{{! ignored }}b").unwrap(), vec![text("a"), text("b")]);
    }

    #[test]
    fn test_parse_unclosed_tag() {
        assert_eq!(parse("abc {{version").unwrap_err(), TemplateError::UnclosedTag(4));
    }

    #[test]
    fn test_parse_empty_tag() {
        assert_eq!(parse("{{ }}").unwrap_err(), TemplateError::EmptyTag(0));
        assert_eq!(parse("{{#}}").unwrap_err(), TemplateError::EmptyTag(0));
    }

    #[test]
    fn test_parse_unclosed_section() {
        assert_eq!(
            parse("{{#sections}}body").unwrap_err(),
            TemplateError::UnclosedSection("sections".to_string())
        );
    }

    #[test]
    fn test_parse_mismatched_close() {
        assert_eq!(
            parse("{{#sections}}{{/changes}}").unwrap_err(),
            TemplateError::MismatchedClose {
                expected: "sections".to_string(),
                found: "changes".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_unexpected_close() {
        assert_eq!(
            parse("text{{/sections}}").unwrap_err(),
            TemplateError::UnexpectedClose("sections".to_string())
        );
    }
}
