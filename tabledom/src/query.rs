//! Tree queries. All results are in document order and are recomputed on
//! every call, so they stay correct after fragments are swapped in.

use crate::element::{Content, Element, InputKind};

/// Collect the IDs of all elements matching `pred`, in document order.
pub fn collect_ids(root: &Element, pred: impl Fn(&Element) -> bool) -> Vec<String> {
    let mut result = Vec::new();
    collect_recursive(root, &pred, &mut result);
    result
}

fn collect_recursive(element: &Element, pred: &impl Fn(&Element) -> bool, result: &mut Vec<String>) {
    if pred(element) {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_recursive(child, pred, result);
        }
    }
}

/// IDs of all elements carrying `class`.
pub fn ids_by_class(root: &Element, class: &str) -> Vec<String> {
    collect_ids(root, |el| el.has_class(class))
}

/// IDs of all elements whose control name is `name`.
pub fn ids_by_name(root: &Element, name: &str) -> Vec<String> {
    collect_ids(root, |el| el.name.as_deref() == Some(name))
}

/// IDs of all elements with the given tag.
pub fn ids_by_tag(root: &Element, tag: &str) -> Vec<String> {
    collect_ids(root, |el| el.tag.eq_ignore_ascii_case(tag))
}

/// ID of the first element carrying `class`.
pub fn first_by_class(root: &Element, class: &str) -> Option<String> {
    if root.has_class(class) {
        return Some(root.id.clone());
    }
    root.content
        .children()
        .iter()
        .find_map(|child| first_by_class(child, class))
}

/// Name/value pairs of every named form control inside `element`,
/// following form submission rules: unchecked checkboxes and disabled
/// controls are skipped, a checked checkbox without a value submits `on`.
pub fn form_values(element: &Element) -> Vec<(String, String)> {
    let mut values = Vec::new();
    collect_form_values(element, &mut values);
    values
}

fn collect_form_values(element: &Element, values: &mut Vec<(String, String)>) {
    if let (Some(kind), Some(name)) = (element.input, &element.name) {
        if !element.disabled {
            match kind {
                InputKind::Checkbox => {
                    if element.checked {
                        let value = element.value.clone().unwrap_or_else(|| "on".to_string());
                        values.push((name.clone(), value));
                    }
                }
                InputKind::Text | InputKind::Hidden | InputKind::Select => {
                    values.push((name.clone(), element.value.clone().unwrap_or_default()));
                }
            }
        }
    }
    for child in element.content.children() {
        collect_form_values(child, values);
    }
}
