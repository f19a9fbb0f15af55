//! The live document: a body element tree plus the window state the
//! interaction layer reads (location and outer width).

use crate::element::{find_element, find_element_mut, find_path, Content, Element};
use crate::html;
use crate::query;

/// ID given to the document body.
pub const BODY_ID: &str = "body";

#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
    location: String,
    outer_width: u32,
}

impl Document {
    /// Create a document whose body holds `children`.
    pub fn new(children: impl IntoIterator<Item = Element>) -> Self {
        Self {
            body: Element::new("body").id(BODY_ID).children(children),
            location: String::new(),
            outer_width: 0,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_outer_width(mut self, width: u32) -> Self {
        self.outer_width = width;
        self
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn outer_width(&self) -> u32 {
        self.outer_width
    }

    pub fn set_outer_width(&mut self, width: u32) {
        self.outer_width = width;
    }

    // Lookup

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.body, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.body, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.get(id).is_some_and(|el| el.checked)
    }

    pub fn ids_by_class(&self, class: &str) -> Vec<String> {
        query::ids_by_class(&self.body, class)
    }

    pub fn ids_by_name(&self, name: &str) -> Vec<String> {
        query::ids_by_name(&self.body, name)
    }

    pub fn ids_by_tag(&self, tag: &str) -> Vec<String> {
        query::ids_by_tag(&self.body, tag)
    }

    pub fn first_by_class(&self, class: &str) -> Option<String> {
        query::first_by_class(&self.body, class)
    }

    // Tree navigation

    /// Ancestors of `id`, nearest first. Does not include the element itself.
    pub fn ancestors(&self, id: &str) -> Vec<&Element> {
        let mut path = find_path(&self.body, id);
        path.pop();
        path.reverse();
        path
    }

    pub fn parent(&self, id: &str) -> Option<&Element> {
        self.ancestors(id).into_iter().next()
    }

    /// The element itself or its nearest ancestor with the given tag.
    pub fn closest_tag(&self, id: &str, tag: &str) -> Option<&Element> {
        let mut path = find_path(&self.body, id);
        path.reverse();
        path.into_iter().find(|el| el.tag.eq_ignore_ascii_case(tag))
    }

    /// Number of element siblings preceding `id` within its parent.
    pub fn sibling_index(&self, id: &str) -> Option<usize> {
        self.parent(id)?
            .content
            .children()
            .iter()
            .position(|child| child.id == id)
    }

    pub fn last_child(&self, id: &str) -> Option<&Element> {
        self.get(id)?.content.children().last()
    }

    pub fn form_values(&self, id: &str) -> Vec<(String, String)> {
        self.get(id).map(query::form_values).unwrap_or_default()
    }

    // Mutation

    /// Apply the default action of clicking `id`: a checkbox flips its
    /// checked state. Returns false if the element is missing or disabled,
    /// in which case no click event should be dispatched.
    pub fn activate(&mut self, id: &str) -> bool {
        let Some(el) = self.get_mut(id) else {
            log::debug!("[document] click on unknown element {id}");
            return false;
        };
        if el.disabled {
            log::debug!("[document] click on disabled element {id} ignored");
            return false;
        }
        if el.is_checkbox() {
            el.checked = !el.checked;
        }
        true
    }

    pub fn append_to_body(&mut self, element: Element) {
        let content = std::mem::take(&mut self.body.content);
        self.body.content = content_with(content, element);
    }

    /// Replace the content of `target` with parsed server markup, using the
    /// target's tag as parsing context. Returns false if the target is gone.
    pub fn swap_html(&mut self, target: &str, markup: &str) -> bool {
        let Some(context) = self.get(target).map(|el| el.tag.clone()) else {
            return false;
        };
        self.swap_inner(target, html::parse_fragment(markup, &context))
    }

    /// Replace the content of `target`. Returns false if the target is gone.
    pub fn swap_inner(&mut self, target: &str, content: Content) -> bool {
        match self.get_mut(target) {
            Some(el) => {
                el.content = content;
                true
            }
            None => false,
        }
    }
}

fn content_with(content: Content, element: Element) -> Content {
    match content {
        Content::Children(mut children) => {
            children.push(element);
            Content::Children(children)
        }
        _ => Content::Children(vec![element]),
    }
}
