//! Server-rendered markup to elements.
//!
//! Fragments are parsed the way a browser parses `innerHTML`: in the
//! context of the element they are swapped into. Table parts only survive
//! inside their table ancestry, so a fragment bound for a `tr` is parsed
//! inside `<table><tbody><tr>`.

use scraper::{ElementRef, Html, Node};

use crate::element::{Content, Element, InputKind};

/// Wrapper tags a fragment needs so the parser keeps it, outermost first.
fn context_path(context: &str) -> &'static [&'static str] {
    match context.to_ascii_lowercase().as_str() {
        "table" => &["table"],
        "tbody" => &["table", "tbody"],
        "thead" => &["table", "thead"],
        "tfoot" => &["table", "tfoot"],
        "tr" => &["table", "tbody", "tr"],
        "td" => &["table", "tbody", "tr", "td"],
        "th" => &["table", "tbody", "tr", "th"],
        _ => &[],
    }
}

/// Parse `markup` as the new content of an element with tag `context`.
pub fn parse_fragment(markup: &str, context: &str) -> Content {
    let path = context_path(context);

    let mut wrapped = String::with_capacity(markup.len() + path.len() * 12);
    for tag in path {
        wrapped.push_str(&format!("<{tag}>"));
    }
    wrapped.push_str(markup);
    for tag in path.iter().rev() {
        wrapped.push_str(&format!("</{tag}>"));
    }

    let html = Html::parse_fragment(&wrapped);
    let mut container = html.root_element();
    for tag in path {
        let next = container
            .children()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == *tag);
        match next {
            Some(el) => container = el,
            None => {
                log::debug!("[html] fragment for <{context}> lost its <{tag}> wrapper");
                return Content::None;
            }
        }
    }
    content_of(container)
}

fn content_of(parent: ElementRef<'_>) -> Content {
    let mut children = Vec::new();
    let mut texts = Vec::new();
    for node in parent.children() {
        match node.value() {
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(node) {
                    children.push(Some(convert(el)));
                }
            }
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    texts.push(text.to_string());
                    children.push(None);
                }
            }
            _ => {}
        }
    }

    if children.iter().all(Option::is_none) {
        return if texts.is_empty() {
            Content::None
        } else {
            Content::Text(texts.join(" "))
        };
    }

    // Mixed content: text runs become text elements in place.
    let mut texts = texts.into_iter();
    Content::Children(
        children
            .into_iter()
            .filter_map(|child| child.or_else(|| texts.next().map(Element::text)))
            .collect(),
    )
}

fn convert(el: ElementRef<'_>) -> Element {
    let v = el.value();
    let tag = v.name();

    let mut out = Element::new(tag);
    if let Some(id) = v.attr("id") {
        out.id = id.to_string();
    }
    out.name = v.attr("name").map(str::to_string);
    for class in v.classes() {
        out.add_class(class);
    }
    for (key, value) in v.attrs() {
        if let Some(key) = key.strip_prefix("data-") {
            out.data.insert(key.to_string(), value.to_string());
        }
    }

    out.input = match tag {
        "input" => Some(match v.attr("type").map(str::to_ascii_lowercase).as_deref() {
            Some("checkbox") => InputKind::Checkbox,
            Some("hidden") => InputKind::Hidden,
            _ => InputKind::Text,
        }),
        "select" => Some(InputKind::Select),
        "textarea" => Some(InputKind::Text),
        _ => None,
    };
    out.value = v.attr("value").map(str::to_string);
    out.checked = v.attr("checked").is_some() || (tag == "option" && v.attr("selected").is_some());
    out.disabled = v.attr("disabled").is_some();
    out.hidden = v.attr("hidden").is_some()
        || v.attr("style").is_some_and(|style| {
            style.replace(' ', "").to_ascii_lowercase().contains("display:none")
        });

    out.content = content_of(el);
    match tag {
        "select" => out.value = selected_option(&out),
        "textarea" => out.value = out.text_content().map(str::to_string),
        _ => {}
    }
    out
}

/// Value of the selected option, else the first one.
fn selected_option(select: &Element) -> Option<String> {
    let options: Vec<&Element> = select
        .content
        .children()
        .iter()
        .filter(|child| child.tag == "option")
        .collect();
    let option = options
        .iter()
        .find(|option| option.checked)
        .or_else(|| options.first())?;
    option
        .value
        .clone()
        .or_else(|| option.text_content().map(str::to_string))
}
