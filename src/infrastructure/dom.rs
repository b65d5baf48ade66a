//! Thin fallible wrappers over the browser DOM.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

use crate::domain::attributes::AttributeSource;
use crate::domain::errors::{AppError, AppResult};

pub fn window() -> AppResult<Window> {
    web_sys::window().ok_or_else(|| AppError::BrowserApi("Window not available".to_string()))
}

pub fn document() -> AppResult<Document> {
    window()?
        .document()
        .ok_or_else(|| AppError::BrowserApi("Document not available".to_string()))
}

/// Nearest ancestor of `element` (itself included) carrying `marker`.
pub fn closest_with_attribute(element: &Element, marker: &str) -> AppResult<Option<Element>> {
    element
        .closest(&format!("[{}]", marker))
        .map_err(|e| AppError::browser("closest", e))
}

/// Resolve a chart target by id and the data container around it.
/// `None` when either is missing from the page.
pub fn locate_bound_target(target_id: &str, marker: &str) -> AppResult<Option<(Element, Element)>> {
    let document = document()?;
    let Some(target) = document.get_element_by_id(target_id) else {
        return Ok(None);
    };
    Ok(closest_with_attribute(&target, marker)?.map(|container| (target, container)))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> AppResult<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| AppError::browser(&format!("querySelectorAll({})", selector), e))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn class_names(element: &Element) -> Vec<String> {
    element
        .class_name()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn set_display(element: &Element, value: &str) -> AppResult<()> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| AppError::BrowserApi("element has no style".to_string()))?;
    html.style()
        .set_property("display", value)
        .map_err(|e| AppError::browser("style.display", e))
}

/// Current value of a form control (select, input, or anything with a
/// `value` attribute).
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else {
        element.get_attribute("value")
    }
}

/// Insert `node` right after `reference` under the same parent.
pub fn insert_after(reference: &Element, node: &Element) -> AppResult<()> {
    let parent = reference
        .parent_node()
        .ok_or_else(|| AppError::BrowserApi("element is detached".to_string()))?;
    parent
        .insert_before(node, reference.next_sibling().as_ref())
        .map(|_| ())
        .map_err(|e| AppError::browser("insertBefore", e))
}

/// Attribute view over a DOM element.
pub struct ElementAttributes<'a>(&'a Element);

impl<'a> ElementAttributes<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self(element)
    }
}

impl AttributeSource for ElementAttributes<'_> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}
