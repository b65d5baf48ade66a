use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement};

use crate::application::{MountOutcome, PageComponent};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::page::is_current_page;
use crate::infrastructure::dom;

const ACTIVE_CLASS: &str = "active";
const ARIA_CURRENT: &str = "aria-current";

/// Marks navigation links that point at the current page.
pub struct ActiveLinks {
    selector: String,
    /// Links this component marked, so dispose leaves server-rendered
    /// marks alone.
    marked: Vec<Element>,
}

impl ActiveLinks {
    pub fn new(selector: impl Into<String>) -> Self {
        Self { selector: selector.into(), marked: Vec::new() }
    }

    pub fn marked(&self) -> usize {
        self.marked.len()
    }
}

impl PageComponent for ActiveLinks {
    fn name(&self) -> &'static str {
        "active-links"
    }

    fn mount(&mut self) -> AppResult<MountOutcome> {
        let window = dom::window()?;
        let page_href = window
            .location()
            .href()
            .map_err(|e| AppError::browser("location.href", e))?;
        let links = dom::query_all(&dom::document()?, &self.selector)?;
        if links.is_empty() {
            return Ok(MountOutcome::Absent);
        }

        for link in links {
            let Some(anchor) = link.dyn_ref::<HtmlAnchorElement>() else {
                continue;
            };
            if !is_current_page(&anchor.href(), &page_href) {
                continue;
            }
            let classes = link.class_list();
            if classes.contains(ACTIVE_CLASS) {
                link.set_attribute(ARIA_CURRENT, "page")
                    .map_err(|e| AppError::browser("setAttribute", e))?;
                continue;
            }
            classes
                .add_1(ACTIVE_CLASS)
                .map_err(|e| AppError::browser("classList.add", e))?;
            link.set_attribute(ARIA_CURRENT, "page")
                .map_err(|e| AppError::browser("setAttribute", e))?;
            self.marked.push(link);
        }
        Ok(MountOutcome::Mounted)
    }

    fn dispose(&mut self) {
        for link in self.marked.drain(..) {
            let _ = link.class_list().remove_1(ACTIVE_CLASS);
            let _ = link.remove_attribute(ARIA_CURRENT);
        }
    }
}
