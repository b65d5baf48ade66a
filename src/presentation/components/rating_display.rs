use leptos::ev;
use web_sys::Element;

use crate::application::{MountOutcome, PageComponent};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::page::rating_display_text;
use crate::event_utils::{EventSubscription, listen};
use crate::infrastructure::dom;

pub const DISPLAY_CLASSES: &str = "ms-3 text-warning fw-bold rating-stars";

/// Star row mirrored next to the review form's rating control.
pub struct RatingDisplay {
    input_id: String,
    display: Option<Element>,
    subscription: Option<EventSubscription>,
}

impl RatingDisplay {
    pub fn new(input_id: impl Into<String>) -> Self {
        Self { input_id: input_id.into(), display: None, subscription: None }
    }
}

fn refresh(input: &Element, display: &Element) {
    let text = rating_display_text(dom::control_value(input).as_deref());
    display.set_text_content(Some(&text));
}

impl PageComponent for RatingDisplay {
    fn name(&self) -> &'static str {
        "rating-display"
    }

    fn mount(&mut self) -> AppResult<MountOutcome> {
        let document = dom::document()?;
        let Some(input) = document.get_element_by_id(&self.input_id) else {
            return Ok(MountOutcome::Absent);
        };

        let display = document
            .create_element("span")
            .map_err(|e| AppError::browser("createElement(span)", e))?;
        display.set_class_name(DISPLAY_CLASSES);
        dom::insert_after(&input, &display)?;
        self.display = Some(display.clone());

        let (change_input, change_display) = (input.clone(), display.clone());
        self.subscription = Some(listen(&input, ev::change, move |_| {
            refresh(&change_input, &change_display);
        })?);

        refresh(&input, &display);
        Ok(MountOutcome::Mounted)
    }

    fn dispose(&mut self) {
        self.subscription = None;
        if let Some(display) = self.display.take() {
            display.remove();
        }
    }
}
