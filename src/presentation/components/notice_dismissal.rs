use gloo::timers::callback::Timeout;
use web_sys::Element;

use crate::application::{MountOutcome, PageComponent};
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::domain::page::{DismissStrategy, NoticePolicy};
use crate::infrastructure::{bootstrap, dom};
use crate::{log_debug, log_warn};

/// Hides informational notice banners a fixed delay after page load.
pub struct NoticeDismissal {
    selector: String,
    policy: NoticePolicy,
    delay_ms: u32,
    timers: Vec<Timeout>,
}

impl NoticeDismissal {
    pub fn new(selector: impl Into<String>, policy: NoticePolicy, delay_ms: u32) -> Self {
        Self { selector: selector.into(), policy, delay_ms, timers: Vec::new() }
    }

    pub fn scheduled(&self) -> usize {
        self.timers.len()
    }
}

fn dismiss(notice: &Element, strategy: DismissStrategy) {
    if strategy == DismissStrategy::ToolkitClose {
        match bootstrap::close_alert(notice) {
            Ok(()) => return,
            Err(e) => {
                log_debug!(LogComponent::Presentation("Notices"), "toolkit close unavailable: {}", e);
            }
        }
    }
    if let Err(e) = dom::set_display(notice, "none") {
        log_warn!(LogComponent::Presentation("Notices"), "could not hide notice: {}", e);
    }
}

impl PageComponent for NoticeDismissal {
    fn name(&self) -> &'static str {
        "notice-dismissal"
    }

    fn mount(&mut self) -> AppResult<MountOutcome> {
        let document = dom::document()?;
        let notices = dom::query_all(&document, &self.selector)?;
        if notices.is_empty() {
            return Ok(MountOutcome::Absent);
        }

        for notice in notices {
            let classes = dom::class_names(&notice);
            let classes: Vec<&str> = classes.iter().map(String::as_str).collect();
            let Some(strategy) = self.policy.dismissal_for(&classes) else {
                continue;
            };
            self.timers.push(Timeout::new(self.delay_ms, move || dismiss(&notice, strategy)));
        }

        log_debug!(
            LogComponent::Presentation("Notices"),
            "{} notice(s) will dismiss in {}ms",
            self.timers.len(),
            self.delay_ms
        );
        Ok(MountOutcome::Mounted)
    }

    fn dispose(&mut self) {
        // dropping a Timeout cancels it
        self.timers.clear();
    }
}
