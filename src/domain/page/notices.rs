/// Class marking a banner the host toolkit animates out.
pub const FADE_CLASS: &str = "fade";

/// How an expired notice banner leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissStrategy {
    /// Let the UI toolkit run its close transition.
    ToolkitClose,
    /// Hide the element immediately.
    Hide,
}

/// Decides which notice banners dismiss themselves and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticePolicy {
    persistent_classes: Vec<String>,
}

impl NoticePolicy {
    pub fn new(persistent_classes: Vec<String>) -> Self {
        Self { persistent_classes }
    }

    /// Banners carrying any persistent class stay until the user closes them.
    pub fn is_persistent<'a>(&self, classes: impl IntoIterator<Item = &'a str>) -> bool {
        classes
            .into_iter()
            .any(|class| self.persistent_classes.iter().any(|p| p == class))
    }

    /// `None` for persistent banners.
    pub fn dismissal_for<'a>(&self, classes: &[&'a str]) -> Option<DismissStrategy> {
        if self.is_persistent(classes.iter().copied()) {
            return None;
        }
        if classes.contains(&FADE_CLASS) {
            Some(DismissStrategy::ToolkitClose)
        } else {
            Some(DismissStrategy::Hide)
        }
    }
}

impl Default for NoticePolicy {
    fn default() -> Self {
        Self::new(vec!["alert-danger".to_string(), "alert-warning".to_string()])
    }
}
