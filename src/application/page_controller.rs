use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, LogLevel, get_logger},
};
use crate::{log_debug, log_error, log_warn};

/// Result of mounting one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// The component attached itself to the page.
    Mounted,
    /// The page has no anchor for this component; nothing was done.
    Absent,
}

/// A page-lifetime UI component owned by the [`PageController`].
pub trait PageComponent {
    fn name(&self) -> &'static str;

    /// Attach to the current document. Called at most once.
    fn mount(&mut self) -> AppResult<MountOutcome>;

    /// Release listeners, timers and any nodes the component created.
    fn dispose(&mut self) {}
}

/// What happened during [`PageController::mount_all`].
#[derive(Debug, Default, PartialEq)]
pub struct MountReport {
    pub mounted: Vec<&'static str>,
    pub absent: Vec<&'static str>,
    pub failed: Vec<(&'static str, AppError)>,
}

impl MountReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Owns every component for one page, from load until navigation.
///
/// Components mount in registration order. A failing component is logged
/// and skipped; it never stops the ones after it.
pub struct PageController {
    components: Vec<Box<dyn PageComponent>>,
    report: Option<MountReport>,
    disposed: bool,
}

impl PageController {
    pub fn new(components: Vec<Box<dyn PageComponent>>) -> Self {
        Self { components, report: None, disposed: false }
    }

    /// Mount every component once. A disposed controller mounts nothing.
    pub fn mount_all(&mut self) -> &MountReport {
        if self.report.is_none() {
            let report = if self.disposed {
                log_warn!(LogComponent::Application("PageController"), "mount after dispose ignored");
                MountReport::default()
            } else {
                self.mount_components()
            };
            self.report = Some(report);
        }
        self.report.get_or_insert_with(MountReport::default)
    }

    fn mount_components(&mut self) -> MountReport {
        let mut report = MountReport::default();
        for component in self.components.iter_mut() {
            let name = component.name();
            match component.mount() {
                Ok(MountOutcome::Mounted) => {
                    log_debug!(LogComponent::Application("PageController"), "mounted {}", name);
                    report.mounted.push(name);
                }
                Ok(MountOutcome::Absent) => {
                    log_debug!(LogComponent::Application("PageController"), "{} has no anchor on this page", name);
                    report.absent.push(name);
                }
                Err(error) => {
                    log_error!(LogComponent::Application("PageController"), "{} failed to mount: {}", name, error);
                    // Release whatever the component set up before failing.
                    component.dispose();
                    report.failed.push((name, error));
                }
            }
        }

        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Application("PageController"),
            "page mounted",
            &format!(
                "{{\"mounted\":{},\"absent\":{},\"failed\":{}}}",
                report.mounted.len(),
                report.absent.len(),
                report.failed.len()
            ),
        );
        report
    }

    pub fn report(&self) -> Option<&MountReport> {
        self.report.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Dispose components in reverse mount order. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for component in self.components.iter_mut().rev() {
            component.dispose();
        }
        log_debug!(LogComponent::Application("PageController"), "page disposed");
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        self.dispose();
    }
}
