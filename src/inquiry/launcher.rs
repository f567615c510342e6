use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("the browser blocked the new window")]
    Blocked,
    #[error("no browser window available")]
    NoWindow,
    #[error("window.open failed: {0}")]
    Js(String),
}

/// Opens an external link in a new browsing context.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        let window = web_sys::window().ok_or(LaunchError::NoWindow)?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            // popup blockers hand back null instead of a window handle
            Ok(None) => Err(LaunchError::Blocked),
            Err(e) => Err(LaunchError::Js(format!("{:?}", e))),
        }
    }
}

/// Opens `url`, logging rather than propagating a failure. Used by the
/// one-tap enquiry buttons, which have no fallback UI of their own.
pub fn open_or_log(opener: &dyn LinkOpener, url: &str) -> bool {
    match opener.open(url) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Could not open {}: {}", url, e);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every URL and answers with a fixed outcome.
    pub struct RecordingOpener {
        pub opened: RefCell<Vec<String>>,
        outcome: Result<(), LaunchError>,
    }

    impl RecordingOpener {
        pub fn succeeding() -> Self {
            Self { opened: RefCell::new(Vec::new()), outcome: Ok(()) }
        }

        pub fn failing(error: LaunchError) -> Self {
            Self { opened: RefCell::new(Vec::new()), outcome: Err(error) }
        }
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), LaunchError> {
            self.opened.borrow_mut().push(url.to_string());
            self.outcome.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingOpener;
    use super::*;

    #[test]
    fn open_or_log_reports_outcome() {
        let ok = RecordingOpener::succeeding();
        assert!(open_or_log(&ok, "https://wa.me/1"));

        let blocked = RecordingOpener::failing(LaunchError::Blocked);
        assert!(!open_or_log(&blocked, "https://wa.me/1"));
        assert_eq!(blocked.opened.borrow().as_slice(), ["https://wa.me/1"]);
    }
}
