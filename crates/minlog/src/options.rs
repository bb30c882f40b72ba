use std::error::Error;

/// Optional fields attached to a single log call.
///
/// ```
/// use minlog::LogOptions;
///
/// let failure = std::io::Error::other("disk full");
/// let options = LogOptions::new().with_category("storage").with_error(&failure);
/// assert_eq!(options.category, Some("storage"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions<'a> {
    /// Short label prefixed to the line as `"<category>: "`. Empty means absent.
    pub category: Option<&'a str>,
    /// Failure passed through to the sink untouched.
    pub error: Option<&'a (dyn Error + 'static)>,
}

impl<'a> LogOptions<'a> {
    pub const fn new() -> Self {
        Self { category: None, error: None }
    }

    pub fn with_category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_error(mut self, error: &'a (dyn Error + 'static)) -> Self {
        self.error = Some(error);
        self
    }
}
