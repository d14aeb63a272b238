use std::{borrow::Cow, fmt};

/// Content shown on the track behind the indicator.
///
/// The control never draws the label itself; it hands the label to the
/// host's renderer inside [`crate::render::LabelNode`] and only asks it for
/// the text exposed to assistive technologies.
pub trait SlideLabel: Send + Sync {
    /// Text announced by assistive technologies.
    fn accessibility_text(&self) -> Cow<'_, str>;
}

impl SlideLabel for String {
    fn accessibility_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SlideLabel for &'static str {
    fn accessibility_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

/// Values a custom label can react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScope {
    /// Fraction of the travel covered by the indicator, in `[0, 1]`.
    pub progress: f32,
    /// Opacity the control applies to the label.
    pub opacity: f32,
    /// Whether the control is enabled.
    pub enabled: bool,
}

/// A label produced by a function instead of fixed text.
///
/// ```
/// use slide_confirm::{CustomLabel, LabelScope, SlideLabel};
///
/// let label = CustomLabel::new("Slide to pay", |scope: &LabelScope| {
///     format!("Slide to pay ({:.0}%)", scope.progress * 100.0)
/// });
/// let scope = LabelScope {
///     progress: 0.5,
///     opacity: 0.5,
///     enabled: true,
/// };
/// assert_eq!(label.build(&scope), "Slide to pay (50%)");
/// assert_eq!(label.accessibility_text(), "Slide to pay");
/// ```
pub struct CustomLabel<F> {
    accessibility_text: String,
    build: F,
}

impl<F, R> CustomLabel<F>
where
    F: Fn(&LabelScope) -> R + Send + Sync,
{
    /// Creates a custom label with the text announced to assistive
    /// technologies.
    pub fn new(accessibility_text: impl Into<String>, build: F) -> Self {
        Self {
            accessibility_text: accessibility_text.into(),
            build,
        }
    }

    /// Produces the label content for `scope`.
    pub fn build(&self, scope: &LabelScope) -> R {
        (self.build)(scope)
    }
}

impl<F: Send + Sync> SlideLabel for CustomLabel<F> {
    fn accessibility_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.accessibility_text)
    }
}

impl<F> fmt::Debug for CustomLabel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomLabel")
            .field("accessibility_text", &self.accessibility_text)
            .finish_non_exhaustive()
    }
}
