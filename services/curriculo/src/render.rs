//! Résumé rendering with stackable style decorators
//!
//! [`BaseResume`] renders the plain résumé. Each decorator wraps another
//! renderer and surrounds its output with one styled `<div>`, so the
//! customizations chosen in a session can be stacked in any order.

use crate::customization::{CustomizationKind, Customizations};
use crate::models::Resume;
use crate::views::{escape, resume_fragment};

/// Anything that can produce the résumé HTML
pub trait ResumeRenderer {
    fn render(&self) -> String;
}

impl<R: ResumeRenderer + ?Sized> ResumeRenderer for Box<R> {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// The résumé without customizations
pub struct BaseResume<'a> {
    resume: &'a Resume,
}

impl<'a> BaseResume<'a> {
    pub fn new(resume: &'a Resume) -> Self {
        Self { resume }
    }
}

impl ResumeRenderer for BaseResume<'_> {
    fn render(&self) -> String {
        resume_fragment(self.resume)
    }
}

fn styled(property: &str, value: &str, inner: String) -> String {
    format!("<div style='{}: {};'>{}</div>", property, escape(value), inner)
}

/// Sets the text color
pub struct ColorDecorator<R> {
    inner: R,
    color: String,
}

impl<R: ResumeRenderer> ColorDecorator<R> {
    pub fn new(inner: R, color: impl Into<String>) -> Self {
        Self {
            inner,
            color: color.into(),
        }
    }
}

impl<R: ResumeRenderer> ResumeRenderer for ColorDecorator<R> {
    fn render(&self) -> String {
        styled("color", &self.color, self.inner.render())
    }
}

/// Sets the font family
pub struct FontDecorator<R> {
    inner: R,
    font: String,
}

impl<R: ResumeRenderer> FontDecorator<R> {
    pub fn new(inner: R, font: impl Into<String>) -> Self {
        Self {
            inner,
            font: font.into(),
        }
    }
}

impl<R: ResumeRenderer> ResumeRenderer for FontDecorator<R> {
    fn render(&self) -> String {
        styled("font-family", &self.font, self.inner.render())
    }
}

/// Sets the font size
pub struct SizeDecorator<R> {
    inner: R,
    size: String,
}

impl<R: ResumeRenderer> SizeDecorator<R> {
    pub fn new(inner: R, size: impl Into<String>) -> Self {
        Self {
            inner,
            size: size.into(),
        }
    }
}

impl<R: ResumeRenderer> ResumeRenderer for SizeDecorator<R> {
    fn render(&self) -> String {
        styled("font-size", &self.size, self.inner.render())
    }
}

/// Wrap `base` with one decorator per customization.
///
/// The first customization ends up innermost and the last one outermost.
pub fn decorate<'a>(
    base: impl ResumeRenderer + 'a,
    customizations: &Customizations,
) -> Box<dyn ResumeRenderer + 'a> {
    customizations.iter().fold(
        Box::new(base) as Box<dyn ResumeRenderer + 'a>,
        |renderer, customization| -> Box<dyn ResumeRenderer + 'a> {
            let value = customization.value.as_str();
            match customization.kind {
                CustomizationKind::Color => Box::new(ColorDecorator::new(renderer, value)),
                CustomizationKind::Font => Box::new(FontDecorator::new(renderer, value)),
                CustomizationKind::Size => Box::new(SizeDecorator::new(renderer, value)),
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl ResumeRenderer for Fixed {
        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_decorators_nest() {
        let renderer = SizeDecorator::new(ColorDecorator::new(Fixed("cv"), "red"), "12px");
        assert_eq!(
            renderer.render(),
            "<div style='font-size: 12px;'><div style='color: red;'>cv</div></div>"
        );
    }

    #[test]
    fn test_decorate_follows_session_order() {
        let mut customizations = Customizations::default();
        customizations.apply(CustomizationKind::Font, "Arial").unwrap();
        customizations.apply(CustomizationKind::Color, "blue").unwrap();

        assert_eq!(
            decorate(Fixed("cv"), &customizations).render(),
            "<div style='color: blue;'><div style='font-family: Arial;'>cv</div></div>"
        );
    }

    #[test]
    fn test_decorate_without_customizations_is_base() {
        let resume = Resume::default();
        let base = BaseResume::new(&resume).render();
        assert_eq!(
            decorate(BaseResume::new(&resume), &Customizations::default()).render(),
            base
        );
    }

    #[test]
    fn test_decorator_escapes_value() {
        let renderer = FontDecorator::new(Fixed("cv"), "x'><script>");
        assert!(!renderer.render().contains("<script>"));
    }
}
