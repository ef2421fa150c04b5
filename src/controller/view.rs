//! Render targets for the controller.
//!
//! The view is write-only from the controller's side: it receives the text
//! to show and never reports it back.

/// Anything that can show the calculator's display text.
pub trait View {
    fn render(&mut self, text: &str);
}

/// A view that shows nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Headless;

impl View for Headless {
    fn render(&mut self, _text: &str) {}
}

/// Records every rendered frame in order.
impl View for Vec<String> {
    fn render(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Forwards each frame to a closure.
///
/// ```rust
/// use calcmind::controller::{Callback, Controller};
///
/// let mut shown = String::new();
/// {
///     let mut controller = Controller::with_view(Callback(|text: &str| {
///         shown = text.to_string();
///     }));
///     controller.feed(["4", "2"]).unwrap();
/// }
/// assert_eq!(shown, "42");
/// ```
pub struct Callback<F>(pub F);

impl<F: FnMut(&str)> View for Callback<F> {
    fn render(&mut self, text: &str) {
        (self.0)(text)
    }
}

impl<V: View + ?Sized> View for &mut V {
    fn render(&mut self, text: &str) {
        (**self).render(text)
    }
}

impl<V: View + ?Sized> View for Box<V> {
    fn render(&mut self, text: &str) {
        (**self).render(text)
    }
}
