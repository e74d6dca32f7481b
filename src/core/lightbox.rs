/// Visible bounds of the lightbox dialog, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String, caption: String },
}

/// Two-state controller for the image lightbox. A thumbnail click opens it
/// with that image and caption; a later click overwrites both synchronously
/// (last click wins). Closing happens on the explicit close control or on a
/// pointer interaction outside the dialog bounds.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    pub fn open(&mut self, src: impl Into<String>, caption: impl Into<String>) {
        self.state = LightboxState::Open {
            src: src.into(),
            caption: caption.into(),
        };
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// A click lands on the page while the dialog shows `bounds`. Only a
    /// click outside the visible dialog closes it; clicks inside are part of
    /// the dialog's own controls and leave the state alone.
    pub fn backdrop_click(&mut self, bounds: Rect, x: f64, y: f64) {
        if self.is_open() && !bounds.contains(x, y) {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog_bounds() -> Rect {
        Rect {
            left: 100.0,
            top: 100.0,
            right: 500.0,
            bottom: 400.0,
        }
    }

    #[test]
    fn test_starts_closed() {
        let lightbox = Lightbox::new();
        assert_eq!(*lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn test_open_sets_image_and_caption() {
        let mut lightbox = Lightbox::new();
        lightbox.open("shots/demo.png", "Demo App");

        assert_eq!(
            *lightbox.state(),
            LightboxState::Open {
                src: "shots/demo.png".to_string(),
                caption: "Demo App".to_string(),
            }
        );
    }

    #[test]
    fn test_second_open_overwrites() {
        let mut lightbox = Lightbox::new();
        lightbox.open("a.png", "First");
        lightbox.open("b.png", "Second");

        assert_eq!(
            *lightbox.state(),
            LightboxState::Open {
                src: "b.png".to_string(),
                caption: "Second".to_string(),
            }
        );
    }

    #[test]
    fn test_explicit_close() {
        let mut lightbox = Lightbox::new();
        lightbox.open("a.png", "First");
        lightbox.close();

        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_click_outside_closes() {
        let mut lightbox = Lightbox::new();
        lightbox.open("a.png", "First");
        lightbox.backdrop_click(dialog_bounds(), 10.0, 10.0);

        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_click_inside_keeps_open() {
        let mut lightbox = Lightbox::new();
        lightbox.open("a.png", "First");
        lightbox.backdrop_click(dialog_bounds(), 300.0, 250.0);

        assert!(lightbox.is_open());
    }

    #[test]
    fn test_click_on_edge_counts_as_inside() {
        let mut lightbox = Lightbox::new();
        lightbox.open("a.png", "First");
        lightbox.backdrop_click(dialog_bounds(), 100.0, 400.0);

        assert!(lightbox.is_open());
    }

    #[test]
    fn test_backdrop_click_while_closed_is_noop() {
        let mut lightbox = Lightbox::new();
        lightbox.backdrop_click(dialog_bounds(), 10.0, 10.0);

        assert!(!lightbox.is_open());
    }
}
