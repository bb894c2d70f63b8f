//=========================================================================
// Display
//
// Window lifecycle: configuration, open, close, and surface accessors.
//
// The display is an explicit context value. `Display::open` returns it,
// `Display::close` consumes the window inside it, and every misuse of
// the lifecycle (closing twice, closing before opening) is a reportable
// error instead of undefined behavior. There is no process-wide handle;
// whoever holds the `Display` owns the surface.
//
// Responsibilities:
// - Translate `DisplayConfig` into window-creation attributes
// - Create and destroy the OS window
// - Report surface size and expose title/redraw controls
//
// Failure surface:
// - Window creation failure  → `DisplayError::WindowCreation`
// - Event loop failure       → `DisplayError::EventLoop` (raised by the
//   shell, which owns the loop)
// - Lifecycle misuse         → `DisplayError::AlreadyOpen` / `NotOpen`
//
//=========================================================================

//=== External Crates =====================================================

use log::{info, warn};
use winit::{
    dpi::LogicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::geometry::{Bounds, Size};

//=== DisplayConfig =======================================================

/// Display surface parameters.
///
/// Fluent construction, consumed by the shell at open time.
///
/// # Default Values
///
/// - **Size**: 800×600 pixels
/// - **Mode**: windowed
/// - **Title**: empty
///
/// # Examples
///
/// ```no_run
/// use seaglass::DisplayConfig;
///
/// let config = DisplayConfig::new(1280, 720).title("editor");
/// let full = DisplayConfig::new(0, 0).fullscreen(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    width: u32,
    height: u32,
    fullscreen: bool,
    title: String,
}

impl DisplayConfig {
    /// Creates a windowed, untitled configuration of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fullscreen: false,
            title: String::new(),
        }
    }

    /// Requests fullscreen mode.
    ///
    /// A fullscreen surface covers the whole screen; the configured
    /// width/height are ignored by the window system.
    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Sets the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The configured pixel size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether fullscreen mode was requested.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Builds the winit creation attributes for this configuration.
    ///
    /// Fullscreen uses borderless mode on the current monitor, which is
    /// what covers the full screen regardless of the requested size.
    pub fn window_attributes(&self) -> WindowAttributes {
        let mut attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height));

        if self.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        attrs
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

//=== DisplayError ========================================================

/// Display lifecycle and platform errors.
///
/// Subsystem failure, creation failure, and lifecycle misuse are
/// distinct variants so callers can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// Event loop creation or execution failed (OS-level issue).
    EventLoop(String),

    /// The OS refused to create the window.
    WindowCreation(String),

    /// An open was requested while a surface is already live.
    AlreadyOpen,

    /// A window-dependent operation was requested with no live surface.
    NotOpen,
}

impl std::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "Event loop failed: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::AlreadyOpen => write!(f, "Display is already open"),
            Self::NotOpen => write!(f, "Display is not open"),
        }
    }
}

impl std::error::Error for DisplayError {}

//=== Display =============================================================

/// An open display surface.
///
/// Returned by [`Display::open`] and threaded explicitly through close
/// and every window-dependent operation. The winit `Window` lives inside
/// for as long as the surface is open; [`Display::close`] drops it and
/// marks the context closed.
///
/// # Lifecycle
///
/// ```text
/// Display::open ──> open (window live) ──close()──> closed
///                      │                               │
///                      └── close() → Ok(())            └── close() → Err(NotOpen)
/// ```
///
/// # Thread Safety
///
/// Not Send/Sync. The display must stay on the thread that owns the
/// event loop (winit requirement on macOS/iOS).
pub struct Display {
    /// OS window handle (None once closed).
    window: Option<Window>,

    /// The size requested at open time, reported while the window has
    /// not yet delivered a real surface size.
    requested: Size,
}

impl Display {
    //--- Construction -----------------------------------------------------

    /// Opens a display surface with the given configuration.
    ///
    /// Must be called from within the event loop (the shell calls it on
    /// `resumed`). Creation failure is surfaced as an error, never as a
    /// defunct handle.
    pub fn open(
        event_loop: &ActiveEventLoop,
        config: &DisplayConfig,
    ) -> Result<Self, DisplayError> {
        let window = event_loop
            .create_window(config.window_attributes())
            .map_err(|e| DisplayError::WindowCreation(e.to_string()))?;

        info!(
            target: "display",
            "Surface opened: {}x{} @ {}x DPI{}",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor(),
            if config.is_fullscreen() { " (fullscreen)" } else { "" }
        );

        Ok(Self {
            window: Some(window),
            requested: config.size(),
        })
    }

    //--- Lifecycle --------------------------------------------------------

    /// Destroys the window and marks the context closed.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::NotOpen`] if the surface was already
    /// closed. Closing is not idempotent; the second close is a caller
    /// bug worth hearing about.
    pub fn close(&mut self) -> Result<(), DisplayError> {
        match self.window.take() {
            Some(window) => {
                drop(window);
                info!(target: "display", "Surface closed");
                Ok(())
            }
            None => Err(DisplayError::NotOpen),
        }
    }

    /// Whether the surface is currently live.
    pub fn is_open(&self) -> bool {
        self.window.is_some()
    }

    //--- Surface Accessors ------------------------------------------------

    /// The surface width in pixels.
    ///
    /// While the window has not reported a size yet (or after close),
    /// this is the size that was requested at open.
    pub fn width(&self) -> u32 {
        match &self.window {
            Some(window) => {
                let size = window.inner_size();
                if size.width == 0 { self.requested.width } else { size.width }
            }
            None => self.requested.width,
        }
    }

    /// The surface height in pixels.
    pub fn height(&self) -> u32 {
        match &self.window {
            Some(window) => {
                let size = window.inner_size();
                if size.height == 0 { self.requested.height } else { size.height }
            }
            None => self.requested.height,
        }
    }

    /// The surface rectangle, origin at the top-left corner.
    ///
    /// Handy for hit testing event positions against the surface.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0, 0, self.width(), self.height())
    }

    /// Sets the window title.
    ///
    /// No-op (with a warning) once the surface is closed.
    pub fn set_title(&self, title: &str) {
        match &self.window {
            Some(window) => window.set_title(title),
            None => warn!(target: "display", "set_title on a closed display ignored"),
        }
    }

    /// Schedules the next frame.
    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    //--- Test Constructors ------------------------------------------------

    #[cfg(test)]
    pub(crate) fn closed_for_tests(requested: Size) -> Self {
        Self { window: None, requested }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{LogicalSize, Size as WinitSize};

    //=====================================================================
    // DisplayConfig Tests
    //=====================================================================

    #[test]
    fn config_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.size(), Size::new(800, 600));
        assert!(!config.is_fullscreen());
    }

    #[test]
    fn config_fluent_construction() {
        let config = DisplayConfig::new(1024, 768).fullscreen(true).title("demo");
        assert_eq!(config.size(), Size::new(1024, 768));
        assert!(config.is_fullscreen());
        assert_eq!(config.title, "demo");
    }

    /// Windowed attributes carry the requested size and no fullscreen.
    #[test]
    fn attributes_windowed() {
        let attrs = DisplayConfig::new(640, 480).window_attributes();

        assert!(attrs.fullscreen.is_none());
        assert_eq!(
            attrs.inner_size,
            Some(WinitSize::Logical(LogicalSize::new(640.0, 480.0)))
        );
    }

    /// Fullscreen attributes request borderless coverage of the screen.
    #[test]
    fn attributes_fullscreen() {
        let attrs = DisplayConfig::new(640, 480).fullscreen(true).window_attributes();
        assert!(matches!(attrs.fullscreen, Some(Fullscreen::Borderless(None))));
    }

    #[test]
    fn attributes_carry_title() {
        let attrs = DisplayConfig::new(100, 100).title("seaglass").window_attributes();
        assert_eq!(attrs.title, "seaglass");
    }

    #[test]
    fn attributes_default_untitled() {
        let attrs = DisplayConfig::new(100, 100).window_attributes();
        assert_eq!(attrs.title, "");
    }

    //=====================================================================
    // Lifecycle Tests
    //=====================================================================

    #[test]
    fn close_without_open_is_an_error() {
        let mut display = Display::closed_for_tests(Size::new(800, 600));
        assert_eq!(display.close(), Err(DisplayError::NotOpen));
    }

    #[test]
    fn closed_display_is_not_open() {
        let display = Display::closed_for_tests(Size::new(800, 600));
        assert!(!display.is_open());
    }

    /// A closed display still reports the requested size.
    #[test]
    fn closed_display_reports_requested_size() {
        let display = Display::closed_for_tests(Size::new(320, 240));
        assert_eq!(display.width(), 320);
        assert_eq!(display.height(), 240);
    }

    #[test]
    fn bounds_cover_the_surface() {
        use crate::geometry::Point;

        let display = Display::closed_for_tests(Size::new(320, 240));
        let bounds = display.bounds();

        assert_eq!(bounds.x2(), 320);
        assert_eq!(bounds.y2(), 240);
        assert!(bounds.contains(Point::new(0, 0)));
        assert!(!bounds.contains(Point::new(320, 120)));
    }

    /// set_title on a closed display must not panic.
    #[test]
    fn set_title_on_closed_display_is_ignored() {
        let display = Display::closed_for_tests(Size::new(1, 1));
        display.set_title("nobody home");
    }

    #[test]
    fn request_redraw_on_closed_display_is_ignored() {
        let display = Display::closed_for_tests(Size::new(1, 1));
        display.request_redraw();
    }

    //=====================================================================
    // DisplayError Tests
    //=====================================================================

    #[test]
    fn error_implements_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<DisplayError>();
    }

    #[test]
    fn error_display_messages() {
        assert_eq!(
            DisplayError::AlreadyOpen.to_string(),
            "Display is already open"
        );
        assert_eq!(DisplayError::NotOpen.to_string(), "Display is not open");
        assert!(DisplayError::WindowCreation("denied".into())
            .to_string()
            .contains("denied"));
    }
}
