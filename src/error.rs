use thiserror::Error;

/// Failures while acquiring toolkit resources. None of them are retried; the
/// process exits with the code from [`ViewerError::exit_code`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    #[error("SDL initialisation failed: {0}")]
    SdlInit(String),

    #[error("Video subsystem unavailable: {0}")]
    Video(String),

    #[error("TTF initialisation failed: {0}")]
    Ttf(String),

    #[error("Window creation failed: {0}")]
    Window(String),

    #[error("Canvas creation failed: {0}")]
    Canvas(String),

    #[error("Font load failed: {0}")]
    Font(String),

    #[error("Event pump unavailable: {0}")]
    EventPump(String),

    #[error("Render failed: {0}")]
    Render(String),
}

impl ViewerError {
    /// Distinct non-zero exit code per failure site.
    pub fn exit_code(&self) -> u8 {
        match self {
            ViewerError::SdlInit(_) => 1,
            ViewerError::Video(_) => 2,
            ViewerError::Ttf(_) => 3,
            ViewerError::Window(_) => 4,
            ViewerError::Canvas(_) => 5,
            ViewerError::Font(_) => 6,
            ViewerError::EventPump(_) => 7,
            ViewerError::Render(_) => 8,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
