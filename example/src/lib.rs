//! Headless walkthrough of the slide-to-confirm control.
//!
//! Drives a [`slide_confirm::SlideConfirm`] through a scripted session on a
//! tokio runtime and prints every frame through a text renderer.
mod haptics;
mod script;
mod text_renderer;

use std::{fs, io};

use slide_confirm::SlideConfirmStyle;
use thiserror::Error;
use tracing::info;

pub use haptics::TracingHaptics;
pub use text_renderer::TextRenderer;

/// Errors that abort the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The style file or the runtime could not be set up.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The style file is not a valid style.
    #[error("invalid style file: {0}")]
    Style(#[from] serde_json::Error),
    /// A spawned confirm task panicked.
    #[error("confirm task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Installs the tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            match tracing_subscriber::EnvFilter::try_new("error,slide_confirm=info,example=info") {
                Ok(filter) => filter,
                Err(_) => tracing_subscriber::EnvFilter::new("error"),
            }
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Loads a JSON style override, or the default style when `path` is `None`.
///
/// Missing fields fall back to their defaults.
pub fn load_style(path: Option<&str>) -> Result<SlideConfirmStyle, DemoError> {
    let Some(path) = path else {
        return Ok(SlideConfirmStyle::default());
    };
    let raw = fs::read_to_string(path)?;
    let style = serde_json::from_str(&raw)?;
    info!(path, "loaded style override");
    Ok(style)
}

/// Runs the scripted session.
pub fn run(style_path: Option<&str>) -> Result<(), DemoError> {
    let style = load_style(style_path)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(script::session(style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_without_path() {
        assert_eq!(load_style(None).ok(), Some(SlideConfirmStyle::default()));
    }

    #[test]
    fn partial_style_override() {
        let style: SlideConfirmStyle =
            serde_json::from_str(r#"{ "indicator_size": 48.0, "text_shimmers": true }"#)
                .expect("partial style parses");
        assert_eq!(style.indicator_size, slide_confirm::Dp(48.0));
        assert!(style.text_shimmers);
        assert_eq!(style.indicator_spacing, slide_confirm::Dp(5.0));
    }

    #[test]
    fn bundled_style_file_uses_hex_colors() {
        let style = load_style(Some(concat!(env!("CARGO_MANIFEST_DIR"), "/style.json")))
            .expect("bundled style loads");
        assert_eq!(style.indicator_color, slide_confirm::Color::from_rgb_u8(52, 199, 89));
        assert!(style.text_shimmers);
        assert_eq!(style.background_color, None);
    }

    #[test]
    fn missing_style_file_is_an_io_error() {
        let err = load_style(Some("/nonexistent/slide-style.json"));
        assert!(matches!(err, Err(DemoError::Io(_))));
    }
}
