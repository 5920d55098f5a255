use nebula_common::PlatformError;
use tracing::debug;

/// Cross-platform clipboard abstraction backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn get_text(&mut self) -> Result<String, PlatformError> {
        self.inner
            .get_text()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}

/// Put `text` on the system clipboard with a short-lived handle.
pub fn copy_text(text: &str) -> Result<(), PlatformError> {
    if text.is_empty() {
        return Err(PlatformError::ClipboardError("nothing to copy".into()));
    }
    Clipboard::new()?.set_text(text)?;
    debug!(len = text.len(), "copied to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_empty_text_is_rejected() {
        let err = copy_text("").unwrap_err();
        assert!(err.to_string().contains("nothing to copy"));
    }
}
