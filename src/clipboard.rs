//! Best-effort system clipboard access.
//!
//! The OS clipboard is the only fallible external collaborator in Loip, so
//! it sits behind the [`ClipboardBackend`] trait: production code wraps
//! [`arboard`], tests substitute recording or failing backends. Capability
//! is probed once at construction; a missing capability degrades every copy
//! to a `false` outcome without attempting I/O.

use crate::error::{Error, Result};

/// Low-level clipboard write capability.
///
/// Implementations must not panic; failures are returned and absorbed by
/// [`Clipboard::try_copy`].
pub trait ClipboardBackend {
    /// Places `text` on the clipboard.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backend over [`arboard`].
struct SystemBackend {
    inner: arboard::Clipboard,
}

impl ClipboardBackend for SystemBackend {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// Best-effort clipboard adapter.
///
/// Generation never depends on clipboard state: [`Clipboard::try_copy`]
/// reports success as a plain boolean and never propagates an error.
pub struct Clipboard {
    backend: Option<Box<dyn ClipboardBackend>>,
}

impl Clipboard {
    /// Probes the system clipboard once.
    ///
    /// When no clipboard facility is reachable (headless session, missing
    /// display server), a single warning is logged and the adapter degrades
    /// to a no-op.
    #[must_use]
    pub fn detect() -> Self {
        match arboard::Clipboard::new() {
            Ok(inner) => Self {
                backend: Some(Box::new(SystemBackend { inner })),
            },
            Err(e) => {
                log::warn!("clipboard unavailable, copies disabled: {e}");
                Self { backend: None }
            }
        }
    }

    /// An adapter with no clipboard capability; every copy returns `false`.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { backend: None }
    }

    /// An adapter over a caller-supplied backend.
    #[must_use]
    pub fn with_backend(backend: Box<dyn ClipboardBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Whether a clipboard capability was detected.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Attempts to copy `text`, reporting success.
    ///
    /// Returns `false` without I/O when no capability is present; runtime
    /// failures are logged and reported as `false`.
    pub fn try_copy(&mut self, text: &str) -> bool {
        match self.backend.as_mut() {
            None => false,
            Some(backend) => match backend.set_text(text) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("clipboard copy failed: {e}");
                    false
                }
            },
        }
    }
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard")
            .field("available", &self.is_available())
            .finish()
    }
}
