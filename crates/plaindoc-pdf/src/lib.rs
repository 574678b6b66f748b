//! plaindoc-pdf - Paged output placeholder
//!
//! No typesetting happens here. The raw input text is handed back unchanged
//! and saved under a `.pdf` name, so the resulting file is plain text, not a
//! conforming PDF. Callers that need real paged output must not rely on it.
//!
//! # Example
//!
//! ```
//! use plaindoc_pdf::render_placeholder;
//!
//! let bytes = render_placeholder("# Report\nAll good.");
//! assert_eq!(bytes, b"# Report\nAll good.");
//! ```

use tracing::debug;

/// File extension used for the placeholder artifact
pub const EXTENSION: &str = "pdf";

/// Render the paged-output placeholder: the UTF-8 bytes of `content`
pub fn render_placeholder(content: &str) -> Vec<u8> {
    debug!(bytes = content.len(), "rendering paged output placeholder");
    content.as_bytes().to_vec()
}
