use crate::codec::{escape_into, escaped_len};
use crate::reserved::SEPARATOR;

/// Builds a frame field by field, escaping as it goes.
///
/// When the total size is known up front, [`FrameBuilder::with_capacity`]
/// makes the build a single allocation.
#[derive(Debug, Clone, Default)]
pub struct FrameBuilder {
    buf: Vec<u8>,
    fields: usize,
}

impl FrameBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` framed bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            fields: 0,
        }
    }

    /// Exact framed size of `fields` once each is escaped.
    pub fn framed_len<F: AsRef<[u8]>>(fields: &[F]) -> usize {
        fields.iter().map(|f| escaped_len(f.as_ref())).sum::<usize>()
            + fields.len().saturating_sub(1)
    }

    /// Escape `field` and append it to the frame.
    pub fn push_field(&mut self, field: &[u8]) -> &mut Self {
        self.push_separator();
        escape_into(field, &mut self.buf);
        self
    }

    /// Append a field that is already escaped.
    pub fn push_escaped(&mut self, field: &[u8]) -> &mut Self {
        self.push_separator();
        self.buf.extend_from_slice(field);
        self
    }

    /// Number of fields pushed so far.
    pub fn field_count(&self) -> usize {
        self.fields
    }

    /// Framed bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the builder and return the frame.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    fn push_separator(&mut self) {
        if self.fields > 0 {
            self.buf.push(SEPARATOR);
        }
        self.fields += 1;
    }
}
