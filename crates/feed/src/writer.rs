// ABOUTME: The shared feed-writer contract consumed by both output formats.
// ABOUTME: Renders channel metadata plus records into a serialized document.

use std::fs;
use std::path::Path;

use presswire_extract::Record;

use crate::channel::Channel;
use crate::error::FeedError;

/// Renders a channel plus a sequence of records into a serialized document.
///
/// Both writers emit the channel's title, link, description, and every
/// extra top-level tag, then one block per record containing title, link,
/// description, an identifier defaulting to the link, and the record's
/// extras flattened alongside.
pub trait FeedWriter {
    /// Renders the full document as text.
    fn render(&self, channel: &Channel, records: &[Record]) -> Result<String, FeedError>;

    /// Renders the document and writes it to `path`.
    ///
    /// A failed render writes nothing, so no partial feed ever reaches disk.
    fn write_file(
        &self,
        channel: &Channel,
        records: &[Record],
        path: &Path,
    ) -> Result<(), FeedError> {
        let document = self.render(channel, records)?;
        fs::write(path, document)?;
        Ok(())
    }
}
