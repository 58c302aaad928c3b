//! Output surface for rendered markup.
//!
//! The page the widget lives in is abstracted as an [`OutputSink`]: two
//! selectors, a table container and an empty-message container, each of which
//! can be replaced or toggled. [`Action::apply_to`](crate::app::Action::apply_to)
//! drives a sink; the host binary uses [`WriterSink`] over stdout.
//!
//! # Wire format
//!
//! [`WriterSink`] frames each effect so a host can split the stream:
//!
//! ```text
//! @@ populate-selector 1
//! <option value="Omeka" selected>Omeka</option>
//! @@ end
//! @@ replace-table
//! <div class="row p-r-1">...
//! @@ end
//! @@ table-visible true
//! @@ empty-visible false
//! ```

use crate::app::Slot;
use crate::domain::error::Result;
use std::io::Write;

/// Effects the widget can have on its page.
pub trait OutputSink {
    /// Replaces the option list of one selector.
    fn populate_selector(&mut self, slot: Slot, options: &str) -> Result<()>;

    /// Replaces the table container's contents.
    fn replace_table(&mut self, markup: &str) -> Result<()>;

    /// Replaces the empty-message container's contents.
    fn replace_empty(&mut self, markup: &str) -> Result<()>;

    fn set_table_visible(&mut self, visible: bool) -> Result<()>;

    fn set_empty_visible(&mut self, visible: bool) -> Result<()>;
}

/// Sink writing framed blocks to any byte stream.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn block(&mut self, header: &str, body: &str) -> Result<()> {
        writeln!(self.writer, "@@ {header}")?;
        self.writer.write_all(body.as_bytes())?;
        if !body.is_empty() && !body.ends_with('\n') {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "@@ end")?;
        self.writer.flush()?;
        Ok(())
    }

    fn line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "@@ {line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn populate_selector(&mut self, slot: Slot, options: &str) -> Result<()> {
        self.block(&format!("populate-selector {}", slot.number()), options)
    }

    fn replace_table(&mut self, markup: &str) -> Result<()> {
        self.block("replace-table", markup)
    }

    fn replace_empty(&mut self, markup: &str) -> Result<()> {
        self.block("replace-empty", markup)
    }

    fn set_table_visible(&mut self, visible: bool) -> Result<()> {
        self.line(&format!("table-visible {visible}"))
    }

    fn set_empty_visible(&mut self, visible: bool) -> Result<()> {
        self.line(&format!("empty-visible {visible}"))
    }
}

/// In-memory sink holding the current page state.
///
/// Useful for tests and for hosts that diff the page themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    pub selectors: [String; 2],
    pub table: String,
    pub empty: String,
    pub table_visible: bool,
    pub empty_visible: bool,
    /// Number of table replacements seen so far.
    pub table_writes: usize,
}

impl OutputSink for RecordingSink {
    fn populate_selector(&mut self, slot: Slot, options: &str) -> Result<()> {
        self.selectors[slot.index()] = options.to_string();
        Ok(())
    }

    fn replace_table(&mut self, markup: &str) -> Result<()> {
        markup.clone_into(&mut self.table);
        self.table_writes += 1;
        Ok(())
    }

    fn replace_empty(&mut self, markup: &str) -> Result<()> {
        markup.clone_into(&mut self.empty);
        Ok(())
    }

    fn set_table_visible(&mut self, visible: bool) -> Result<()> {
        self.table_visible = visible;
        Ok(())
    }

    fn set_empty_visible(&mut self, visible: bool) -> Result<()> {
        self.empty_visible = visible;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_frames_blocks_and_flags() {
        let mut sink = WriterSink::new(Vec::new());
        sink.populate_selector(Slot::Right, "<option value=\"Wax\">Wax</option>\n").unwrap();
        sink.replace_table("<div></div>").unwrap();
        sink.set_table_visible(true).unwrap();
        sink.set_empty_visible(false).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            concat!(
                "@@ populate-selector 2\n",
                "<option value=\"Wax\">Wax</option>\n",
                "@@ end\n",
                "@@ replace-table\n",
                "<div></div>\n",
                "@@ end\n",
                "@@ table-visible true\n",
                "@@ empty-visible false\n",
            )
        );
    }

    #[test]
    fn empty_block_has_no_body_line() {
        let mut sink = WriterSink::new(Vec::new());
        sink.replace_empty("").unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "@@ replace-empty\n@@ end\n");
    }

    #[test]
    fn recording_sink_keeps_latest_state() {
        let mut sink = RecordingSink::default();
        sink.replace_table("first").unwrap();
        sink.replace_table("second").unwrap();
        sink.populate_selector(Slot::Left, "opts").unwrap();

        assert_eq!(sink.table, "second");
        assert_eq!(sink.table_writes, 2);
        assert_eq!(sink.selectors, ["opts".to_string(), String::new()]);
    }
}
