//! Accumulating buffer for streamed text.
//!
//! Each delta is appended and the whole buffer is segmented again. A block
//! is settled once the line that ended it is complete: nothing appended
//! later can change it.

use crate::{RenderBlock, RenderTree, Renderer};
use chatmark_parser::segment_located;
use log::trace;

/// Text accumulated from a stream of deltas.
#[derive(Debug, Clone, Default)]
pub struct StreamBuffer {
    text: String,
    renderer: Renderer,
    /// Settled blocks already handed out by `take_new_settled`
    emitted: usize,
}

impl StreamBuffer {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            text: String::new(),
            renderer,
            emitted: 0,
        }
    }

    /// Append a delta.
    pub fn push(&mut self, delta: &str) {
        self.text.push_str(delta);
    }

    /// Everything received so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render the whole buffer as it stands.
    pub fn render(&self) -> RenderTree {
        self.renderer.render(&self.text)
    }

    /// Number of newline-terminated lines in the buffer.
    fn complete_lines(&self) -> usize {
        self.text.bytes().filter(|&b| b == b'\n').count()
    }

    /// Blocks that can no longer change as more text arrives.
    pub fn settled_blocks(&self) -> Vec<RenderBlock> {
        let complete = self.complete_lines();
        segment_located(&self.text)
            .into_iter()
            .take_while(|located| located.lines.end < complete)
            .map(|located| self.renderer.render_block(located.value))
            .collect()
    }

    /// Settled blocks not returned by an earlier call.
    pub fn take_new_settled(&mut self) -> Vec<RenderBlock> {
        let fresh: Vec<RenderBlock> = self
            .settled_blocks()
            .into_iter()
            .skip(self.emitted)
            .collect();
        if !fresh.is_empty() {
            trace!("{} block(s) settled", fresh.len());
        }
        self.emitted += fresh.len();
        fresh
    }

    /// End of stream: every block not yet taken.
    pub fn finish(self) -> Vec<RenderBlock> {
        self.render().blocks.into_iter().skip(self.emitted).collect()
    }
}
