//! Per-frame input queue.
//!
//! The shell reads input once per frame. [`InputQueue::poll`] waits up to the
//! remaining frame budget for the first event, then drains whatever else is
//! already pending without blocking. Events keep their arrival order.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::{map_event, InputEvent};

/// Maximum events handled in one frame. Anything beyond stays in the
/// terminal's buffer for the next frame.
pub const FRAME_EVENT_CAPACITY: usize = 32;

#[derive(Debug, Default)]
pub struct InputQueue {
    pending: ArrayVec<InputEvent, FRAME_EVENT_CAPACITY>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw terminal event. Returns false only when the frame buffer
    /// is full; unmapped events are accepted and dropped.
    pub fn push_event(&mut self, event: &Event) -> bool {
        if self.pending.is_full() {
            return false;
        }
        if let Some(mapped) = map_event(event) {
            self.pending.push(mapped);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued this frame, oldest first.
    pub fn drain(&mut self) -> ArrayVec<InputEvent, FRAME_EVENT_CAPACITY> {
        std::mem::take(&mut self.pending)
    }

    /// Read terminal events for this frame.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        while !self.pending.is_full() {
            let ev = event::read()?;
            self.push_event(&ev);
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(())
    }
}
