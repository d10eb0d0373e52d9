//! Study session for one word.
//!
//! Owns one drawing surface per character of the current headword. Surfaces
//! are torn down and recreated as a batch whenever the characters or the
//! computed surface size change. Each batch gets a new epoch, and every
//! provider action carries a [`Ticket`] naming the epoch it was issued in, so
//! completions that arrive after a rebuild are recognized and dropped.
//!
//! Play-all is a chain: step `n + 1` is issued only when the completion for
//! step `n` is handled. Starting a new chain bumps the chain generation; the
//! old chain's surfaces keep animating, but its completions no longer advance
//! anything.

use kanal::{Receiver, Sender};
use xuezi_config::strokes::StrokeConfig;
use xuezi_types::WordRecord;

use crate::completion::{Completion, Ticket, TicketKind};
use crate::sizing::SizingPolicy;
use crate::surface::{
    DrawingSurface, MountPoint, SurfaceError, SurfaceHandle, SurfaceOptions, SurfaceProvider,
};

/// Result of asking for an action on a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Started,
    /// No live surface for that character; the control should be disabled
    Unavailable,
}

/// Snapshot for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub active_character_index: Option<usize>,
    pub surfaces_ready: bool,
}

enum Slot<S: DrawingSurface> {
    Live(SurfaceHandle<S>),
    Failed(SurfaceError),
}

/// The request currently shown as active
#[derive(Debug, Clone, Copy)]
struct Active {
    index: usize,
    request: u64,
}

#[derive(Debug, Clone, Copy)]
struct PlayAll {
    generation: u64,
    request: u64,
    step: usize,
}

pub struct StudySession<P: SurfaceProvider> {
    provider: P,
    sizing: SizingPolicy,
    strokes: StrokeConfig,

    characters: Vec<char>,
    viewport_width: u32,
    size: u32,
    slots: Vec<Slot<P::Surface>>,
    surfaces_ready: bool,

    epoch: u64,
    last_request: u64,
    chain_generation: u64,
    chain: Option<PlayAll>,
    active: Option<Active>,
    focused: usize,

    completions_tx: Sender<Ticket>,
    completions_rx: Receiver<Ticket>,
}

impl<P: SurfaceProvider> StudySession<P> {
    pub fn new(provider: P, sizing: SizingPolicy, strokes: StrokeConfig, viewport_width: u32) -> Self {
        let (completions_tx, completions_rx) = kanal::unbounded();
        Self {
            provider,
            sizing,
            strokes,
            characters: Vec::new(),
            viewport_width,
            size: 0,
            slots: Vec::new(),
            surfaces_ready: false,
            epoch: 0,
            last_request: 0,
            chain_generation: 0,
            chain: None,
            active: None,
            focused: 0,
            completions_tx,
            completions_rx,
        }
    }

    /// Show `word`. Surfaces are rebuilt only if its characters differ from the current ones.
    pub fn load_word(&mut self, word: &WordRecord) {
        let characters = word.characters();
        if characters == self.characters && !self.slots.is_empty() {
            tracing::debug!("Word {} has the same characters, keeping surfaces", word.id);
            return;
        }

        tracing::info!("Studying {} ({} characters)", word.script, characters.len());
        self.characters = characters;
        self.focused = 0;
        self.size = self.sizing.surface_size(self.viewport_width, self.characters.len());
        self.rebuild();
    }

    /// Viewport changed. Surfaces are rebuilt only if the computed size changed.
    pub fn resize(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
        if self.characters.is_empty() {
            return;
        }

        let size = self.sizing.surface_size(viewport_width, self.characters.len());
        if size != self.size {
            tracing::debug!("Surface size {} -> {}", self.size, size);
            self.size = size;
            self.rebuild();
        }
    }

    /// Release every surface and forget the word
    pub fn end(&mut self) {
        self.teardown();
        self.characters.clear();
        self.focused = 0;
    }

    fn teardown(&mut self) {
        self.surfaces_ready = false;
        self.chain = None;
        self.active = None;

        for slot in self.slots.drain(..) {
            if let Slot::Live(mut handle) = slot {
                handle.release();
            }
        }
    }

    fn rebuild(&mut self) {
        self.teardown();
        self.epoch += 1;

        let options = SurfaceOptions::new(self.size, &self.strokes);
        let mut slots = Vec::with_capacity(self.characters.len());

        for (index, &character) in self.characters.iter().enumerate() {
            match self.provider.create(MountPoint(index), character, &options) {
                Ok(surface) => slots.push(Slot::Live(SurfaceHandle::new(index, surface))),
                Err(e) => {
                    tracing::warn!("Could not create surface for {}: {}", character, e);
                    slots.push(Slot::Failed(e));
                }
            }
        }

        self.slots = slots;
        self.surfaces_ready = true;
        tracing::debug!(
            "Surfaces ready: {}/{} live at {}px (epoch {})",
            self.live_count(),
            self.characters.len(),
            self.size,
            self.epoch
        );
    }

    /// Play the stroke animation of one character
    pub fn animate(&mut self, index: usize) -> Availability {
        self.start_single(index, TicketKind::Animate)
    }

    /// Start stroke practice on one character
    pub fn practice(&mut self, index: usize) -> Availability {
        self.start_single(index, TicketKind::Practice)
    }

    fn start_single(&mut self, index: usize, kind: TicketKind) -> Availability {
        if !self.is_available(index) {
            tracing::debug!("Character {} unavailable for {:?}", index, kind);
            return Availability::Unavailable;
        }

        let request = self.next_request();
        self.active = Some(Active { index, request });
        self.issue(index, request, kind);
        Availability::Started
    }

    /// Animate every character in order, one after another
    pub fn play_all(&mut self) -> Availability {
        self.chain_generation += 1;
        let request = self.next_request();
        self.chain = Some(PlayAll {
            generation: self.chain_generation,
            request,
            step: 0,
        });
        self.active = Some(Active { index: 0, request });

        tracing::debug!("Play-all chain {} started", self.chain_generation);
        if self.advance_chain(0) {
            Availability::Started
        } else {
            Availability::Unavailable
        }
    }

    /// Issue the first available step at or after `step`.
    /// Returns false when the chain ran out of characters.
    fn advance_chain(&mut self, mut step: usize) -> bool {
        let Some(chain) = self.chain else {
            return false;
        };
        let owns_indicator = self.active.is_some_and(|a| a.request == chain.request);

        while step < self.slots.len() {
            if self.is_available(step) {
                self.chain = Some(PlayAll { step, ..chain });
                if owns_indicator {
                    self.active = Some(Active {
                        index: step,
                        request: chain.request,
                    });
                }
                self.issue(
                    step,
                    chain.request,
                    TicketKind::Chain {
                        generation: chain.generation,
                    },
                );
                return true;
            }
            tracing::debug!("Play-all skipping unavailable character {}", step);
            step += 1;
        }

        tracing::debug!("Play-all chain {} finished", chain.generation);
        self.chain = None;
        if owns_indicator {
            self.active = None;
        }
        false
    }

    fn issue(&mut self, index: usize, request: u64, kind: TicketKind) {
        let ticket = Ticket {
            epoch: self.epoch,
            index,
            request,
            kind,
        };
        let done = Completion::new(ticket, self.completions_tx.clone());

        let Some(Slot::Live(handle)) = self.slots.get_mut(index) else {
            return;
        };
        if let Some(surface) = handle.surface_mut() {
            match kind {
                TicketKind::Practice => surface.quiz(done),
                TicketKind::Animate | TicketKind::Chain { .. } => surface.animate(done),
            }
        }
    }

    fn next_request(&mut self) -> u64 {
        self.last_request += 1;
        self.last_request
    }

    /// Handle one provider completion. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: Ticket) {
        if ticket.epoch != self.epoch {
            tracing::debug!("Ignoring completion from replaced surface {}", ticket.index);
            return;
        }

        match ticket.kind {
            TicketKind::Animate | TicketKind::Practice => {
                if self.active.is_some_and(|a| a.request == ticket.request) {
                    self.active = None;
                }
            }
            TicketKind::Chain { generation } => {
                let current = self
                    .chain
                    .is_some_and(|c| c.generation == generation && c.step == ticket.index);
                if !current {
                    tracing::debug!(
                        "Ignoring completion from superseded chain {} step {}",
                        generation,
                        ticket.index
                    );
                    return;
                }
                self.advance_chain(ticket.index + 1);
            }
        }
    }

    /// Handle every completion queued so far, including ones queued while handling.
    /// Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(Some(ticket)) = self.completions_rx.try_recv() {
            self.complete(ticket);
            handled += 1;
        }
        handled
    }

    /// Receiving end of the completion queue, for async drivers
    pub fn completions(&self) -> Receiver<Ticket> {
        self.completions_rx.clone()
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            active_character_index: self.active_character_index(),
            surfaces_ready: self.surfaces_ready,
        }
    }

    pub fn active_character_index(&self) -> Option<usize> {
        self.active.map(|a| a.index)
    }

    pub fn surfaces_ready(&self) -> bool {
        self.surfaces_ready
    }

    pub fn is_playing_all(&self) -> bool {
        self.chain.is_some()
    }

    pub fn is_available(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Slot::Live(handle)) if handle.is_live())
    }

    pub fn live_count(&self) -> usize {
        (0..self.slots.len()).filter(|&i| self.is_available(i)).count()
    }

    /// Text shown in place of a surface that could not be created
    pub fn failure_message(&self, index: usize) -> Option<String> {
        match self.slots.get(index) {
            Some(Slot::Failed(_)) => self
                .characters
                .get(index)
                .map(|c| format!("Could not load animation for {c}")),
            _ => None,
        }
    }

    pub fn failure(&self, index: usize) -> Option<&SurfaceError> {
        match self.slots.get(index) {
            Some(Slot::Failed(e)) => Some(e),
            _ => None,
        }
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    pub fn surface_size(&self) -> u32 {
        self.size
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Highlighted character for the prev/next controls
    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) -> usize {
        if !self.characters.is_empty() {
            self.focused = (self.focused + 1) % self.characters.len();
        }
        self.focused
    }

    pub fn focus_prev(&mut self) -> usize {
        if !self.characters.is_empty() {
            self.focused = self
                .focused
                .checked_sub(1)
                .unwrap_or(self.characters.len() - 1);
        }
        self.focused
    }

    /// "Character 2 of 3", only for multi-character words
    pub fn position_label(&self) -> Option<String> {
        (self.characters.len() > 1)
            .then(|| format!("Character {} of {}", self.focused + 1, self.characters.len()))
    }
}

impl<P: SurfaceProvider> Drop for StudySession<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}
