use kanal::Sender;

/// What a provider action was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketKind {
    Animate,
    Practice,
    /// One step of a play-all chain
    Chain { generation: u64 },
}

/// Identifies one provider action issued by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    /// Surface batch the action was issued against
    pub(crate) epoch: u64,
    pub(crate) index: usize,
    pub(crate) request: u64,
    pub(crate) kind: TicketKind,
}

impl Ticket {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> TicketKind {
        self.kind
    }
}

/// Completion callback handed to a surface with every animate or quiz call.
/// The surface fires it exactly once when the action ends.
pub struct Completion {
    ticket: Ticket,
    tx: Sender<Ticket>,
}

impl Completion {
    pub(crate) fn new(ticket: Ticket, tx: Sender<Ticket>) -> Self {
        Self { ticket, tx }
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Report the action as finished
    pub fn fire(self) {
        if self.tx.send(self.ticket).is_err() {
            tracing::debug!(
                "Completion for character {} dropped, session is gone",
                self.ticket.index
            );
        }
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("ticket", &self.ticket)
            .finish()
    }
}
