/// The two operations that can hold the busy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Ask,
}

/// Session-wide in-flight indicator shared by upload and ask.
///
/// There is exactly one flag: while either operation is in flight both entry
/// points are gated. The operation is remembered only to pick the busy label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusyFlag {
    #[default]
    Idle,
    Busy(Operation),
}

impl BusyFlag {
    pub fn is_busy(self) -> bool {
        matches!(self, BusyFlag::Busy(_))
    }

    pub fn operation(self) -> Option<Operation> {
        match self {
            BusyFlag::Idle => None,
            BusyFlag::Busy(operation) => Some(operation),
        }
    }

    /// Marks `operation` as in flight. Does not check whether another
    /// operation already holds the flag; gating is the front end's job.
    pub(crate) fn acquire(&mut self, operation: Operation) {
        *self = BusyFlag::Busy(operation);
    }

    pub(crate) fn release(&mut self) {
        *self = BusyFlag::Idle;
    }
}
