//! Fetch Sequencing
//!
//! Numbers each idea fetch so only the newest request's reply is applied.

/// Sequence number handed out when a fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSequencer {
    latest: u64,
}

impl FetchSequencer {
    /// Start a new fetch; supersedes every earlier ticket
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let mut seq = FetchSequencer::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(second > first);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn test_only_newest_is_latest() {
        let mut seq = FetchSequencer::default();
        let first = seq.issue();
        assert!(seq.is_latest(first));

        let second = seq.issue();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }
}
