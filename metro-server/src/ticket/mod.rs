//! Tickets, ticket issuing and the ticket ledger.
//!
//! Ticketing sits above the routing service: a [`TripQuote`] becomes a
//! [`Ticket`] once it has an id and an issue time, and the ticket is then
//! appended to a [`Ledger`].

mod id;
mod ledger;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Fare, StationId};
use crate::planner::TripQuote;

pub use id::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use ledger::{JsonLinesLedger, Ledger, LedgerError, MemoryLedger};

/// An issued ticket. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: String,
    origin: StationId,
    destination: StationId,
    price: Fare,
    instructions: Vec<String>,
    issued_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl Ticket {
    /// Create a ticket from its parts.
    pub fn new(
        id: String,
        origin: StationId,
        destination: StationId,
        price: Fare,
        instructions: Vec<String>,
        issued_at: DateTime<Utc>,
        note: Option<String>,
    ) -> Self {
        Self {
            id,
            origin,
            destination,
            price,
            instructions,
            issued_at,
            note,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn origin(&self) -> &StationId {
        &self.origin
    }

    pub fn destination(&self) -> &StationId {
        &self.destination
    }

    pub fn price(&self) -> Fare {
        self.price
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticket {}", self.id)?;
        writeln!(f, "From:   {}", self.origin)?;
        writeln!(f, "To:     {}", self.destination)?;
        writeln!(f, "Price:  {}", self.price)?;
        writeln!(f, "Issued: {}", self.issued_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        for (i, step) in self.instructions.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, step)?;
        }
        if let Some(note) = &self.note {
            writeln!(f, "Note:   {note}")?;
        }
        Ok(())
    }
}

/// Turns quotes into tickets using an injected id source.
#[derive(Debug)]
pub struct TicketIssuer<G> {
    ids: G,
}

impl<G: IdGenerator> TicketIssuer<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    /// Issue a ticket for a quote.
    ///
    /// Blank notes are dropped.
    pub fn issue(
        &self,
        quote: &TripQuote,
        note: Option<String>,
        issued_at: DateTime<Utc>,
    ) -> Ticket {
        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ticket::new(
            self.ids.next_id(issued_at),
            quote.origin.clone(),
            quote.destination.clone(),
            quote.price,
            quote.instructions.clone(),
            issued_at,
            note,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn quote() -> TripQuote {
        TripQuote {
            origin: sid("A"),
            destination: sid("C"),
            stations: vec![sid("A"), sid("B"), sid("C")],
            hops: 2,
            price: Fare::from_pence(210),
            instructions: vec![
                "Board Red at Alpha".to_string(),
                "Travel 2 stop(s) on Red to Charlie".to_string(),
            ],
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn issue_copies_quote() {
        let issuer = TicketIssuer::new(SequentialIdGenerator::new("T"));
        let ticket = issuer.issue(&quote(), Some("window seat".into()), noon());

        assert_eq!(ticket.id(), "T-1");
        assert_eq!(ticket.origin(), &sid("A"));
        assert_eq!(ticket.destination(), &sid("C"));
        assert_eq!(ticket.price(), Fare::from_pence(210));
        assert_eq!(ticket.instructions().len(), 2);
        assert_eq!(ticket.issued_at(), noon());
        assert_eq!(ticket.note(), Some("window seat"));
    }

    #[test]
    fn blank_note_dropped() {
        let issuer = TicketIssuer::new(SequentialIdGenerator::new("T"));
        assert_eq!(issuer.issue(&quote(), Some("   ".into()), noon()).note(), None);
        assert_eq!(issuer.issue(&quote(), None, noon()).note(), None);
    }

    #[test]
    fn ids_come_from_generator() {
        let issuer = TicketIssuer::new(SequentialIdGenerator::new("T"));
        let a = issuer.issue(&quote(), None, noon());
        let b = issuer.issue(&quote(), None, noon());
        assert_eq!(a.id(), "T-1");
        assert_eq!(b.id(), "T-2");
    }

    #[test]
    fn display_receipt() {
        let issuer = TicketIssuer::new(SequentialIdGenerator::new("T"));
        let ticket = issuer.issue(&quote(), Some("return later".into()), noon());

        assert_eq!(
            ticket.to_string(),
            "Ticket T-1\n\
             From:   A\n\
             To:     C\n\
             Price:  £2.10\n\
             Issued: 2024-03-15 12:00:00 UTC\n\
             \x20 1. Board Red at Alpha\n\
             \x20 2. Travel 2 stop(s) on Red to Charlie\n\
             Note:   return later\n"
        );
    }

    #[test]
    fn serde_omits_missing_note() {
        let issuer = TicketIssuer::new(SequentialIdGenerator::new("T"));
        let ticket = issuer.issue(&quote(), None, noon());

        let json = serde_json::to_value(&ticket).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["price"], 210);

        let back: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(back, ticket);
    }
}
