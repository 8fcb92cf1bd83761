//! Report formatting
//!
//! Renders trade events and book state to the output stream. Trades go out
//! the moment they are produced, one line each, in the order they occurred.

use matching_engine::BookSnapshot;
use std::io::{self, Write};
use types::trade::Trade;

/// Write one `TRADE` line per fill, in causal order
pub fn write_trades(out: &mut impl Write, trades: &[Trade]) -> io::Result<()> {
    for trade in trades {
        writeln!(out, "{trade}")?;
    }
    Ok(())
}

/// Render the book as `SELL:` then `BUY:` sections
///
/// Feed consumers expect both sides highest price first, so the ask rows
/// are emitted worst-to-best while the bid rows come straight off the
/// best-first snapshot. A trailing blank line closes the report.
pub fn write_book(out: &mut impl Write, snapshot: &BookSnapshot) -> io::Result<()> {
    writeln!(out, "SELL:")?;
    for (price, quantity) in snapshot.asks.iter().rev() {
        writeln!(out, "{price}\t{quantity}")?;
    }
    writeln!(out, "BUY:")?;
    for (price, quantity) in &snapshot.bids {
        writeln!(out, "{price}\t{quantity}")?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;
    use types::numeric::{Price, Quantity};

    #[test]
    fn test_write_trades() {
        let trades = vec![
            Trade::new(
                OrderId::new("S1"),
                Price::new(100),
                OrderId::new("B1"),
                Price::new(101),
                Quantity::new(10),
            ),
            Trade::new(
                OrderId::new("S2"),
                Price::new(101),
                OrderId::new("B1"),
                Price::new(101),
                Quantity::new(2),
            ),
        ];

        let mut out = Vec::new();
        write_trades(&mut out, &trades).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "TRADE\tS1\t100\t10\tB1\t101\t10\nTRADE\tS2\t101\t2\tB1\t101\t2\n"
        );
    }

    #[test]
    fn test_write_book_orders_sides_highest_first() {
        let snapshot = BookSnapshot {
            asks: vec![
                (Price::new(101), Quantity::new(3)),
                (Price::new(103), Quantity::new(1)),
            ],
            bids: vec![
                (Price::new(52), Quantity::new(4)),
                (Price::new(50), Quantity::new(7)),
            ],
        };

        let mut out = Vec::new();
        write_book(&mut out, &snapshot).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "SELL:\n103\t1\n101\t3\nBUY:\n52\t4\n50\t7\n\n"
        );
    }

    #[test]
    fn test_write_empty_book() {
        let snapshot = BookSnapshot {
            asks: vec![],
            bids: vec![],
        };

        let mut out = Vec::new();
        write_book(&mut out, &snapshot).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "SELL:\nBUY:\n\n");
    }
}
