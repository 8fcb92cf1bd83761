//! Instruction gateway
//!
//! Line-oriented front end for the order book: reads instructions from a
//! file argument or stdin, dispatches them to one `OrderBook`, and writes
//! `TRADE` lines and book reports to stdout. Diagnostics go to stderr so
//! stdout stays machine-readable.
//!
//! Malformed lines and rejected operations are skipped silently at the
//! output level; both are logged at debug.

mod instruction;
mod report;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Result;
use matching_engine::OrderBook;

use instruction::Instruction;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut book = OrderBook::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match std::env::args().nth(1) {
        Some(path) => run(&mut book, BufReader::new(File::open(path)?), &mut out),
        None => run(&mut book, io::stdin().lock(), &mut out),
    }
}

/// Process instruction lines until the input is exhausted
///
/// One instruction at a time, each run to completion — including its full
/// matching walk and all trade output — before the next line is read.
fn run(book: &mut OrderBook, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        match line.parse::<Instruction>() {
            Ok(instruction) => dispatch(book, instruction, out)?,
            Err(err) => tracing::debug!(line = %line, error = %err, "skipping malformed instruction"),
        }
    }
    out.flush()?;
    Ok(())
}

fn dispatch(book: &mut OrderBook, instruction: Instruction, out: &mut impl Write) -> Result<()> {
    match instruction {
        Instruction::Submit {
            side,
            time_in_force,
            price,
            quantity,
            id,
        } => match book.submit(side, time_in_force, price, quantity, id) {
            Ok(trades) => report::write_trades(out, &trades)?,
            Err(err) => tracing::debug!(error = %err, "submit rejected"),
        },
        Instruction::Cancel { id } => {
            if !book.cancel(&id) {
                tracing::debug!(order_id = %id, "cancel ignored, unknown order id");
            }
        }
        Instruction::Modify {
            id,
            side,
            price,
            quantity,
        } => match book.modify(&id, side, price, quantity) {
            Ok(trades) => report::write_trades(out, &trades)?,
            Err(err) => tracing::debug!(error = %err, "modify rejected"),
        },
        Instruction::Print => report::write_book(out, &book.snapshot())?,
    }
    Ok(())
}
