//! Instruction parsing
//!
//! Translates whitespace-separated instruction lines into the normalized
//! request enum consumed by the order book. The verb set is closed, so the
//! mapping is a plain tagged enum rather than any dynamic dispatch.
//!
//! Wire grammar:
//! ```text
//! BUY|SELL  IOC|GFD  price  quantity  order-id
//! CANCEL    order-id
//! MODIFY    order-id  BUY|SELL  price  quantity
//! PRINT
//! ```

use std::str::FromStr;
use thiserror::Error;
use types::errors::ValidationError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Side, TimeInForce};

/// One normalized request for the order book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Submit {
        side: Side,
        time_in_force: TimeInForce,
        price: Price,
        quantity: Quantity,
        id: OrderId,
    },
    Cancel {
        id: OrderId,
    },
    Modify {
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    },
    Print,
}

/// Why a line could not be turned into an instruction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty instruction")]
    Empty,

    #[error("unknown verb: {0}")]
    UnknownVerb(String),

    #[error("wrong number of arguments for {verb}: expected {expected}, got {got}")]
    Arity {
        verb: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid side: {0}")]
    InvalidSide(String),

    #[error("invalid time in force: {0}")]
    InvalidTimeInForce(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Err(ParseError::Empty);
        };

        match verb {
            "BUY" | "SELL" => {
                expect_arity(verb_name(verb), args, 4)?;
                Ok(Instruction::Submit {
                    side: parse_side(verb)?,
                    time_in_force: parse_time_in_force(args[0])?,
                    price: parse_price(args[1])?,
                    quantity: parse_quantity(args[2])?,
                    id: OrderId::try_new(args[3])?,
                })
            }
            "CANCEL" => {
                expect_arity("CANCEL", args, 1)?;
                Ok(Instruction::Cancel {
                    id: OrderId::try_new(args[0])?,
                })
            }
            "MODIFY" => {
                expect_arity("MODIFY", args, 4)?;
                Ok(Instruction::Modify {
                    id: OrderId::try_new(args[0])?,
                    side: parse_side(args[1])?,
                    price: parse_price(args[2])?,
                    quantity: parse_quantity(args[3])?,
                })
            }
            "PRINT" => {
                expect_arity("PRINT", args, 0)?;
                Ok(Instruction::Print)
            }
            other => Err(ParseError::UnknownVerb(other.to_string())),
        }
    }
}

fn verb_name(verb: &str) -> &'static str {
    if verb == "BUY" {
        "BUY"
    } else {
        "SELL"
    }
}

fn expect_arity(verb: &'static str, args: &[&str], expected: usize) -> Result<(), ParseError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ParseError::Arity {
            verb,
            expected,
            got: args.len(),
        })
    }
}

fn parse_side(token: &str) -> Result<Side, ParseError> {
    match token {
        "BUY" => Ok(Side::Buy),
        "SELL" => Ok(Side::Sell),
        other => Err(ParseError::InvalidSide(other.to_string())),
    }
}

fn parse_time_in_force(token: &str) -> Result<TimeInForce, ParseError> {
    match token {
        "IOC" => Ok(TimeInForce::Ioc),
        "GFD" => Ok(TimeInForce::Gfd),
        other => Err(ParseError::InvalidTimeInForce(other.to_string())),
    }
}

fn parse_price(token: &str) -> Result<Price, ParseError> {
    let raw: u64 = token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))?;
    Ok(Price::try_new(raw)?)
}

fn parse_quantity(token: &str) -> Result<Quantity, ParseError> {
    let raw: u64 = token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))?;
    Ok(Quantity::try_new(raw)?)
}
