// SPDX-License-Identifier: Apache-2.0

//! A tiny arithmetic reducer over the extended grammar. Operators are
//! applied left to right with no precedence; parenthesized groups reduce
//! first.

use std::env;

use jscan::{Grammar, Scanner, Token};
use log::debug;

fn main() {
    env_logger::init();

    let args: Vec<_> = env::args().collect();
    let expr = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        String::from("1 + (2 * 10) / 7 - -5")
    };

    let mut scanner = Scanner::with_grammar(&expr, Grammar::Extended);
    let result = reduce(&mut scanner);
    if let Some(e) = scanner.last_error() {
        eprintln!("Error: bad expression at byte {}: {}", scanner.pos(), e);
        std::process::exit(1);
    }
    println!("{} = {}", expr, result);
}

/// Reduces tokens up to the end of the current group or the end of input.
fn reduce(scanner: &mut Scanner) -> i64 {
    let mut acc = 0;
    let mut op = b'+';
    loop {
        let token = scanner.next();
        let operand = match token {
            Token::Eof | Token::End => return acc,
            Token::Group => reduce(scanner),
            Token::Int => scanner.int_value(),
            Token::Float => scanner.float_value() as i64,
            Token::Symbol => {
                op = operator(scanner);
                continue;
            }
            _ => continue,
        };
        acc = apply(acc, op, operand);
        debug!("acc = {} after {} {}", acc, op as char, operand);
    }
}

fn operator(scanner: &Scanner) -> u8 {
    for op in ["+", "-", "*", "/"] {
        if scanner.str_eq(op) {
            return op.as_bytes()[0];
        }
    }
    eprintln!("Error: unknown operator '{}'", scanner.str_value());
    std::process::exit(1);
}

fn apply(acc: i64, op: u8, operand: i64) -> i64 {
    match op {
        b'+' => acc.wrapping_add(operand),
        b'-' => acc.wrapping_sub(operand),
        b'*' => acc.wrapping_mul(operand),
        _ => acc.checked_div(operand).unwrap_or(0),
    }
}
