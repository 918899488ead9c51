// SPDX-License-Identifier: Apache-2.0

//! Builds a document with pooled formatters, scans it back and prints an
//! indented dump. Pass a file path to dump that instead.

use std::env;
use std::fs;

use jscan::{FormatterPool, Scanner, Token};
use log::debug;

fn main() {
    env_logger::init();

    let args: Vec<_> = env::args().collect();
    let text = match args.len() {
        1 => build_sample(),
        2 => match fs::read_to_string(&args[1]) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: unable to read '{}': {}", args[1], e);
                std::process::exit(1);
            }
        },
        _ => {
            println!("Usage: {} [file.json]", args[0]);
            std::process::exit(1);
        }
    };

    println!("{}", text);
    println!();

    debug!("dumping {} bytes", text.len());
    let mut scanner = Scanner::new(&text);
    dump(&mut scanner, 0);
    if let Some(e) = scanner.last_error() {
        eprintln!("Error: scan failed at byte {}: {}", scanner.pos(), e);
        std::process::exit(1);
    }
}

fn build_sample() -> String {
    let pool = FormatterPool::new();
    pool.fill(1);

    let mut inner = pool.acquire();
    inner
        .begin_array()
        .begin_object()
        .name("blarg")
        .null()
        .end_object()
        .value_bool(true)
        .value_bool(false)
        .value_str("quux")
        .end_array();

    let mut outer = pool.acquire();
    outer
        .begin_object()
        .name("foo")
        .value_float(10.012436)
        .name("bar")
        .begin_object()
        .name("baz")
        .nested(&inner)
        .end_object()
        .end_object();
    outer.as_str().to_string()
}

/// Prints the members of the current container, one per line.
fn dump(scanner: &mut Scanner, indent: usize) {
    loop {
        let token = scanner.next();
        match token {
            Token::Eof | Token::End => return,
            Token::Setter => {
                print!("{:indent$}{}: ", "", scanner.str_value());
                let value = scanner.next();
                dump_value(scanner, value, indent);
            }
            other => {
                print!("{:indent$}", "");
                dump_value(scanner, other, indent);
            }
        }
    }
}

fn dump_value(scanner: &mut Scanner, token: Token, indent: usize) {
    match token {
        Token::Object => {
            println!("{{");
            dump(scanner, indent + 2);
            println!("{:indent$}}}", "");
        }
        Token::Array => {
            println!("[");
            dump(scanner, indent + 2);
            println!("{:indent$}]", "");
        }
        Token::Group => {
            println!("(");
            dump(scanner, indent + 2);
            println!("{:indent$})", "");
        }
        Token::Eof | Token::End => {}
        other => println!("{}", scanner.to_string(other)),
    }
}
