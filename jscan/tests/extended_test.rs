// SPDX-License-Identifier: Apache-2.0

// Extended-grammar scanning: bare symbols, groups, symbol setters.

use jscan::{Grammar, Scanner, Token};
use test_log::test;

fn extended(text: &str) -> Scanner<'_> {
    Scanner::with_grammar(text, Grammar::Extended)
}

#[test]
fn expression_token_sequence() {
    let mut scanner = extended("1 + (2 * 10) / 7 - -5");

    assert_eq!(scanner.next(), Token::Int);
    assert_eq!(scanner.int_value(), 1);
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("+"));
    assert_eq!(scanner.next(), Token::Group);
    assert_eq!(scanner.next(), Token::Int);
    assert_eq!(scanner.int_value(), 2);
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("*"));
    assert_eq!(scanner.next(), Token::Int);
    assert_eq!(scanner.int_value(), 10);
    assert_eq!(scanner.next(), Token::End);
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("/"));
    assert_eq!(scanner.next(), Token::Int);
    assert_eq!(scanner.int_value(), 7);
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("-"));
    assert_eq!(scanner.next(), Token::Int);
    assert_eq!(scanner.int_value(), -5);
    assert_eq!(scanner.next(), Token::Eof);
    assert_eq!(scanner.last_error(), None);
}

#[test]
fn expression_reduces_left_to_right() {
    fn reduce(scanner: &mut Scanner) -> i64 {
        let mut acc = 0;
        let mut op = b'+';
        loop {
            let t = scanner.next();
            let operand = match t {
                Token::Eof | Token::End => return acc,
                Token::Group => reduce(scanner),
                Token::Int => scanner.int_value(),
                Token::Symbol => {
                    op = scanner.str_value().as_bytes()[0];
                    continue;
                }
                _ => continue,
            };
            acc = match op {
                b'+' => acc + operand,
                b'-' => acc - operand,
                b'*' => acc * operand,
                _ => acc / operand,
            };
        }
    }

    let mut scanner = extended("1 + (2 * 10) / 7 - -5");
    assert_eq!(reduce(&mut scanner), 8);
}

#[test]
fn bare_words_are_symbols_not_literals() {
    let mut scanner = extended("[true,alpha,null]");
    assert_eq!(scanner.next(), Token::Array);
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("true"));
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("alpha"));
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("null"));
    assert_eq!(scanner.next(), Token::End);
}

#[test]
fn symbol_with_a_touching_colon_is_a_setter() {
    let mut scanner = extended("{mode:fast,level:3}");
    assert_eq!(scanner.next(), Token::Object);
    assert_eq!(scanner.next(), Token::Setter);
    assert!(scanner.str_eq("mode"));
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("fast"));
    assert_eq!(scanner.next(), Token::Setter);
    assert!(scanner.str_eq("level"));
    assert_eq!(scanner.next(), Token::Int);
    assert_eq!(scanner.int_value(), 3);
    assert_eq!(scanner.next(), Token::End);
}

#[test]
fn symbols_break_on_brackets_and_quotes() {
    let mut scanner = extended(r#"cmd(arg"lit"done)"#);
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("cmd"));
    assert_eq!(scanner.next(), Token::Group);
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("arg"));
    assert_eq!(scanner.next(), Token::Str);
    assert!(scanner.str_eq("lit"));
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("done"));
    assert_eq!(scanner.next(), Token::End);
    assert_eq!(scanner.next(), Token::Eof);
    assert_eq!(scanner.last_error(), None);
}

#[test]
fn group_skip_and_raw_span() {
    let mut scanner = extended("f (a (b c) d) g");
    assert_eq!(scanner.next(), Token::Symbol);
    let t = scanner.next();
    assert_eq!(t, Token::Group);
    assert_eq!(scanner.raw_span(t), "(a (b c) d)");
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("g"));
}

#[test]
fn parens_are_not_special_in_the_classic_grammar() {
    let mut scanner = Scanner::new("(1)");
    assert_eq!(scanner.next(), Token::Eof);
    assert!(scanner.last_error().is_some());
}

#[test]
fn caller_interprets_boolean_symbols() {
    let mut scanner = extended("enabled: true");
    assert_eq!(scanner.next(), Token::Setter);
    assert!(scanner.str_eq("enabled"));
    assert_eq!(scanner.next(), Token::Symbol);
    assert!(scanner.str_eq("true"));
    assert!(!scanner.str_eq("false"));
}
