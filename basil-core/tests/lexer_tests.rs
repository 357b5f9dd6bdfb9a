//! End-to-end lexer behavior

mod common;
use basil_core::{LexErrorKind, LexerConfig, Literal, Scanner, Source, TokenKind, UnrecognizedPolicy};
use common::{assert_lockstep, lex, lex_with, line0};

#[test]
fn test_expression_line() {
    assert_eq!(line0("12+3.5*2"), ["INT:12", "PLUS", "FLOAT:3.5", "MUL", "INT:2"]);
}

#[test]
fn test_single_quoted_string() {
    assert_eq!(line0("'hello'"), ["STR:'hello'"]);
}

#[test]
fn test_two_lines_three_tokens_each() {
    let stream = lex("1+1\n2*2").unwrap();
    assert_eq!(stream.line_count(), 2);
    assert_eq!(stream.display()[0], ["INT:1", "PLUS", "INT:1"]);
    assert_eq!(stream.display()[1], ["INT:2", "MUL", "INT:2"]);
    assert_lockstep(&stream);
}

#[test]
fn test_numbers_round_trip() {
    let cases = ["0", "7", "42", "1234567890", "0.5", "3.25", "10.0", "007", "1.", "9223372036854775807"];
    for case in cases {
        let stream = lex(case).unwrap();
        let tokens = &stream.tokens()[0];
        assert_eq!(tokens.len(), 1, "{} should be one token", case);
        let token = &tokens[0];
        let rendered = token.literal().unwrap().to_string();
        if case.contains('.') {
            assert_eq!(token.kind(), TokenKind::Float);
            let expected: f64 = case.parse().unwrap();
            assert_eq!(rendered.parse::<f64>().unwrap(), expected, "{}", case);
        } else {
            assert_eq!(token.kind(), TokenKind::Int);
            let expected: i64 = case.parse().unwrap();
            assert_eq!(rendered.parse::<i64>().unwrap(), expected, "{}", case);
        }
    }
}

#[test]
fn test_extra_decimal_points_always_fail() {
    for case in ["1.2.3", "1..2", "0.0.0", "5..", "12.34.56.78", "x 1.2.3 y"] {
        let err = lex(case).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::MalformedNumber, "{}", case);
        assert_eq!(err.name(), "MalformedNumericLiteral");
        assert_eq!(err.text.matches('.').count(), 1, "{}", case);
    }
}

#[test]
fn test_malformed_number_on_later_line() {
    let err = lex("1\n2\n 3.3.3").unwrap_err();
    assert_eq!(err.line(), 3);
    assert_eq!(err.column(), 2);
    assert_eq!(err.text, "3.3");
}

#[test]
fn test_strings_close_only_on_same_quote() {
    for (input, expected) in [
        ("'a\"b'", "STR:'a\"b'"),
        ("\"a'b\"", "STR:\"a'b\""),
        ("''", "STR:''"),
        ("\"1+2\"", "STR:\"1+2\""),
    ] {
        assert_eq!(line0(input), [expected], "{}", input);
    }
}

#[test]
fn test_unterminated_strings() {
    for input in ["\"abc'", "'abc", "\"", "1 + 'x"] {
        let err = lex(input).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString, "{}", input);
        assert_eq!(err.name(), "UnterminatedString");
    }
}

#[test]
fn test_string_literal_is_verbatim() {
    let stream = lex(r"'a\nb'").unwrap();
    let literal = stream.tokens()[0][0].literal().cloned();
    assert_eq!(literal, Some(Literal::Text(r"'a\nb'".to_string())));
}

#[test]
fn test_buffer_and_lines_variants_agree() {
    let lines = ["1 + 2", "'s' * 3.5", "", "4/2"];
    let from_lines = Scanner::default().scan(&Source::from_lines(&lines)).unwrap();
    let from_text = lex(&lines.join("\n")).unwrap();
    assert_eq!(from_lines, from_text);
    assert_eq!(from_lines.line_count(), 4);
}

#[test]
fn test_crlf_input() {
    let stream = lex("1+1\r\n2*2\r\n").unwrap();
    assert_eq!(stream.line_count(), 3);
    assert_eq!(stream.display()[1], ["INT:2", "MUL", "INT:2"]);
}

#[test]
fn test_identifier_kind_never_produced() {
    let (result, diagnostics) = lex_with(LexerConfig::default(), "abc + 1");
    let stream = result.unwrap();
    assert!(stream.iter().all(|(_, t)| t.kind() != TokenKind::Ident));
    assert_eq!(diagnostics.len(), 3);
}

#[test]
fn test_policies_agree_on_tokens() {
    let input = "a1 + b2.5 ; 'c'";
    let collect = lex_with(LexerConfig::default(), input).0.unwrap();
    let skip = lex_with(
        LexerConfig {
            unrecognized: UnrecognizedPolicy::Skip,
            ..Default::default()
        },
        input,
    )
    .0
    .unwrap();
    assert_eq!(collect, skip);

    let reject = lex_with(
        LexerConfig {
            unrecognized: UnrecognizedPolicy::Reject,
            ..Default::default()
        },
        input,
    )
    .0;
    assert_eq!(reject.unwrap_err().kind, LexErrorKind::UnrecognizedCharacter);
}

#[test]
fn test_remove_after_scan_keeps_lockstep() {
    let mut stream = lex("1+2\n3*4-5").unwrap();
    stream.remove(1, 1).unwrap();
    stream.remove(0, 0).unwrap();
    assert_eq!(stream.display()[0], ["PLUS", "INT:2"]);
    assert_eq!(stream.display()[1], ["INT:3", "INT:4", "MINUS", "INT:5"]);
    assert_lockstep(&stream);
}

#[test]
fn test_stream_json_shape() {
    let stream = lex("1 'a'").unwrap();
    let json = serde_json::to_value(&stream).unwrap();
    assert_eq!(json["display"][0][1], "STR:'a'");
    assert_eq!(json["tokens"][0][0]["literal"], 1);
    assert_eq!(json["tokens"][0][1]["span"]["start"]["column"], 3);
}
