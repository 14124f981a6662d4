use pg_composite::{
    from_slice, parse, serialize, serialize_to_writer, serialize_with_options, validate,
    CompositeOptions, EmptyPolicy, Error, Field, FormatErrorKind, Parser, Record,
};

fn assert_roundtrip(fields: Vec<Field>) {
    let literal = serialize(&fields).unwrap();
    println!("Literal: {}", literal);

    assert!(validate(&literal), "serializer output must validate: {}", literal);

    let back: Vec<Field> = parse(&literal).collect::<Result<_, _>>().unwrap();
    assert_eq!(back, fields);
    assert_eq!(serialize(&back).unwrap(), literal);
}

#[test]
fn test_simple_row() {
    assert_roundtrip(vec![Field::from("42"), Field::from("Alice"), Field::from("t")]);
}

#[test]
fn test_nulls_and_empty_strings() {
    assert_roundtrip(vec![Field::Null]);
    assert_roundtrip(vec![Field::from("")]);
    assert_roundtrip(vec![Field::Null, Field::from(""), Field::Null]);
}

#[test]
fn test_special_characters() {
    assert_roundtrip(vec![
        Field::from("2024-01-15 10:30:00+00"),
        Field::from("{1,2,3}"),
        Field::from("line\nbreak"),
        Field::from("\"\""),
        Field::from("\\\\"),
        Field::from("()"),
        Field::from(",,,"),
        Field::from("ünïcödé ✓"),
        Field::from("\u{2003}em space"),
    ]);
}

#[test]
fn test_postgres_row_output() {
    // SELECT ROW(1, NULL, 'O''Reilly', '', 'a "b"', E'c:\\d')
    let record: Record = r#"(1,,O'Reilly,"","a ""b""","c:\\d")"#.parse().unwrap();
    assert_eq!(
        record,
        Record::from(vec![
            Field::from("1"),
            Field::Null,
            Field::from("O'Reilly"),
            Field::from(""),
            Field::from("a \"b\""),
            Field::from("c:\\d"),
        ])
    );
}

#[test]
fn test_non_canonical_quoting_is_accepted() {
    // Quotes around a value that does not need them are dropped on output.
    let record: Record = r#"("abc","1")"#.parse().unwrap();
    assert_eq!(record.to_literal().unwrap(), "(abc,1)");
}

#[test]
fn test_partial_consumption_hides_later_errors() {
    let mut parser = parse(r#"(first,"second"oops)"#);
    assert_eq!(parser.next(), Some(Ok(Field::from("first"))));
    assert_eq!(parser.next(), Some(Ok(Field::from("second"))));

    let err = parser.next().unwrap().unwrap_err();
    assert_eq!(
        err,
        Error::Format {
            position: 15,
            kind: FormatErrorKind::ExpectedDelimiterAfterQuote
        }
    );
    assert_eq!(parser.next(), None);
}

#[test]
fn test_take_prefix_of_malformed_literal() {
    let prefix: Vec<Field> = parse("(a,b,\"never closed")
        .take(2)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(prefix, vec![Field::from("a"), Field::from("b")]);
}

#[test]
fn test_options() {
    let empty: Vec<Field> = Vec::new();

    let strict = serialize_with_options(&empty, CompositeOptions::new());
    assert_eq!(strict, Err(Error::EmptyInput));

    let lenient = serialize_with_options(
        &empty,
        CompositeOptions::new().with_empty_policy(EmptyPolicy::Null),
    );
    assert_eq!(lenient, Ok(None));

    let options: CompositeOptions = serde_json::from_str(r#"{"empty":"null"}"#).unwrap();
    assert_eq!(options, CompositeOptions::legacy());
    let options: CompositeOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, CompositeOptions::default());
}

#[test]
fn test_to_writer() {
    let mut buffer = Vec::new();
    serialize_to_writer(&mut buffer, [Some("a,b"), None]).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), r#"("a,b",)"#);

    let mut buffer = Vec::new();
    let err = serialize_to_writer(&mut buffer, Vec::<Field>::new()).unwrap_err();
    assert_eq!(err, Error::EmptyInput);
    assert!(buffer.is_empty());
}

#[test]
fn test_from_slice() {
    let parsed: Vec<Field> = from_slice("(ä,\"b c\")".as_bytes())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(parsed, vec![Field::from("ä"), Field::from("b c")]);

    let err = from_slice(b"(\xff)").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn test_field_serde_representation() {
    let fields = vec![Field::Null, Field::from(""), Field::from("x")];
    let json = serde_json::to_string(&fields).unwrap();
    assert_eq!(json, r#"[null,"","x"]"#);

    let back: Vec<Field> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, fields);

    assert!(serde_json::from_str::<Field>("42").is_err());
}

#[test]
fn test_parser_is_cloneable_mid_stream() {
    let mut parser: Parser<'_> = parse("(a,b,c)");
    parser.next();
    let rest: Vec<Field> = parser.clone().collect::<Result<_, _>>().unwrap();
    assert_eq!(rest, vec![Field::from("b"), Field::from("c")]);
    assert_eq!(parser.count(), 2);
}
