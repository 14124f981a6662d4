/// Builds a [`Record`](crate::Record) from a list of fields.
///
/// `null` stands for SQL `NULL`; any other token tree is converted with
/// `Field::from`, so string literals, `String`s and `Option`s all work.
///
/// ```rust
/// use pg_composite::{record, Field};
///
/// let r = record!["1", null, ""];
/// assert_eq!(r.to_literal().unwrap(), r#"(1,,"")"#);
/// ```
#[macro_export]
macro_rules! record {
    (@field null) => {
        $crate::Field::Null
    };

    (@field $value:tt) => {
        $crate::Field::from($value)
    };

    () => {
        $crate::Record::new()
    };

    ($($elem:tt),+ $(,)?) => {
        $crate::Record::from(vec![$($crate::record!(@field $elem)),+])
    };
}
