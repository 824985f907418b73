/// Builds a [`Value`](crate::Value) from literal-like syntax.
///
/// - `nil`, `true`, `false`
/// - `[a, b, c]` for a sequence table (a `nil` element leaves a hole)
/// - `{ key => value, ... }` for a keyed table; keys are string, integer or
///   boolean literals
/// - any other expression is converted with `Value::from`; wrap negative numbers
///   in parentheses
///
/// ```rust
/// use serde_luat::{lua, to_string_minified};
///
/// let value = lua!({ "name" => "Alice", "scores" => [1, 2, (-3)], 1 => nil });
/// assert_eq!(
///     to_string_minified(&value).unwrap(),
///     r#"{["name"]="Alice",["scores"]={1,2,-3}}"#
/// );
/// ```
#[macro_export]
macro_rules! lua {
    (nil) => {
        $crate::Value::Nil
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Table($crate::Table::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Table($crate::Table::from_sequence(vec![$($crate::lua!($elem)),*]))
    };

    ({}) => {
        $crate::Value::Table($crate::Table::new())
    };

    ({ $($key:tt => $value:tt),* $(,)? }) => {{
        let table = $crate::Table::new();
        $(
            table.set($crate::Key::from($key), $crate::lua!($value));
        )*
        $crate::Value::Table(table)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Key, Number, Value};

    #[test]
    fn test_lua_macro_primitives() {
        assert_eq!(lua!(nil), Value::Nil);
        assert_eq!(lua!(true), Value::Bool(true));
        assert_eq!(lua!(false), Value::Bool(false));
        assert_eq!(lua!(42), Value::Number(Number::Integer(42)));
        assert_eq!(lua!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(lua!("hello"), Value::String(b"hello".to_vec()));
    }

    #[test]
    fn test_lua_macro_sequences() {
        let value = lua!([1, 2, 3]);
        let table = value.as_table().unwrap();
        assert_eq!(table.sequence_len(), 3);
        assert_eq!(table.get(1), Value::from(1));
        assert_eq!(table.get(3), Value::from(3));

        let holed = lua!([1, nil, 3]);
        let table = holed.as_table().unwrap();
        assert_eq!(table.sequence_len(), 1);
        assert_eq!(table.get(3), Value::from(3));
    }

    #[test]
    fn test_lua_macro_keyed() {
        assert!(lua!({}).as_table().unwrap().is_empty());

        let value = lua!({
            "name" => "Alice",
            "age" => 30,
            true => "yes"
        });
        let table = value.as_table().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("name").as_str(), Some("Alice"));
        assert_eq!(table.get("age").as_i64(), Some(30));
        assert_eq!(table.get(Key::Bool(true)).as_str(), Some("yes"));
    }
}
