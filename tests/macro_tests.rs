use serde_luat::{lua, to_string_minified, Number, Value};

#[test]
fn test_lua_macro_nil() {
    assert_eq!(lua!(nil), Value::Nil);
}

#[test]
fn test_lua_macro_numbers() {
    assert_eq!(lua!(42), Value::Number(Number::Integer(42)));
    assert_eq!(lua!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(lua!((-123)), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_lua_macro_strings() {
    assert_eq!(lua!("hello world"), Value::from("hello world"));
    assert_eq!(lua!(""), Value::String(Vec::new()));
}

#[test]
fn test_lua_macro_mixed_sequence() {
    let value = lua!([1, "hello", true, nil, 2.5]);
    assert_eq!(
        to_string_minified(&value).unwrap(),
        r#"{1,"hello",true,[5]=2.5}"#
    );
}

#[test]
fn test_lua_macro_nested() {
    let value = lua!({
        "user" => {
            "name" => "Alice",
            "roles" => ["admin", "dev"]
        },
        "count" => 2
    });
    assert_eq!(
        to_string_minified(&value).unwrap(),
        r#"{["user"]={["name"]="Alice",["roles"]={"admin","dev"}},["count"]=2}"#
    );
}

#[test]
fn test_lua_macro_expressions() {
    let name = String::from("Bob");
    let scores = vec![Value::from(1), Value::from(2)];
    let value = lua!({ "name" => name, "scores" => scores });
    assert_eq!(
        to_string_minified(&value).unwrap(),
        r#"{["name"]="Bob",["scores"]={1,2}}"#
    );
}
