use redact_path::{Redactable, redact};

#[derive(Redactable)]
struct Token(String);

#[derive(Redactable)]
struct Empty;

fn main() {
    let mut token = Token("abc".into());
    redact(&["0"], &mut token).unwrap();
    assert!(token.0.is_empty());

    let mut empty = Empty;
    redact::<&str>(&[], &mut empty).unwrap();
}
