use redact_path::{Redactable, redact};

#[derive(Default, Redactable)]
enum Secret {
    #[default]
    None,
    Text(String),
    Pair { left: String, right: String },
}

fn main() {
    let mut secret = Secret::Pair {
        left: "a".into(),
        right: "b".into(),
    };
    redact(&["left"], &mut secret).unwrap();
    assert!(matches!(secret, Secret::Pair { ref left, .. } if left.is_empty()));

    let mut secret = Secret::Text("x".into());
    redact::<&str>(&[], &mut secret).unwrap();
    assert!(matches!(secret, Secret::None));
}
