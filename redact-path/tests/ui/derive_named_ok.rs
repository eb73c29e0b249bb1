use redact_path::{Redactable, redact};

#[derive(Redactable)]
#[redact(rename_all = "SCREAMING_SNAKE_CASE")]
struct Login {
    user_name: String,
    #[redact(rename = "SECRET")]
    password: String,
}

fn main() {
    let mut login = Login {
        user_name: "john".into(),
        password: "letmein".into(),
    };
    redact(&["USER_NAME"], &mut login).unwrap();
    redact(&["SECRET"], &mut login).unwrap();
    assert!(login.user_name.is_empty());
    assert!(login.password.is_empty());
}
