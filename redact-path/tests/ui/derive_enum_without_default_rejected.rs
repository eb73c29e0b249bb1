use redact_path::Redactable;

#[derive(Redactable)]
enum Token {
    Bearer(String),
    Basic { user: String, password: String },
}

fn main() {}
