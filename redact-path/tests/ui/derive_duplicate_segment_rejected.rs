use redact_path::Redactable;

#[derive(Redactable)]
struct Login {
    password: String,
    #[redact(rename = "password")]
    legacy_password: String,
}

fn main() {}
