use redact_path::Redactable;

#[derive(Redactable)]
enum Never {}

fn main() {}
