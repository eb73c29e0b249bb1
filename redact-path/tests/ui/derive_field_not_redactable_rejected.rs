use redact_path::Redactable;

#[derive(Redactable)]
struct Window {
    title: String,
    bounds: (u32, u32),
}

fn main() {}
