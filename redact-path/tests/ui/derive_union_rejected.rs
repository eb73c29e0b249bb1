use redact_path::Redactable;

#[derive(Redactable)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
