use std::{marker::PhantomData, time::Instant};

use redact_path::{Redactable, redact};

struct Foreign;

#[derive(Redactable)]
struct Tagged<T> {
    value: T,
    #[redact(skip)]
    started: Option<Instant>,
    _marker: PhantomData<Foreign>,
}

fn main() {
    let mut tagged = Tagged {
        value: Some(String::from("secret")),
        started: Some(Instant::now()),
        _marker: PhantomData,
    };
    redact(&["value"], &mut tagged).unwrap();
    assert!(tagged.value.is_none());
    assert!(tagged.started.is_some());
}
