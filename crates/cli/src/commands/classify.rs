//! `vyomnetra classify`: print the topic tag for a message.

use vyomnetra_core::classify;

pub fn run(message: &str) {
    let topic = classify(message);
    let source = if topic.is_live() { "live feed" } else { "static" };
    println!("{topic} ({source})");
}
