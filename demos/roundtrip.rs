//! Round-trip demo - run with: cargo run --example roundtrip [text]

use std::env;

use morse_translator::{decode, encode};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let text = if args.is_empty() {
        "the quick brown fox\njumps over 2 lazy dogs".to_string()
    } else {
        args.join(" ")
    };

    println!("Text:");
    println!("{}", text);
    println!();

    let morse = match encode(&text) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error encoding: {}", e);
            std::process::exit(1);
        }
    };
    println!("Morse:");
    println!("{}", morse);
    println!();

    match decode(&morse) {
        Ok(decoded) => {
            println!("Decoded:");
            println!("{}", decoded);
        }
        Err(e) => {
            eprintln!("Error decoding: {}", e);
            std::process::exit(1);
        }
    }
}
