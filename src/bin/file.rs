use std::{env, fs, time};
use tally::*;

fn main() {
    // Skip the program name
    let mut args = env::args().skip(1);
    match args.next() {
        Some(file_name) => {
            let buffer = fs::read_to_string(file_name).expect("Failed to read file");

            let start = time::Instant::now();
            for (index, line) in buffer.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }

                match syntax::Parser::new(line).parse() {
                    Ok(expr) => println!("{}", eval::evaluate(&expr)),
                    Err(error) => eprintln!("error on line {}: {error}", index + 1),
                }
            }
            println!("[Evaluating took: {:?}]", start.elapsed());
        }
        None => {
            println!("Usage: tally [script]");
        }
    }
}
