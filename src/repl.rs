use crate::engine::Engine;
use std::io::{self, Write};

/// Interactive read loop. One engine lives for the whole session, so
/// variables assigned on earlier lines stay visible.

pub fn start() {
    println!("bigcalc v0.1.0");
    println!("Type /help for usage or /exit to quit");
    println!();

    let mut engine = Engine::new();

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // EOF reached (Ctrl+D or piped input ended)
                println!();
                break;
            }
            Ok(_) => {
                let line = line.trim();
                match engine.input(line) {
                    Ok(reply) => {
                        if let Some(output) = reply.output {
                            println!("{}", output);
                        }
                        if !reply.keep_reading {
                            break;
                        }
                    }
                    Err(error) => {
                        error.report(line, None);
                    }
                }
            }
            Err(error) => {
                eprintln!("Error reading input: {}", error);
                break;
            }
        }
    }
}
