use crate::engine::Engine;

/// Feeds every line of a script through a single engine, so assignments on
/// earlier lines are visible to later ones. A `/exit` line stops the run.

pub fn run(source: &str, filename: Option<&str>) {
    let mut engine = Engine::new();

    for line in source.lines() {
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
                error.report(line, filename);
            }
        }
    }
}
