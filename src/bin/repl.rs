use tally::*;

fn main() -> Result<(), rustyline::error::ReadlineError> {
    let mut rl = rustyline::DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => match syntax::Parser::new(&line).parse() {
                Ok(expr) => println!("{}", eval::evaluate(&expr)),
                Err(error) => eprintln!("error: {error}"),
            },
            Err(error) => {
                println!("Bye! ({error})");
                break;
            }
        }
    }

    Ok(())
}
