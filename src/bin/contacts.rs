use std::io::{BufRead, Write, stdin, stdout};

use miette::{IntoDiagnostic, Result, miette};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use contact_rows::{Person, SampleData};

fn print_people(out: &mut impl Write, people: &[Person]) -> Result<()> {
    for (idx, person) in people.iter().enumerate() {
        writeln!(
            out,
            "{: <4} | {: <12} | {: <14} | {: <36} | {}",
            idx, person.first_name, person.last_name, person.email_address, person.address
        )
        .into_diagnostic()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(false)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();

    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SampleData::DEFAULT_SOURCE.to_string());

    let mut data = SampleData::open(&source)?;

    println!(
        "Loaded {} rows from {}",
        data.rows().len(),
        data.store().source().display()
    );
    println!("Commands: states, aggregate, people, email <text>, rows, set <row>;<row>, reset, exit");

    let mut buf = String::new();

    let mut stdin = stdin().lock();
    let mut stdout = stdout().lock();

    loop {
        stdout.write_all(b"contacts> ").into_diagnostic()?;
        stdout.flush().into_diagnostic()?;

        buf.clear();
        let Ok(read) = stdin.read_line(&mut buf) else {
            return Err(miette!("Input reading failed"));
        };
        if read == 0 {
            break;
        }

        let input = buf.trim();
        let (command, arg) = input.split_once(' ').unwrap_or((input, ""));

        let outcome = match command {
            "" => Ok(()),
            "exit" => break,
            "states" => data.unique_sorted_states().map(|states| {
                states.iter().for_each(|state| {
                    let _ = writeln!(stdout, "{state}");
                });
            }),
            "aggregate" => data
                .aggregate_sorted_states()
                .map(|states| {
                    let _ = writeln!(stdout, "{states}");
                }),
            "people" => match data.people() {
                Ok(people) => {
                    print_people(&mut stdout, &people)?;
                    Ok(())
                }
                Err(err) => Err(err),
            },
            "email" => data
                .filter_by_email_address(|email| email.contains(arg.trim()))
                .map(|names| {
                    names.iter().for_each(|(first, last)| {
                        let _ = writeln!(stdout, "{first} {last}");
                    });
                }),
            "rows" => {
                data.rows().iter().for_each(|row| {
                    let _ = writeln!(stdout, "{row}");
                });
                Ok(())
            }
            "set" => {
                data.set_rows(arg.split(';').map(str::trim).filter(|row| !row.is_empty()));
                println!("Using {} custom rows", data.rows().len());
                Ok(())
            }
            "reset" => {
                if data.store().is_overridden() {
                    data.use_default_data();
                    println!("Restored {} default rows", data.rows().len());
                }
                Ok(())
            }
            other => {
                println!("Unknown command: {other}");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("{:?}", miette::Report::new(err));
        }

        stdout.flush().into_diagnostic()?;
    }

    println!("Exiting contacts");

    Ok(())
}
