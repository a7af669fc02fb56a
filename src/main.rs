use std::io::Read;

use csv::{ReaderBuilder, Trim};
use tokio::sync::mpsc;

mod bank;

use bank::Command;

/// The size of the channel for processing commands.
const CHANNEL_SIZE: usize = 100;

#[tokio::main]
async fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() > 2 {
        eprintln!("Usage: {} [input_file]", args[0]);
        std::process::exit(1);
    }

    let (sender, receiver) = mpsc::channel(CHANNEL_SIZE);
    let mut state = bank::State::new(receiver);

    let handle = tokio::spawn(async move {
        state.run().await;
    });

    // Commands arrive on standard input unless a file is named on the
    // command line.
    let input: Box<dyn Read> = match args.get(1) {
        Some(path) => Box::new(std::fs::File::open(path).expect("Failed to open input file")),
        None => Box::new(std::io::stdin()),
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .flexible(true)
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(input);
    let mut records = reader.records();

    // The first line carries the number of operations to process.
    let count = records
        .next()
        .and_then(|record| record.ok())
        .and_then(|record| record.get(0).and_then(|field| field.parse::<usize>().ok()));
    let Some(count) = count else {
        eprintln!("Expected an operation count on the first input line");
        std::process::exit(1);
    };

    for _ in 0..count {
        let Some(record) = records.next() else {
            break;
        };
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                eprintln!("Error reading command: {err}");
                continue;
            }
        };
        match Command::parse(&record) {
            Ok(command) => {
                if let Err(err) = sender.send(command).await {
                    eprintln!("Error sending command: {err}");
                }
            }
            Err(err) => eprintln!("Error parsing command: {err}"),
        }
    }

    drop(sender); // Close the sender to signal no more commands will be sent
    handle
        .await
        .expect("Failed to join the command handling task");
}
