use std::process::ExitCode;

use rpn_parser::{PriorityTable, RpnResult, Trace, UNARY_MINUS, convert, evaluate};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

#[derive(Debug, PartialEq)]
struct Answer {
    postfix: Vec<String>,
    value: f64,
}

fn standard_priorities() -> PriorityTable {
    PriorityTable::from([
        ('(', 0),
        ('+', 1),
        ('-', 1),
        ('*', 2),
        ('/', 2),
        ('^', 3),
        (UNARY_MINUS, 4),
    ])
}

fn calc(line: &str, priority: &PriorityTable) -> RpnResult<Answer> {
    let tokens = line.split_whitespace().collect::<Vec<&str>>();
    let postfix = convert(&tokens, priority).trace(line!(), "infix to postfix")?;
    let value = evaluate(&postfix).trace(line!(), "postfix evaluation")?;
    Ok(Answer { postfix, value })
}

fn print_answer(answer: &Answer) {
    println!("postfix: {}", answer.postfix.join(" "));
    println!("= {}", answer.value);
}

fn table_lines(priority: &PriorityTable) -> Vec<String> {
    let mut entries = priority.iter().collect::<Vec<_>>();
    entries.sort_by_key(|(c, rank)| (**rank, **c));
    entries
        .into_iter()
        .map(|(c, rank)| format!("  {c}  {rank}"))
        .collect()
}

fn print_table(priority: &PriorityTable) {
    for line in table_lines(priority) {
        println!("{line}");
    }
}

enum ReservedWord {
    Table,
    Exit,
}

fn is_reserved(first_word: &str) -> Option<ReservedWord> {
    match first_word {
        "exit" | "quit" => Some(ReservedWord::Exit),
        "table" => Some(ReservedWord::Table),
        _ => None,
    }
}

#[derive(Debug, PartialEq)]
enum Reply {
    Answer(Answer),
    Table,
    Exit,
}

fn handle_line(line: &str, priority: &PriorityTable) -> RpnResult<Reply> {
    let first_word = line.split_whitespace().next().unwrap_or_default();
    match is_reserved(first_word) {
        None => calc(line, priority).map(Reply::Answer),
        Some(ReservedWord::Table) => Ok(Reply::Table),
        Some(ReservedWord::Exit) => Ok(Reply::Exit),
    }
}

fn one_shot(args: &[String], priority: &PriorityTable) -> ExitCode {
    match handle_line(&args.join(" "), priority) {
        Ok(Reply::Answer(answer)) => {
            print_answer(&answer);
            ExitCode::SUCCESS
        }
        Ok(Reply::Table) => {
            print_table(priority);
            ExitCode::SUCCESS
        }
        Ok(Reply::Exit) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let priority = standard_priorities();
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    if !args.is_empty() {
        return one_shot(&args, &priority);
    }

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    #[cfg(feature = "with-file-history")]
    if rl.load_history("history.txt").is_err() {
        println!("No previous history.");
    }
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let bare_line = line.trim();
                if bare_line.is_empty() {
                    continue;
                }
                if let Err(err) = rl.add_history_entry(bare_line) {
                    eprintln!("history: {err}");
                }
                match handle_line(bare_line, &priority) {
                    Ok(Reply::Answer(answer)) => print_answer(&answer),
                    Ok(Reply::Table) => print_table(&priority),
                    Ok(Reply::Exit) => break,
                    Err(err) => print!("Error: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    #[cfg(feature = "with-file-history")]
    if let Err(err) = rl.save_history("history.txt") {
        eprintln!("history: {err}");
    }
    ExitCode::SUCCESS
}
