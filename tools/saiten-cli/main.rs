use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use saiten::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A question generation and grading engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the question bank JSON file (an array of question records)
    bank_path: String,

    /// Seed for the random source, for reproducible exams
    #[arg(short, long)]
    seed: Option<u64>,

    /// Mark the correct option in the printed output
    #[arg(long)]
    show_answers: bool,

    /// Take the exam interactively and get a score at the end
    #[arg(short = 'i', long, help = "Run in interactive 'student' mode")]
    take: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let bank_json = fs::read_to_string(&cli.bank_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read question bank '{}': {}",
            &cli.bank_path, e
        ))
    });

    let load_start = Instant::now();
    let questions = parse_question_bank(&bank_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse question bank: {}", e)));
    println!(
        "Loaded {} questions from '{}' in {:?}",
        questions.len(),
        cli.bank_path,
        load_start.elapsed()
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let assemble_start = Instant::now();
    let exam = assemble_exam(&questions, &mut rng);
    println!(
        "Assembled {} instances in {:?}\n",
        exam.len(),
        assemble_start.elapsed()
    );

    if cli.take {
        run_interactive(&exam);
    } else {
        print_exam(&exam, cli.show_answers);
    }
}

fn print_exam(exam: &[GeneratedInstance], show_answers: bool) {
    for (index, instance) in exam.iter().enumerate() {
        println!("Q{}. {}", index + 1, instance.text);
        if instance.is_unanswerable() {
            println!("  !! no options generated (check the question's rule conditions)");
        }
        for (option_index, option) in instance.options.iter().enumerate() {
            let marker = if show_answers && option.is_correct {
                " (correct)"
            } else {
                ""
            };
            println!(
                "  {}) {}{}",
                (b'a' + option_index as u8) as char,
                option.text,
                marker
            );
        }
        println!();
    }
}

/// Presents each instance, reads an answer (or blank to skip), and prints the
/// aggregate score at the end.
fn run_interactive(exam: &[GeneratedInstance]) {
    println!("--- Saiten Interactive Mode ---");
    println!("Answer with the option letter, or press Enter to skip.\n");

    let mut responses = Vec::with_capacity(exam.len());
    for (index, instance) in exam.iter().enumerate() {
        println!("Q{}. {}", index + 1, instance.text);
        for (option_index, option) in instance.options.iter().enumerate() {
            println!("  {}) {}", (b'a' + option_index as u8) as char, option.text);
        }

        let selected = loop {
            let input = prompt_for_input("Your answer");
            if input.is_empty() {
                break None;
            }
            let letter = input.to_lowercase().bytes().next().unwrap_or(0);
            let option_index = letter.wrapping_sub(b'a') as usize;
            match instance.options.get(option_index) {
                Some(option) => break Some(option.text.clone()),
                None => println!("Invalid choice. Enter a letter or leave blank to skip."),
            }
        };

        responses.push(grade(instance, selected.as_deref()));
        println!();
    }

    let score = score_attempt(&responses);
    println!("--- Results ---");
    println!("Correct: {}", score.correct);
    println!("Wrong:   {}", score.wrong);
    println!("Skipped: {}", score.skipped);
    println!("Score:   {}%", score.percent);

    for response in &responses {
        if response.status == ResponseStatus::Wrong {
            println!(
                "  {} -> answered '{}', correct was '{}'",
                response.question_id,
                response.selected.as_deref().unwrap_or(""),
                response.correct_answer.as_deref().unwrap_or("?")
            );
        }
    }
}

fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    io::stdout().flush().unwrap();
    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
