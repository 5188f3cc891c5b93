use clap::Parser;
use rand::Rng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate a sample question bank for the Saiten engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_bank.json")]
    output: String,

    /// How many dynamic arithmetic questions to include
    #[arg(long, default_value_t = 5)]
    dynamic: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    let mut bank: Vec<Value> = vec![
        static_question(),
        conditional_question(),
        text_conditional_question(),
    ];
    for index in 0..cli.dynamic {
        bank.push(dynamic_question(index, &mut rng));
    }

    let json_output = serde_json::to_string_pretty(&Value::Array(bank))?;
    fs::write(&cli.output, json_output)?;

    println!("Generated sample question bank at '{}'", cli.output);
    Ok(())
}

fn static_question() -> Value {
    json!({
        "id": "static-capital",
        "question_type": "static",
        "question_text": "What is the capital of Japan?",
        "options": [
            { "option_text": "Tokyo", "is_correct": true },
            { "option_text": "Kyoto", "is_correct": false },
            { "option_text": "Osaka", "is_correct": false },
            { "option_text": "Nagoya", "is_correct": false }
        ],
        "no_of_times": 1
    })
}

fn dynamic_question(index: usize, rng: &mut impl Rng) -> Value {
    let min = rng.random_range(1..=5);
    let max = rng.random_range(min + 5..=min + 20);
    json!({
        "id": format!("dynamic-sum-{}", index),
        "question_type": "dynamic",
        "template": "A tank holds {volume} litres and drains {rate} litres per minute. How much is left after one minute?",
        "variable_ranges": {
            "volume": { "min": min * 10, "max": max * 10 },
            "rate": { "min": min, "max": max }
        },
        "option_generation_rules": {
            "correct": ["{volume}-{rate}", "litres"],
            "wrong1": ["{volume}+{rate}", "litres"],
            "wrong2": ["{volume}", "litres"],
            "wrong3": ["{rate}", "litres"]
        },
        "no_of_times": 2
    })
}

fn conditional_question() -> Value {
    json!({
        "id": "conditional-walk",
        "question_type": "dynamic conditional",
        "template": "You walk {steps} steps {direction}. What is your displacement along the east axis?",
        "variable_ranges": {
            "range_values": { "steps": { "min": 10, "max": 50 } },
            "enum_values": { "direction": ["E", "W"] }
        },
        "option_generation_rules": {
            "direction === E": [{
                "correct": ["{steps}", "steps east"],
                "wrong1": ["0-{steps}", "steps east"],
                "wrong2": ["0", "steps east"]
            }],
            "direction === W": [{
                "correct": ["0-{steps}", "steps east"],
                "wrong1": ["{steps}", "steps east"],
                "wrong2": ["0", "steps east"]
            }]
        },
        "no_of_times": 1
    })
}

fn text_conditional_question() -> Value {
    json!({
        "id": "text-conditional-season",
        "question_type": "dynamic text conditional",
        "template": "It is July in the {hemisphere} hemisphere and you face {direction}. Which season is it?",
        "variable_ranges": {
            "enum_values": {
                "hemisphere": ["Northern", "Southern"],
                "direction": ["East", "West"]
            }
        },
        "option_generation_rules": {
            "hemisphere === Northern && direction === East": {
                "correct": "Summer",
                "wrong1": "Winter",
                "wrong2": "Autumn",
                "wrong3": "Spring"
            },
            "hemisphere === Northern && direction === West": {
                "correct": "Summer",
                "wrong1": "Winter",
                "wrong2": "Spring",
                "wrong3": "Autumn"
            },
            "hemisphere === Southern && direction === East": {
                "correct": "Winter",
                "wrong1": "Summer",
                "wrong2": "Autumn",
                "wrong3": "Spring"
            },
            "hemisphere === Southern && direction === West": {
                "correct": "Winter",
                "wrong1": "Summer",
                "wrong2": "Spring",
                "wrong3": "Autumn"
            }
        },
        "no_of_times": 1
    })
}
