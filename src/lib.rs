//! # Saiten - Question Generation and Grading Engine
//!
//! **Saiten** generates concrete exam question instances from parametric
//! templates and grades student responses against them. A question bank
//! author declares variable domains (numeric ranges or enumerated sets),
//! a templated question text with `{name}` placeholders, and option
//! generation rules; the engine samples variables, renders the text,
//! resolves the rules into one correct option plus distractors, and shuffles
//! the result. Grading later runs against the exact frozen instance the
//! student saw, so runtime randomness never changes the verdict.
//!
//! ## Core Workflow
//!
//! 1. **Load Your Data**: Read question rows from wherever the host
//!    application stores them, as [`question::QuestionRecord`] or your own
//!    type implementing [`question::IntoQuestion`].
//! 2. **Convert**: Turn each record into the canonical
//!    [`question::QuestionTemplate`]. All authoring validation happens here;
//!    the generation core only sees structured data.
//! 3. **Assemble**: Call [`generator::assemble_exam`] with a random source.
//!    Each question is expanded by its repetition count and every instance is
//!    independently sampled, rendered, resolved and shuffled.
//! 4. **Grade**: Hold the instances for the attempt duration, then call
//!    [`grading::grade`] per instance and [`grading::score_attempt`] for the
//!    aggregate.
//!
//! Generation and grading never return errors: expression failures and
//! unmatched rule conditions degrade to sentinel output and are logged via
//! `tracing`, because a wrong-looking exam beats an aborted one.
//!
//! ## Quick Start
//!
//! ```rust
//! use saiten::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! fn main() -> Result<()> {
//!     let record = QuestionRecord::from_json(
//!         r#"{
//!             "id": "q-sum",
//!             "question_type": "dynamic",
//!             "template": "What is {x} + {y}?",
//!             "variable_ranges": {
//!                 "x": { "min": 1, "max": 9 },
//!                 "y": { "min": 1, "max": 9 }
//!             },
//!             "option_generation_rules": {
//!                 "correct": ["{x}+{y}", ""],
//!                 "wrong1": ["{x}-{y}", ""],
//!                 "wrong2": ["{x}*{y}", ""]
//!             }
//!         }"#,
//!     )?;
//!     let question = record.into_question()?;
//!
//!     let mut rng = StdRng::seed_from_u64(7);
//!     let exam = assemble_exam(std::slice::from_ref(&question), &mut rng);
//!
//!     // The host keeps the instances for the attempt; grading uses them as-is.
//!     let answer = exam[0].correct_option_text().map(str::to_string);
//!     let response = grade(&exam[0], answer.as_deref());
//!     assert!(response.is_correct);
//!
//!     let score = score_attempt(std::slice::from_ref(&response));
//!     assert_eq!(score.percent, 100);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod expr;
pub mod generator;
pub mod grading;
pub mod prelude;
pub mod question;
pub mod resolver;
pub mod sampler;
pub mod template;
