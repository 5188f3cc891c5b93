//! Conversion from stored question records into the canonical model.
//!
//! The host application persists questions as loosely-typed rows whose
//! `variable_ranges` and `option_generation_rules` columns hold authored
//! JSON. Everything here is boundary validation: the generation core only
//! ever sees the structured types from [`definition`](super::definition).

use crate::error::QuestionParseError;
use crate::question::{
    DynamicConditionalQuestion, DynamicQuestion, DynamicTextConditionalQuestion, ExprSpec,
    QuestionTemplate, RuleSet, StaticOption, StaticQuestion, TextOptions, VariableDomain,
    VariableSpec,
};
use crate::resolver::Condition;
use serde::Deserialize;
use serde_json::Value as Json;

/// The contract for converting a host-defined record type into the canonical
/// question model. Implement this for your own row struct when it does not
/// match [`QuestionRecord`].
pub trait IntoQuestion {
    fn into_question(self) -> Result<QuestionTemplate, QuestionParseError>;
}

/// A question row in the shape the host application stores it.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    #[serde(default)]
    pub question_text: String,
    pub question_type: String,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub variable_ranges: Option<Json>,
    #[serde(default)]
    pub option_generation_rules: Option<Json>,
    #[serde(default)]
    pub options: Vec<StoredOption>,
    #[serde(default, alias = "no_of_times")]
    pub times: Option<u32>,
}

/// A stored option row of a static question.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredOption {
    pub option_text: String,
    pub is_correct: bool,
}

impl QuestionRecord {
    pub fn from_json(json: &str) -> Result<Self, QuestionParseError> {
        serde_json::from_str(json).map_err(|e| QuestionParseError::JsonParse(e.to_string()))
    }
}

/// Parses a whole stored question bank: a JSON array of question records.
pub fn parse_question_bank(json: &str) -> Result<Vec<QuestionTemplate>, QuestionParseError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(json).map_err(|e| QuestionParseError::JsonParse(e.to_string()))?;
    records
        .into_iter()
        .map(IntoQuestion::into_question)
        .collect()
}

impl IntoQuestion for QuestionRecord {
    fn into_question(self) -> Result<QuestionTemplate, QuestionParseError> {
        // Repetition count: at least one instance per assembly.
        let times = self.times.unwrap_or(1).max(1);

        match self.question_type.as_str() {
            "static" => {
                let found = self.options.iter().filter(|o| o.is_correct).count();
                if found != 1 {
                    return Err(QuestionParseError::BadCorrectCount {
                        question_id: self.id,
                        found,
                    });
                }
                Ok(QuestionTemplate::Static(StaticQuestion {
                    id: self.id,
                    text: self.question_text,
                    options: self
                        .options
                        .into_iter()
                        .map(|o| StaticOption {
                            text: o.option_text,
                            is_correct: o.is_correct,
                        })
                        .collect(),
                    times,
                }))
            }
            "dynamic" => {
                let variables = parse_variable_spec(self.variable_ranges.as_ref())?;
                let rules_json = require_rules(&self.id, self.option_generation_rules.as_ref())?;
                let rules = parse_rule_set(&self.id, rules_json)?;
                Ok(QuestionTemplate::Dynamic(DynamicQuestion {
                    id: self.id,
                    template: self.template.unwrap_or_default(),
                    variables,
                    rules,
                    times,
                }))
            }
            "dynamic conditional" => {
                let variables = parse_variable_spec(self.variable_ranges.as_ref())?;
                let rules_json = require_rules(&self.id, self.option_generation_rules.as_ref())?;
                let rules = parse_conditional_rules(&self.id, rules_json)?;
                Ok(QuestionTemplate::DynamicConditional(
                    DynamicConditionalQuestion {
                        id: self.id,
                        template: self.template.unwrap_or_default(),
                        variables,
                        rules,
                        times,
                    },
                ))
            }
            "dynamic text conditional" => {
                let variables = parse_variable_spec(self.variable_ranges.as_ref())?;
                let rules_json = require_rules(&self.id, self.option_generation_rules.as_ref())?;
                let rules = parse_text_conditional_rules(rules_json)?;
                Ok(QuestionTemplate::DynamicTextConditional(
                    DynamicTextConditionalQuestion {
                        id: self.id,
                        template: self.template.unwrap_or_default(),
                        variables,
                        rules,
                        times,
                    },
                ))
            }
            other => Err(QuestionParseError::UnknownQuestionType {
                question_id: self.id.clone(),
                type_name: other.to_string(),
            }),
        }
    }
}

fn require_rules<'a>(
    question_id: &str,
    rules: Option<&'a Json>,
) -> Result<&'a Json, QuestionParseError> {
    rules.ok_or_else(|| QuestionParseError::MissingField {
        question_id: question_id.to_string(),
        field: "option_generation_rules".to_string(),
    })
}

/// Parses a `variable_ranges` column.
///
/// Two stored layouts exist: a flat map of `name -> {min, max}` /
/// `name -> {values: [...]}` entries, and the conditional layout that
/// partitions declarations into `range_values` and `enum_values` sub-maps.
/// Enum entries are appended after range entries so they win key collisions
/// when the binding is built.
fn parse_variable_spec(ranges: Option<&Json>) -> Result<VariableSpec, QuestionParseError> {
    let Some(ranges) = ranges else {
        return Ok(VariableSpec::default());
    };
    let Json::Object(map) = ranges else {
        return Err(QuestionParseError::MalformedRule {
            key: "variable_ranges".to_string(),
            message: "expected a JSON object".to_string(),
        });
    };

    let mut entries = Vec::new();
    if map.contains_key("range_values") || map.contains_key("enum_values") {
        if let Some(Json::Object(ranges)) = map.get("range_values") {
            for (name, value) in ranges {
                entries.push((name.clone(), parse_range(name, value)?));
            }
        }
        if let Some(Json::Object(enums)) = map.get("enum_values") {
            for (name, value) in enums {
                entries.push((name.clone(), parse_enum(name, value)?));
            }
        }
    } else {
        for (name, value) in map {
            let domain = match value {
                Json::Object(entry) if entry.contains_key("min") || entry.contains_key("max") => {
                    parse_range(name, value)?
                }
                Json::Object(entry) if entry.contains_key("values") => {
                    parse_enum(name, &entry["values"])?
                }
                Json::Array(_) => parse_enum(name, value)?,
                _ => {
                    return Err(QuestionParseError::MalformedRule {
                        key: name.clone(),
                        message: "expected `{min, max}`, `{values}` or an array".to_string(),
                    });
                }
            };
            entries.push((name.clone(), domain));
        }
    }
    Ok(VariableSpec { entries })
}

fn parse_range(name: &str, value: &Json) -> Result<VariableDomain, QuestionParseError> {
    let bound = |key: &str| -> Result<i64, QuestionParseError> {
        value
            .get(key)
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .ok_or_else(|| QuestionParseError::MalformedRule {
                key: name.to_string(),
                message: format!("range bound '{}' is missing or not a number", key),
            })
    };
    let min = bound("min")?;
    let max = bound("max")?;
    if min > max {
        return Err(QuestionParseError::InvalidRange {
            name: name.to_string(),
            min,
            max,
        });
    }
    Ok(VariableDomain::Range { min, max })
}

fn parse_enum(name: &str, value: &Json) -> Result<VariableDomain, QuestionParseError> {
    let Json::Array(items) = value else {
        return Err(QuestionParseError::MalformedRule {
            key: name.to_string(),
            message: "expected an array of enum values".to_string(),
        });
    };
    let values: Vec<String> = items
        .iter()
        .map(|item| match item {
            Json::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    if values.is_empty() {
        return Err(QuestionParseError::EmptyEnum {
            name: name.to_string(),
        });
    }
    Ok(VariableDomain::Enum(values))
}

/// Parses one flat rule object: required `correct` and `wrong1`, plus every
/// other `wrongN` key present, taken in numeric order. Gaps in the numbering
/// are tolerated; authored content sometimes skips an index.
fn parse_rule_set(question_id: &str, rules: &Json) -> Result<RuleSet, QuestionParseError> {
    let Json::Object(map) = rules else {
        return Err(QuestionParseError::MalformedRule {
            key: "option_generation_rules".to_string(),
            message: "expected a JSON object".to_string(),
        });
    };

    let correct = map
        .get("correct")
        .ok_or_else(|| QuestionParseError::MissingRuleKey {
            question_id: question_id.to_string(),
            key: "correct".to_string(),
        })
        .and_then(|value| parse_expr_spec("correct", value))?;

    if !map.contains_key("wrong1") {
        return Err(QuestionParseError::MissingRuleKey {
            question_id: question_id.to_string(),
            key: "wrong1".to_string(),
        });
    }
    let mut numbered: Vec<(u32, ExprSpec)> = Vec::new();
    for (key, value) in map {
        let Some(n) = key.strip_prefix("wrong").and_then(|s| s.parse::<u32>().ok()) else {
            continue;
        };
        numbered.push((n, parse_expr_spec(key, value)?));
    }
    numbered.sort_by_key(|(n, _)| *n);
    let wrongs = numbered.into_iter().map(|(_, spec)| spec).collect();
    Ok(RuleSet { correct, wrongs })
}

/// Parses one expression/unit value: the canonical `[expression, unit]` pair,
/// or a bare expression string with an empty unit (older authored content).
fn parse_expr_spec(key: &str, value: &Json) -> Result<ExprSpec, QuestionParseError> {
    match value {
        Json::Array(pair) => {
            let expression = pair.first().and_then(Json::as_str).ok_or_else(|| {
                QuestionParseError::MalformedRule {
                    key: key.to_string(),
                    message: "expected `[expression, unit]` with a string expression".to_string(),
                }
            })?;
            let unit = pair.get(1).and_then(Json::as_str).unwrap_or("");
            Ok(ExprSpec::new(expression, unit))
        }
        Json::String(expression) => Ok(ExprSpec::new(expression.clone(), "")),
        _ => Err(QuestionParseError::MalformedRule {
            key: key.to_string(),
            message: "expected `[expression, unit]` or a bare expression string".to_string(),
        }),
    }
}

/// Parses a condition-keyed rule map. Authored key order is preserved, since
/// resolution takes the first matching condition.
fn parse_conditional_rules(
    question_id: &str,
    rules: &Json,
) -> Result<Vec<(Condition, RuleSet)>, QuestionParseError> {
    let Json::Object(map) = rules else {
        return Err(QuestionParseError::MalformedRule {
            key: "option_generation_rules".to_string(),
            message: "expected a JSON object keyed by condition strings".to_string(),
        });
    };

    let mut parsed = Vec::with_capacity(map.len());
    for (condition_key, value) in map {
        let condition = Condition::parse(condition_key)?;
        // Stored as a one-element array wrapping the rule object; a bare
        // object is accepted too.
        let rule_json = match value {
            Json::Array(items) => {
                items
                    .first()
                    .ok_or_else(|| QuestionParseError::MalformedRule {
                        key: condition_key.clone(),
                        message: "condition rule array is empty".to_string(),
                    })?
            }
            other => other,
        };
        parsed.push((condition, parse_rule_set(question_id, rule_json)?));
    }
    Ok(parsed)
}

fn parse_text_conditional_rules(
    rules: &Json,
) -> Result<Vec<(Condition, TextOptions)>, QuestionParseError> {
    let Json::Object(map) = rules else {
        return Err(QuestionParseError::MalformedRule {
            key: "option_generation_rules".to_string(),
            message: "expected a JSON object keyed by condition strings".to_string(),
        });
    };

    let mut parsed = Vec::with_capacity(map.len());
    for (condition_key, value) in map {
        let condition = Condition::parse(condition_key)?;
        let literal = |key: &str| -> Result<String, QuestionParseError> {
            value
                .get(key)
                .and_then(Json::as_str)
                .map(str::to_string)
                .ok_or_else(|| QuestionParseError::MalformedRule {
                    key: condition_key.clone(),
                    message: format!("missing or non-string option '{}'", key),
                })
        };
        parsed.push((
            condition,
            TextOptions {
                correct: literal("correct")?,
                wrong1: literal("wrong1")?,
                wrong2: literal("wrong2")?,
                wrong3: literal("wrong3")?,
            },
        ));
    }
    Ok(parsed)
}
