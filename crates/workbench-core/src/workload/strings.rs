//! Text-analysis workload (`POST /process/strings`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::body::decode_object;
use crate::algorithms::{
    count_unique_bytes, line_count, reverse_bytes, to_upper_ascii, tokenize_words, top_words,
    word_frequency, WordCount,
};
use crate::clock::Stopwatch;
use crate::error::WorkloadError;
use crate::SERVICE_NAME;

/// Bytes of processed text echoed back as `sample`.
pub const SAMPLE_LEN: usize = 100;

pub const TOP_WORDS: usize = 10;

pub const MAX_ITERATIONS: usize = 10;

/// Total output budget for `concatenate`, in bytes.
pub const CONCAT_BUDGET: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Reverse,
    Uppercase,
    Count,
    Pattern,
    Concatenate,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Reverse => "reverse",
            Operation::Uppercase => "uppercase",
            Operation::Count => "count",
            Operation::Pattern => "pattern",
            Operation::Concatenate => "concatenate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = WorkloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reverse" => Ok(Operation::Reverse),
            "uppercase" => Ok(Operation::Uppercase),
            "count" => Ok(Operation::Count),
            "pattern" => Ok(Operation::Pattern),
            "concatenate" => Ok(Operation::Concatenate),
            other => Err(WorkloadError::UnknownOperation(other.to_owned())),
        }
    }
}

#[derive(Deserialize)]
struct StringsBody {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    operation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsRequest {
    pub text: String,
    pub operation: Operation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringsResponse {
    /// Byte length of the input text.
    pub original_length: usize,
    /// Name of the operation that ran.
    pub operation: &'static str,
    #[serde(flatten)]
    pub outcome: StringsOutcome,
    /// Wall time of the operation alone, decoding excluded.
    pub execution_time_seconds: f64,
    pub service: &'static str,
}

/// Operation-specific fields, flattened into the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StringsOutcome {
    /// `reverse` and `uppercase`.
    Transformed {
        /// Byte length of the result.
        processed_length: usize,
        /// First 100 bytes of the result, decoded lossily.
        sample: String,
    },
    Counted {
        /// Byte count.
        char_count: usize,
        word_count: usize,
        /// Newlines plus one.
        line_count: usize,
        /// Distinct byte values.
        unique_chars: usize,
    },
    Pattern {
        /// Up to ten most frequent lowercased words, count descending.
        top_words: Vec<WordCount>,
        unique_words: usize,
    },
    Concatenated {
        /// Copies appended, bounded by the output budget.
        iterations: usize,
        /// Byte length of the concatenation.
        final_length: usize,
    },
}

impl StringsRequest {
    pub fn decode(body: &[u8]) -> Result<Self, WorkloadError> {
        let body: StringsBody = decode_object(body)?;

        let text = body.text.ok_or(WorkloadError::MissingField("text"))?;
        let operation = match body.operation {
            Some(name) => name.parse()?,
            None => Operation::Reverse,
        };

        Ok(StringsRequest { text, operation })
    }

    pub fn run(&self) -> StringsResponse {
        let watch = Stopwatch::start();
        let text = self.text.as_str();

        let outcome = match self.operation {
            Operation::Reverse => transformed(reverse_bytes(text)),
            Operation::Uppercase => transformed(to_upper_ascii(text).into_bytes()),
            Operation::Count => StringsOutcome::Counted {
                char_count: text.len(),
                word_count: tokenize_words(text).count(),
                line_count: line_count(text),
                unique_chars: count_unique_bytes(text),
            },
            Operation::Pattern => {
                let freq = word_frequency(text);
                StringsOutcome::Pattern {
                    top_words: top_words(&freq, TOP_WORDS),
                    unique_words: freq.len(),
                }
            }
            Operation::Concatenate => {
                let iterations = concat_iterations(text.len());
                let processed = text.repeat(iterations);
                StringsOutcome::Concatenated {
                    iterations,
                    final_length: processed.len(),
                }
            }
        };

        StringsResponse {
            original_length: text.len(),
            operation: self.operation.as_str(),
            outcome,
            execution_time_seconds: watch.elapsed_secs(),
            service: SERVICE_NAME,
        }
    }
}

/// `10` for empty text, else `min(10, 1_000_000 / len)`.
pub fn concat_iterations(len: usize) -> usize {
    match len {
        0 => MAX_ITERATIONS,
        len => MAX_ITERATIONS.min(CONCAT_BUDGET / len),
    }
}

fn transformed(processed: Vec<u8>) -> StringsOutcome {
    let end = processed.len().min(SAMPLE_LEN);
    StringsOutcome::Transformed {
        processed_length: processed.len(),
        sample: String::from_utf8_lossy(&processed[..end]).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(text: &str, operation: Operation) -> StringsResponse {
        StringsRequest {
            text: text.to_owned(),
            operation,
        }
        .run()
    }

    #[test]
    fn operation_defaults_to_reverse() {
        let req = StringsRequest::decode(br#"{"text":"abc"}"#).unwrap();
        assert_eq!(req.operation, Operation::Reverse);
        let req = StringsRequest::decode(br#"{"text":"abc","operation":null}"#).unwrap();
        assert_eq!(req.operation, Operation::Reverse);
    }

    #[test]
    fn decode_errors() {
        assert_eq!(
            StringsRequest::decode(br#"{"operation":"count"}"#),
            Err(WorkloadError::MissingField("text"))
        );
        assert_eq!(
            StringsRequest::decode(br#"{"text":"x","operation":"frobnicate"}"#),
            Err(WorkloadError::UnknownOperation("frobnicate".into()))
        );
        assert_eq!(
            StringsRequest::decode(br#"{"text":"x","operation":""}"#),
            Err(WorkloadError::UnknownOperation(String::new()))
        );
        assert!(matches!(
            StringsRequest::decode(b"text=abc"),
            Err(WorkloadError::MalformedBody(_))
        ));
    }

    #[test]
    fn mistyped_fields_are_invalid_bodies() {
        for body in [r#"{"text":42}"#, r#"{"text":"x","operation":1}"#, r#"["x"]"#] {
            assert!(
                matches!(
                    StringsRequest::decode(body.as_bytes()),
                    Err(WorkloadError::InvalidBody(_))
                ),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn reverse_samples_first_hundred_bytes() {
        let resp = run("abc", Operation::Reverse);
        assert_eq!(resp.original_length, 3);
        assert_eq!(
            resp.outcome,
            StringsOutcome::Transformed {
                processed_length: 3,
                sample: "cba".into()
            }
        );

        let long: String = ('a'..='z').cycle().take(150).collect();
        let resp = run(&long, Operation::Reverse);
        match resp.outcome {
            StringsOutcome::Transformed {
                processed_length,
                sample,
            } => {
                assert_eq!(processed_length, 150);
                assert_eq!(sample.len(), 100);
                assert!(sample.starts_with("tsrq"));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn uppercase() {
        let resp = run("Hello, world", Operation::Uppercase);
        assert_eq!(resp.operation, "uppercase");
        assert_eq!(
            resp.outcome,
            StringsOutcome::Transformed {
                processed_length: 12,
                sample: "HELLO, WORLD".into()
            }
        );
    }

    #[test]
    fn count() {
        let resp = run("a b\nc", Operation::Count);
        assert_eq!(
            resp.outcome,
            StringsOutcome::Counted {
                char_count: 5,
                word_count: 3,
                line_count: 2,
                unique_chars: 5,
            }
        );
    }

    #[test]
    fn count_uses_bytes() {
        let resp = run("héllo", Operation::Count);
        assert_eq!(resp.original_length, 6);
        match resp.outcome {
            StringsOutcome::Counted { char_count, .. } => assert_eq!(char_count, 6),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn pattern() {
        let resp = run("The cat sat. The cat ran.", Operation::Pattern);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["unique_words"], 4);
        assert_eq!(
            json["top_words"],
            json!([
                { "word": "cat", "count": 2 },
                { "word": "the", "count": 2 },
                { "word": "ran", "count": 1 },
                { "word": "sat", "count": 1 },
            ])
        );
    }

    #[test]
    fn concatenate() {
        let resp = run("ab", Operation::Concatenate);
        assert_eq!(
            resp.outcome,
            StringsOutcome::Concatenated {
                iterations: 10,
                final_length: 20
            }
        );
        assert_eq!(concat_iterations(0), 10);
        assert_eq!(concat_iterations(100_000), 10);
        assert_eq!(concat_iterations(200_000), 5);
        assert_eq!(concat_iterations(2_000_000), 0);
    }

    #[test]
    fn flattened_response_shape() {
        let json = serde_json::to_value(run("a b", Operation::Count)).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "original_length",
            "operation",
            "char_count",
            "word_count",
            "line_count",
            "unique_chars",
            "execution_time_seconds",
            "service",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert!(!obj.contains_key("outcome"));
    }
}
