use std::fs;

use tally::Interpreter;
use walkdir::WalkDir;

/// One line of a transcript: the input and what it should produce.
enum Expect {
    Value(f64),
    Error(Option<String>),
}

fn parse_expectation(text: &str) -> Expect {
    let text = text.trim();
    if let Some(rest) = text.strip_prefix("error") {
        let message = rest.trim_start_matches(':').trim();
        return Expect::Error((!message.is_empty()).then(|| message.to_string()));
    }
    match text {
        "inf" => Expect::Value(f64::INFINITY),
        "-inf" => Expect::Value(f64::NEG_INFINITY),
        "NaN" => Expect::Value(f64::NAN),
        _ => Expect::Value(text.parse().unwrap_or_else(|e| panic!("bad expectation {text:?}: {e}"))),
    }
}

/// Runs a transcript through one interpreter and returns the number of checked
/// lines.
///
/// Transcript lines look like `input => expected`, where `expected` is a
/// number, `inf`, `-inf`, `NaN`, `error`, or `error: <message fragment>`.
/// Lines starting with `#` and blank lines are skipped.
fn run_transcript(name: &str, content: &str) -> usize {
    let mut interpreter = Interpreter::new();
    let mut checked = 0;

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (input, expected) =
            line.split_once("=>")
                .unwrap_or_else(|| panic!("{name}:{}: missing '=>'", number + 1));
        let input = input.trim();
        let result = interpreter.run(input);

        match (parse_expectation(expected), result) {
            (Expect::Value(want), Ok(got)) => {
                assert!(want == got || (want.is_nan() && got.is_nan()),
                        "{name}:{}: {input:?} gave {got}, expected {want}",
                        number + 1);
            },
            (Expect::Error(fragment), Err(e)) => {
                if let Some(fragment) = fragment {
                    assert!(e.to_string().contains(&fragment),
                            "{name}:{}: error {e:?} does not mention {fragment:?}",
                            number + 1);
                }
            },
            (Expect::Value(want), Err(e)) => {
                panic!("{name}:{}: {input:?} failed with '{e}', expected {want}", number + 1)
            },
            (Expect::Error(_), Ok(got)) => {
                panic!("{name}:{}: {input:?} gave {got}, expected an error", number + 1)
            },
        }
        checked += 1;
    }

    checked
}

#[test]
fn transcripts_pass() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path()
                                                   .extension()
                                                   .is_some_and(|ext| ext == "tally")
                                              })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += run_transcript(&path.display().to_string(), &content);
    }

    assert!(count > 0, "No transcript lines found in tests/scripts");
}
