use std::fs;

use plotscript::get_result;
use walkdir::WalkDir;

/// What the first line of a sample program says about its outcome.
enum Expectation {
    Renders(String),
    List,
    Error,
}

fn expectation(content: &str) -> Option<Expectation> {
    let header = content.lines().next()?.trim();
    if let Some(rendering) = header.strip_prefix("; expect:") {
        return Some(Expectation::Renders(rendering.trim().to_string()));
    }
    match header {
        "; expect-list" => Some(Expectation::List),
        "; expect-error" => Some(Expectation::Error),
        _ => None,
    }
}

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "pls"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected =
            expectation(&content).unwrap_or_else(|| panic!("{path:?} has no expectation header"));

        count += 1;
        match (expected, get_result(&content)) {
            (Expectation::Renders(rendering), Ok(value)) => {
                assert_eq!(value.to_string(), rendering, "output of {path:?}");
            },
            (Expectation::List, Ok(value)) => {
                assert!(value.is_list(), "{path:?} produced {value}, not a list");
            },
            (Expectation::Error, Err(_)) => {},
            (Expectation::Error, Ok(value)) => {
                panic!("{path:?} produced {value} but was expected to fail")
            },
            (_, Err(e)) => panic!("{path:?} failed: {e}"),
        }
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}
