//! End-to-end tests for the `clean` command.

use std::fs;

use lifexp_cli::cli::CleanArgs;
use lifexp_cli::commands::run_clean;

#[test]
fn test_clean_tsv_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("eu_life_expectancy_raw.tsv");
    fs::write(
        &input,
        "unit,sex,age,geo\\time\t2021\nYR,F,Y65,PT\t100\nYR,F,Y65,US\t100\n",
    )
    .unwrap();

    let summary = run_clean(&CleanArgs {
        input: input.clone(),
        country: "PT".to_string(),
        output: None,
    })
    .unwrap();

    assert_eq!(summary.rows_in, 2);
    assert_eq!(summary.rows_out, 1);
    assert_eq!(summary.output, dir.path().join("pt_life_expectancy.csv"));

    let written = fs::read_to_string(&summary.output).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("unit,sex,age,region,year,value"));
    assert_eq!(lines.next(), Some("YR,F,Y65,PT,2021,100.0"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_clean_json_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("eurostat_life_expect.json");
    fs::write(
        &input,
        r#"[
            {"unit": "YR", "sex": "F", "age": "Y65", "country": "PT", "year": 2021, "life_expectancy": 21.5},
            {"unit": "YR", "sex": "M", "age": "Y65", "country": "ES", "year": 2021, "life_expectancy": 17.2}
        ]"#,
    )
    .unwrap();
    let output = dir.path().join("out/cleaned.csv");

    let summary = run_clean(&CleanArgs {
        input,
        country: "pt".to_string(),
        output: Some(output.clone()),
    })
    .unwrap();

    assert_eq!(summary.rows_out, 1);
    let written = fs::read_to_string(&output).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("unit,sex,age,region,year,value"));
    assert_eq!(lines.next(), Some("YR,F,Y65,PT,2021,21.5"));
}

#[test]
fn test_clean_rejects_unknown_region() {
    let err = run_clean(&CleanArgs {
        input: "x.tsv".into(),
        country: "XX".to_string(),
        output: None,
    })
    .unwrap_err();

    assert!(err.to_string().contains("unknown region code"));
}

#[test]
fn test_clean_rejects_unsupported_extension() {
    let err = run_clean(&CleanArgs {
        input: "x.csv".into(),
        country: "PT".to_string(),
        output: None,
    })
    .unwrap_err();

    assert!(format!("{err:#}").contains("not supported"));
}
