use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const DATASET: &str = r#"{
  "countries": [{"country_code": "US", "country_name": "United States"}],
  "regions": [{"country_code": "US", "region_code": "CA", "region_name": "California"}],
  "locations": [
    {"loc_id": 42, "country_code": "US", "region_code": "CA", "city_name": "Example",
     "postal_code": "90001", "latitude": 34.0, "longitude": -118.0,
     "metro_code": "803", "area_code": "213"}
  ],
  "blocks": [{"ip_start": 134744064, "ip_end": 134744319, "loc_id": 42}]
}"#;

fn dataset(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("geo.json");
    std::fs::write(&path, DATASET).unwrap();
    path
}

fn ipgeo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ipgeo").unwrap();
    cmd.env_remove("RUST_LOG").arg("--dataset").arg(dataset(dir));
    cmd
}

#[test]
fn stats_prints_table_sizes() {
    let dir = TempDir::new().unwrap();
    ipgeo(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Countries: 1"))
        .stdout(predicate::str::contains("City blocks: 1"))
        .stdout(predicate::str::contains("Reserved ranges: 16"));
}

#[test]
fn lookup_hit_text() {
    let dir = TempDir::new().unwrap();
    ipgeo(&dir)
        .args(["lookup", "8.8.8.8"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("8.8.8.8"))
        .stdout(predicate::str::contains("Country: United States (US)"))
        .stdout(predicate::str::contains("Region:  California (CA)"))
        .stdout(predicate::str::contains("Zip:     90001"));
}

#[test]
fn lookup_json_reserved_and_miss() {
    let dir = TempDir::new().unwrap();
    let output = ipgeo(&dir)
        .args(["--format", "json", "lookup", "10.1.2.3", "1.1.1.1", "::ffff:8.8.8.8"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["ip"], "10.1.2.3");
    assert_eq!(lines[0]["country_code"], "RD");
    assert_eq!(lines[0]["country_name"], "Reserved");
    assert_eq!(lines[1]["ip"], "1.1.1.1");
    assert_eq!(lines[1]["country_code"], "");
    assert_eq!(lines[2]["ip"], "8.8.8.8");
    assert_eq!(lines[2]["city"], "Example");
}

#[test]
fn invalid_address_is_reported_and_counted() {
    let dir = TempDir::new().unwrap();
    let output = ipgeo(&dir)
        .args(["lookup", "not-an-ip", "8.8.8.8", "--metrics"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not-an-ip"));
    let metrics: serde_json::Value = stderr
        .lines()
        .find_map(|l| serde_json::from_str(l).ok())
        .expect("metrics json on stderr");
    assert_eq!(metrics["appname"], "ipgeo");
    assert_eq!(metrics["metrics"]["lookup.total"], 2);
    assert_eq!(metrics["metrics"]["lookup.invalid"], 1);
    assert_eq!(metrics["metrics"]["lookup.hit"], 1);
}

#[test]
fn batch_from_stdin_keeps_order() {
    let dir = TempDir::new().unwrap();
    let input = "# header\n8.8.8.8\n\n192.168.0.1\n  1.1.1.1  \n8.8.8.200\n";
    let output = ipgeo(&dir)
        .args(["--format", "json", "batch"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let ips: Vec<String> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["ip"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(ips, ["8.8.8.8", "192.168.0.1", "1.1.1.1", "8.8.8.200"]);
}

#[test]
fn batch_from_file_with_metrics() {
    let dir = TempDir::new().unwrap();
    let list = dir.path().join("ips.txt");
    std::fs::write(&list, "8.8.8.8\n10.0.0.1\n2.2.2.2\nbogus\n").unwrap();

    let output = ipgeo(&dir)
        .args(["batch", "--metrics", "--input"])
        .arg(&list)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let metrics: serde_json::Value = stderr
        .lines()
        .find_map(|l| serde_json::from_str(l).ok())
        .expect("metrics json on stderr");
    assert_eq!(metrics["metrics"]["lookup.total"], 4);
    assert_eq!(metrics["metrics"]["lookup.hit"], 1);
    assert_eq!(metrics["metrics"]["lookup.reserved"], 1);
    assert_eq!(metrics["metrics"]["lookup.miss"], 1);
    assert_eq!(metrics["metrics"]["lookup.invalid"], 1);
}

#[test]
fn missing_dataset_fails() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("ipgeo")
        .unwrap()
        .arg("--dataset")
        .arg(dir.path().join("absent.json"))
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}

#[test]
fn missing_database_fails() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("ipgeo")
        .unwrap()
        .arg("--db")
        .arg(dir.path().join("absent.sqlite"))
        .args(["lookup", "8.8.8.8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load database"));
}

#[test]
fn invalid_input_reported_the_same_way_in_both_commands() {
    let dir = TempDir::new().unwrap();
    // quiet logging must not hide the report
    ipgeo(&dir)
        .args(["--log-level", "error", "lookup", "bogus"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping \"bogus\""));
    ipgeo(&dir)
        .args(["--log-level", "error", "batch"])
        .write_stdin("bogus\n8.8.8.8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("8.8.8.8"))
        .stderr(predicate::str::contains("skipping \"bogus\""));
}
