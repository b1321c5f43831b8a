use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{assert_is_file, declaration, TestEnv};

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn exported_handoff_matches_contract() {
    let env = TestEnv::with_bundled();
    env.write("fixture.toml", &declaration("fxc", "fixture_cheatsheet"));
    let out = env.root.join("out");

    let report = env.run_json(&["export", "--out", out.to_str().unwrap()]);
    assert_eq!(report["ok"], true);
    assert_eq!(report["data"]["written"].as_array().unwrap().len(), 5);
    assert!(report["data"]["failed"].as_array().unwrap().is_empty());

    for name in [
        "my_kagi_cheatsheet",
        "my_neovim_cheatsheet",
        "my_tmux_cheatsheet",
        "my_vim_cheatsheet",
        "fixture_cheatsheet",
    ] {
        let path = out.join(format!("{}.json", name));
        assert_is_file(&path);
        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        validate("cheatsheet.schema.json", &doc);
    }
}

#[test]
fn show_json_matches_contract() {
    let env = TestEnv::with_bundled();
    let out = env.run_json(&["show", "mnc"]);
    assert_eq!(out["ok"], true);
    validate("cheatsheet.schema.json", &out["data"]);
}
