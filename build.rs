fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/vocab/default_vocab.toml",
        include_str!("src/vocab/default_vocab.toml"),
    );
    validate_toml(
        "src/corpus/default_cases.toml",
        include_str!("src/corpus/default_cases.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if toml::from_str::<toml::Table>(content).is_err() {
        panic!("{path} contains invalid TOML");
    }
}
