
use crate::phonedata::{CallingCodeInfo, PhoneDataWriter, PhoneRule, RuleSet};

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn init_logging() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}

fn block(
    calling_code: &str,
    countries: &[&str],
    trunk_prefixes: &[&str],
    international_prefixes: &[&str],
    rule_sets: Vec<RuleSet>,
) -> CallingCodeInfo {
    let owned = |values: &[&str]| -> Vec<String> { values.iter().map(|v| v.to_string()).collect() };
    CallingCodeInfo {
        calling_code: calling_code.to_owned(),
        countries: owned(countries),
        trunk_prefixes: owned(trunk_prefixes),
        international_prefixes: owned(international_prefixes),
        rule_sets,
    }
}

/// Calling code blocks of the test data.
pub(crate) fn test_blocks() -> Vec<CallingCodeInfo> {
    vec![
        block("1", &["us", "ca"], &["1"], &["011"], vec![
            RuleSet::new(10, vec![
                PhoneRule::new(2_000_000_000, u32::MAX, 10, "[[c]](###) ###-####"),
            ]),
        ]),
        block("44", &["gb"], &["0"], &["00"], vec![
            RuleSet::new(10, vec![
                PhoneRule::new(2_000_000_000, 2_099_999_999, 10, "## #### ####"),
                PhoneRule::new(1_000_000_000, 1_999_999_999, 10, "#### ######"),
            ]),
        ]),
        block("7", &["ru", "kz"], &["8"], &["810"], vec![
            RuleSet::new(10, vec![
                PhoneRule::new(3_000_000_000, 3_999_999_999, 10, "### ###-##-##"),
            ]),
        ]),
        block("380", &["ua"], &["0"], &["00"], vec![
            RuleSet::new(9, vec![PhoneRule::new(0, 999_999_999, 9, "## ### ## ##")]),
        ]),
        // the catch-all first set shadows the later, more specific one
        block("49", &["de"], &["0"], &["00"], vec![
            RuleSet::new(1, vec![PhoneRule::new(0, 999_999_999, 9, "#########")]),
            RuleSet::new(5, vec![PhoneRule::new(30_000, 39_999, 5, "## ###")]),
        ]),
    ]
}

pub(crate) fn test_data() -> Vec<u8> {
    let mut writer = PhoneDataWriter::new();
    for info in test_blocks() {
        writer.add(info);
    }
    writer.write().expect("Test data should be valid")
}
