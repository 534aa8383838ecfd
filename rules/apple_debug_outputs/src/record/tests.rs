use super::*;
use pretty_assertions::assert_eq;

fn sample() -> DebugOutputs<&'static str> {
    DebugOutputs::builder()
        .add_output("arm64", OutputKind::BitcodeSymbols, "arm64.bcsymbolmap")
        .add_output("arm64", OutputKind::DsymBinary, "arm64.dwarf")
        .add_output("armv7", OutputKind::Linkmap, "armv7.linkmap")
        .build()
}

#[test]
fn default_is_empty() {
    let outputs: DebugOutputs<u8> = DebugOutputs::default();
    assert!(outputs.is_empty());
    assert_eq!(outputs.len(), 0);
    assert!(outputs.outputs_map().is_empty());
    assert_eq!(outputs, DebugOutputs::builder().build());
}

#[test]
fn output_looks_up_by_arch_and_kind() {
    let outputs = sample();
    assert_eq!(
        outputs.output("arm64", OutputKind::BitcodeSymbols),
        Some(&"arm64.bcsymbolmap")
    );
    assert_eq!(outputs.output("armv7", OutputKind::Linkmap), Some(&"armv7.linkmap"));
    assert_eq!(outputs.output("arm64", OutputKind::Linkmap), None);
    assert_eq!(outputs.output("x86_64", OutputKind::DsymBinary), None);
}

#[test]
fn outputs_for_uses_identifier_keys() {
    let outputs = sample();
    let arm64 = outputs.outputs_for("arm64");
    let mut keys: Vec<&str> = arm64
        .map(|by_kind| by_kind.keys().map(String::as_str).collect())
        .unwrap_or_default();
    keys.sort_unstable();
    assert_eq!(keys, ["bitcode_symbols", "dsym_binary"]);
}

#[test]
fn architectures_lists_each_arch_once() {
    let outputs = sample();
    let mut archs: Vec<&str> = outputs.architectures().collect();
    archs.sort_unstable();
    assert_eq!(archs, ["arm64", "armv7"]);
    assert_eq!(outputs.len(), 2);
}

#[test]
fn collect_from_triples() {
    let outputs: DebugOutputs<u32> = [
        ("arm64", OutputKind::DsymBinary, 1),
        ("x86_64", OutputKind::DsymBinary, 2),
    ]
    .into_iter()
    .collect();
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs.output("x86_64", OutputKind::DsymBinary), Some(&2));
}

#[test]
fn clones_compare_equal() {
    let outputs = sample();
    assert_eq!(outputs.clone(), outputs);
}

#[test]
fn record_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DebugOutputs<String>>();
}

fn raw(entries: &[(&str, &[(&str, u32)])]) -> OutputsMap<u32> {
    entries
        .iter()
        .map(|(arch, by_kind)| {
            let by_kind = by_kind
                .iter()
                .map(|(kind, artifact)| ((*kind).to_owned(), *artifact))
                .collect();
            ((*arch).to_owned(), by_kind)
        })
        .collect()
}

#[test]
fn try_from_accepts_well_formed_map() {
    let map = raw(&[
        ("arm64", &[("dsym_binary", 1), ("linkmap", 2)]),
        ("armv7", &[("linkmap", 3)]),
    ]);
    let outputs = DebugOutputs::try_from(map);
    let expected = DebugOutputs::builder()
        .add_output("arm64", OutputKind::DsymBinary, 1)
        .add_output("arm64", OutputKind::Linkmap, 2)
        .add_output("armv7", OutputKind::Linkmap, 3)
        .build();
    assert_eq!(outputs, Ok(expected));
}

#[test]
fn try_from_normalizes_inner_keys() {
    let map = raw(&[("arm64", &[("DSYM_BINARY", 1)])]);
    let outputs = DebugOutputs::try_from(map);
    let arm64 = outputs.as_ref().ok().and_then(|o| o.outputs_for("arm64"));
    assert_eq!(arm64.map(|m| m.contains_key("dsym_binary")), Some(true));
}

#[test]
fn try_from_rejects_empty_arch_entry() {
    let map = raw(&[("arm64", &[])]);
    assert_eq!(
        DebugOutputs::try_from(map),
        Err(DebugOutputsError::NoOutputs("arm64".to_owned()))
    );
}

#[test]
fn try_from_rejects_unknown_kind() {
    let map = raw(&[("armv7", &[("bogus", 1)])]);
    assert_eq!(
        DebugOutputs::try_from(map),
        Err(DebugOutputsError::UnknownOutputKind("bogus".to_owned()))
    );
}

#[test]
fn try_from_rejects_blank_arch() {
    let map = raw(&[(" ", &[("linkmap", 1)])]);
    assert_eq!(
        DebugOutputs::try_from(map),
        Err(DebugOutputsError::EmptyArchitecture)
    );
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_goes_through_builder() {
    let parsed = serde_json::from_str::<DebugOutputs<String>>(
        r#"{"arm64": {"dsym_binary": "a.dwarf", "BITCODE_SYMBOLS": "a.bcsymbolmap"}}"#,
    );
    let expected = DebugOutputs::builder()
        .add_output("arm64", OutputKind::DsymBinary, "a.dwarf".to_owned())
        .add_output("arm64", OutputKind::BitcodeSymbols, "a.bcsymbolmap".to_owned())
        .build();
    assert_eq!(parsed.map_err(|e| e.to_string()), Ok(expected));
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_rejects_empty_arch_entry() {
    let parsed = serde_json::from_str::<DebugOutputs<String>>(r#"{"arm64": {}}"#);
    assert!(parsed.is_err());
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_rejects_unknown_kind() {
    let parsed = serde_json::from_str::<DebugOutputs<String>>(r#"{"armv7": {"bogus": "x"}}"#);
    let message = parsed.map_err(|e| e.to_string()).err().unwrap_or_default();
    assert!(message.contains("bogus"), "{message}");
}
