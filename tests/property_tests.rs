//! Property-based tests for logharbour using proptest

use logharbour::prelude::*;
use logharbour::{decode_record, encode_record};
use proptest::prelude::*;
use std::sync::Arc;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Debug2),
        Just(Severity::Debug1),
        Just(Severity::Debug0),
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Err),
        Just(Severity::Crit),
        Just(Severity::Sec),
    ]
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// String conversions roundtrip
    #[test]
    fn test_severity_str_roundtrip(level in any_severity()) {
        let parsed: Severity = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Ordering matches declaration rank
    #[test]
    fn test_severity_ordering(a in any_severity(), b in any_severity()) {
        let (ra, rb) = (a as u8, b as u8);
        prop_assert_eq!(a < b, ra < rb);
        prop_assert_eq!(a >= b, ra >= rb);
    }

    /// Parsing is case-insensitive
    #[test]
    fn test_severity_case_insensitive(level in any_severity(), lower in any::<bool>()) {
        let input = if lower { level.to_str().to_lowercase() } else { level.to_str().to_string() };
        prop_assert_eq!(input.parse::<Severity>(), Ok(level));
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// An entry is written iff its severity is at or above the threshold
    #[test]
    fn test_written_iff_at_or_above_threshold(
        severity in any_severity(),
        threshold in any_severity(),
    ) {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new("props", sink.clone());
        logger.change_priority(threshold);

        logger.with_priority(severity).log("probe");

        prop_assert_eq!(sink.len() == 1, severity >= threshold);
    }

    /// Changing a logger's threshold never affects loggers derived before
    #[test]
    fn test_change_priority_isolated(
        before in any_severity(),
        after in any_severity(),
    ) {
        let logger = Logger::new("props", Arc::new(MemorySink::new()));
        logger.change_priority(before);
        let sibling = logger.with_who("sibling");

        logger.change_priority(after);

        prop_assert_eq!(logger.min_priority(), after);
        prop_assert_eq!(sibling.min_priority(), before);
    }
}

// ============================================================================
// Derivation Tests
// ============================================================================

proptest! {
    /// Derivations never mutate the receiver and only touch their field
    #[test]
    fn test_derivation_is_copy_on_write(
        who in "[a-z]{0,12}",
        op in "[a-z]{0,12}",
        class in "[a-z]{0,12}",
        level in any_severity(),
    ) {
        let base = Logger::new("props", Arc::new(MemorySink::new()))
            .with_module("core");
        let snapshot = format!("{:?}", base);

        let with_who = base.with_who(who.clone());
        let with_op = base.with_op(op.clone());
        let with_class = base.with_what_class(class.clone());
        let with_level = base.with_priority(level);

        prop_assert_eq!(format!("{:?}", base), snapshot);

        prop_assert_eq!(with_who.who(), who.as_str());
        prop_assert_eq!(with_who.op(), base.op());
        prop_assert_eq!(with_op.op(), op.as_str());
        prop_assert_eq!(with_op.who(), base.who());
        prop_assert_eq!(with_class.what_class(), class.as_str());
        prop_assert_eq!(with_class.module(), "core");
        prop_assert_eq!(with_level.priority(), level);
        prop_assert_eq!(with_level.who(), base.who());
    }
}

// ============================================================================
// Record Tests
// ============================================================================

proptest! {
    /// `log` stores its argument verbatim as the activity payload
    #[test]
    fn test_log_payload_is_message(message in ".*") {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new("props", sink.clone());

        logger.log(message.clone());

        let entries = sink.entries();
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(entries[0].log_type(), LogType::Activity);
        prop_assert_eq!(&entries[0].payload, &Payload::Activity(serde_json::Value::String(message)));
    }

    /// Every record is one line, whatever the message contains
    #[test]
    fn test_record_is_single_line(message in ".*", who in ".*") {
        let mut entry = LogEntry::new("props", Severity::Info, message, serde_json::json!(null));
        entry.who = who;

        let record = encode_record(&entry).unwrap();
        prop_assert_eq!(record.iter().filter(|b| **b == b'\n').count(), 1);
        prop_assert_eq!(record.last(), Some(&b'\n'));

        let decoded = decode_record(&record).unwrap();
        prop_assert_eq!(decoded, entry);
    }
}
