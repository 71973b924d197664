//! Shipped table of Marten's built-in modules.
//!
//! The loader consults this table before any path-based resolution, so a
//! name listed here always wins over an on-disk module of the same name.
//! Registration order is fixed; keep new modules ahead of the reserved rows.

use crate::entry::InittabEntry;
use crate::module::{InitResult, NativeModule};

fn init_io() -> InitResult {
    Ok(NativeModule::new("io").with_doc("Line-oriented input and output"))
}

fn init_os() -> InitResult {
    Ok(NativeModule::new("os").with_doc("Host environment and process access"))
}

fn init_time() -> InitResult {
    Ok(NativeModule::new("time").with_doc("Clocks, sleeping and timestamps"))
}

fn init_math() -> InitResult {
    Ok(NativeModule::new("math").with_doc("Floating-point math functions"))
}

fn init_random() -> InitResult {
    Ok(NativeModule::new("random").with_doc("Pseudo-random number generation"))
}

fn init_json() -> InitResult {
    Ok(NativeModule::new("json").with_doc("JSON encoding and decoding"))
}

fn init_strings() -> InitResult {
    Ok(NativeModule::new("strings").with_doc("String inspection and formatting helpers"))
}

/// Built-in module table, terminated by the sentinel row.
pub static STANDARD_INITTAB: &[InittabEntry] = &[
    InittabEntry::module("io", init_io),
    InittabEntry::module("os", init_os),
    InittabEntry::module("time", init_time),
    InittabEntry::module("math", init_math),
    InittabEntry::module("random", init_random),
    InittabEntry::module("json", init_json),
    InittabEntry::module("strings", init_strings),
    // Constructed by the interpreter core during bootstrap; names reserved
    // here so the loader recognizes them without initializing anything.
    InittabEntry::reserved("core"),
    InittabEntry::reserved("runtime"),
    InittabEntry::SENTINEL,
];

/// Names of the shipped built-in modules, in table order.
pub fn standard_module_names() -> impl Iterator<Item = &'static str> {
    STANDARD_INITTAB
        .iter()
        .take_while(|row| !row.is_sentinel())
        .filter_map(|row| row.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Inittab;

    #[test]
    fn standard_table_freezes_cleanly() {
        let table = Inittab::standard().unwrap();
        assert_eq!(table.len(), 9);
        assert!(table.contains("math"));
    }

    #[test]
    fn last_raw_row_is_the_sentinel() {
        let last = STANDARD_INITTAB.last().unwrap();
        assert!(last.is_sentinel());
    }

    #[test]
    fn initializers_build_modules_matching_their_entries() {
        let table = Inittab::standard().unwrap();
        for entry in table.iter() {
            if let Some(init) = entry.init() {
                let module = init().unwrap();
                assert_eq!(module.name(), entry.name());
                assert!(module.doc().is_some());
            }
        }
    }

    #[test]
    fn bootstrap_modules_are_reserved() {
        let table = Inittab::standard().unwrap();
        for name in ["core", "runtime"] {
            let entry = table.lookup(name).unwrap();
            assert!(entry.is_reserved());
        }
    }

    #[test]
    fn name_listing_matches_the_frozen_table() {
        let table = Inittab::standard().unwrap();
        let raw: Vec<_> = standard_module_names().collect();
        let frozen: Vec<_> = table.names().collect();
        assert_eq!(raw, frozen);
    }

    #[test]
    fn table_order_is_stable_across_freezes() {
        let first: Vec<_> = Inittab::standard().unwrap().names().collect();
        let second: Vec<_> = Inittab::standard().unwrap().names().collect();
        assert_eq!(first, second);
    }
}
