//! Extension method detection.
//!
//! C# 14 `extension` blocks document their members on a compiler-generated
//! container type; the static method the compiler actually emits carries an
//! `<inheritdoc>` pointing back at it, plus one extra leading parameter for the
//! receiver. That extra parameter is the only signal in the XML, so detection
//! compares parameter counts across the inherit link.

use crate::model::{Lookup, Record};
use crate::parser::identifier::{count_parameters, first_parameter_type};
use std::collections::HashMap;

/// Raw identifier of an extension method → raw type it extends.
#[derive(Debug, Default)]
pub struct ExtensionMap {
    extended: HashMap<String, String>,
}

impl ExtensionMap {
    /// Scan every record once and collect the extension methods.
    pub fn detect(records: &[Record], lookup: &Lookup) -> Self {
        let mut extended = HashMap::new();

        for record in records {
            let Some(target) = record.inherit_target() else {
                continue;
            };
            if !lookup.contains_key(target) {
                continue;
            }

            let own = count_parameters(&record.raw_identifier);
            let referenced = count_parameters(target);
            if own != referenced + 1 {
                continue;
            }

            if let Some(receiver) = first_parameter_type(&record.raw_identifier) {
                tracing::debug!(
                    member = %record.raw_identifier,
                    extends = receiver,
                    "detected extension method"
                );
                extended.insert(record.raw_identifier.clone(), receiver.to_string());
            }
        }

        ExtensionMap { extended }
    }

    /// Raw type extended by the given member, if it is an extension method.
    pub fn extended_type(&self, raw_identifier: &str) -> Option<&str> {
        self.extended.get(raw_identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extended.len()
    }
}
