//! Second pass: copy same-row values into reference fields.

use crate::generators::GeneratedValue;
use crate::row::Row;

/// A reference field and the name of the field it copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSlot<'a> {
    pub name: &'a str,
    pub source: Option<&'a str>,
}

/// Fill every reference slot from the completed row, in declaration order.
///
/// A missing or unknown source resolves to `Null`. Returns the number of
/// slots left unresolved.
pub fn resolve_references(row: &mut Row, slots: &[ReferenceSlot<'_>]) -> u64 {
    let mut unresolved = 0;
    for slot in slots {
        let value = slot
            .source
            .filter(|source| *source != slot.name)
            .and_then(|source| row.get(source))
            .cloned();
        match value {
            Some(value) => row.insert(slot.name, value),
            None => {
                unresolved += 1;
                row.insert(slot.name, GeneratedValue::Null);
            }
        }
    }
    unresolved
}
