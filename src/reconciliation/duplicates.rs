//! Duplicate movement detection

use chrono::SecondsFormat;
use std::collections::HashMap;

use crate::types::*;

/// Separator between the components of a movement identity key
pub const IDENTIFIER_SEPARATOR: char = ':';

/// Identity key of a movement: date, label and amount.
///
/// The `id` is deliberately absent: two movements with different ids but the
/// same content are the same transaction.
pub fn movement_identifier(movement: &Movement) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        movement.date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        movement.label,
        movement.amount,
        sep = IDENTIFIER_SEPARATOR
    )
}

/// Group movements by identity and return every group with more than one member.
///
/// Groups come out in the order their key was first seen; movements keep
/// their input order inside a group.
pub fn find_duplicates(movements: &[Movement]) -> Vec<DuplicateGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for movement in movements {
        let identifier = movement_identifier(movement);
        match index.get(&identifier) {
            Some(&slot) => groups[slot].movements.push(movement.clone()),
            None => {
                index.insert(identifier.clone(), groups.len());
                groups.push(DuplicateGroup {
                    identifier,
                    movements: vec![movement.clone()],
                });
            }
        }
    }

    groups.retain(|group| group.movements.len() > 1);
    groups
}
