use std::collections::HashMap;

use crate::model::{GroupBy, Record};

#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub label: String,
    pub records: Vec<&'a Record>,
}

pub fn group_records<'a>(records: &[&'a Record], group_by: GroupBy) -> Vec<Group<'a>> {
    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut slot_by_label: HashMap<String, usize> = HashMap::new();

    for &record in records {
        let label = group_label(record, group_by);
        match slot_by_label.get(&label) {
            Some(&slot) => groups[slot].records.push(record),
            None => {
                slot_by_label.insert(label.clone(), groups.len());
                groups.push(Group {
                    label,
                    records: vec![record],
                });
            }
        }
    }
    groups
}

pub fn group_label(record: &Record, group_by: GroupBy) -> String {
    match (group_by, record.season) {
        (GroupBy::ManagerSeason, Some(season)) => format!("{} ({})", record.manager, season),
        _ => record.manager.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_group.rs"]
mod tests;
