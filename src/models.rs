use serde::Deserialize;
use std::collections::BTreeMap;

/// A single record as returned by the items endpoint
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    #[serde(rename = "listId")]
    pub list_id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl ItemRecord {
    pub fn new(id: i64, list_id: i64, name: Option<&str>) -> Self {
        ItemRecord {
            id,
            list_id,
            name: name.map(String::from),
        }
    }
}

/// An item that survived filtering, ready for display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupItem {
    pub id: i64,
    pub name: String,
}

/// A group of items sharing a `listId`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub items: Vec<GroupItem>,
}

/// Load state of the list screen
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Success(Vec<Group>),
    Error,
}

/// Shapes raw endpoint records into the groups the list renders:
/// grouped by `listId`, null/blank names dropped, items sorted by name,
/// empty groups dropped, groups sorted by `listId`.
///
/// The endpoint carries no group names, so the `listId` doubles as one.
pub fn group_items(records: Vec<ItemRecord>) -> Vec<Group> {
    let mut by_list: BTreeMap<i64, Vec<GroupItem>> = BTreeMap::new();

    for record in records {
        let name = match record.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => continue,
        };
        by_list
            .entry(record.list_id)
            .or_default()
            .push(GroupItem { id: record.id, name });
    }

    by_list
        .into_iter()
        .map(|(list_id, mut items)| {
            items.sort_by(|a, b| a.name.cmp(&b.name));
            Group {
                id: list_id,
                name: list_id.to_string(),
                items,
            }
        })
        .collect()
}
