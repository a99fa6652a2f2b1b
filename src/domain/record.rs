use super::*;

/// Smallest id accepted from interactive or command line input.
pub const MIN_ID: u32 = 1;
/// Largest id accepted from interactive or command line input.
pub const MAX_ID: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "ID")]
    pub(crate) id: u32,

    #[serde(rename = "Name")]
    pub(crate) name: String,
}

impl Record {
    pub fn new(id: u32, name: &str) -> Self {
        Record {
            id,
            name: name.trim().to_string(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered list of records. Insertion order is kept and ids are unique
/// as long as the list is only grown through [`add`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Wraps records as they are. Ids are not checked for uniqueness and
    /// names are not trimmed; decoders run [`Collection::first_duplicate_id`]
    /// on the result.
    pub(crate) fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains_id(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// First id that appears more than once, scanning in order.
    pub fn first_duplicate_id(&self) -> Option<u32> {
        let mut seen = std::collections::HashSet::with_capacity(self.records.len());
        self.records
            .iter()
            .map(|record| record.id)
            .find(|id| !seen.insert(*id))
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

pub fn add(mut collection: Collection, id: u32, name: &str) -> (Collection, Outcome) {
    if collection.contains_id(id) {
        return (collection, Err(AppError::DuplicateKey(id)));
    }

    collection.records.push(Record::new(id, name));
    (collection, Ok(Success::Added(id)))
}

pub fn remove(mut collection: Collection, id: u32) -> (Collection, Outcome) {
    match collection.records.iter().position(|record| record.id == id) {
        Some(index) => {
            collection.records.remove(index);
            (collection, Ok(Success::Removed(id)))
        }
        None => (collection, Err(AppError::KeyNotFound(id))),
    }
}

/// Parses a user supplied id and checks it against [`MIN_ID`]..=[`MAX_ID`].
pub fn parse_id(input: &str) -> Result<u32, AppError> {
    let input = input.trim();
    let id = input.parse::<u32>().map_err(|e| {
        AppError::InvalidInput(format!("'{}' is not a valid customer ID ({})", input, e))
    })?;

    if !(MIN_ID..=MAX_ID).contains(&id) {
        return Err(AppError::InvalidInput(format!(
            "customer ID {} is outside {} to {}",
            id, MIN_ID, MAX_ID
        )));
    }
    Ok(id)
}

/// Parses the id of a record to look up. Any `u32` is accepted, since
/// imported or loaded records are not limited to [`MIN_ID`]..=[`MAX_ID`].
pub fn parse_lookup_id(input: &str) -> Result<u32, AppError> {
    let input = input.trim();
    input.parse::<u32>().map_err(|e| {
        AppError::InvalidInput(format!("'{}' is not a valid customer ID ({})", input, e))
    })
}
