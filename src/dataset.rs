use anyhow::{Context, Result};
use eventmap_boundary::{events_from_dataset, EventsDataset, TypeDefinition};
use eventmap_core::usecases::TypeHierarchy;
use eventmap_entities::{event::Event, id::Id};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

pub type Events = BTreeMap<Id, Event>;

pub fn read_events<R: Read>(reader: R) -> Result<Events> {
    let dataset: EventsDataset = serde_json::from_reader(reader)?;
    Ok(events_from_dataset(dataset)?)
}

pub fn load_events(path: &Path) -> Result<Events> {
    let file = File::open(path)
        .with_context(|| format!("Unable to open events dataset {}", path.display()))?;
    let events = read_events(BufReader::new(file))
        .with_context(|| format!("Invalid events dataset {}", path.display()))?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

pub fn read_type_hierarchy<R: Read>(reader: R) -> Result<TypeHierarchy> {
    let definitions: Vec<TypeDefinition> = serde_json::from_reader(reader)?;
    Ok(definitions.into_iter().collect())
}

pub fn load_type_hierarchy(path: &Path) -> Result<TypeHierarchy> {
    let file = File::open(path)
        .with_context(|| format!("Unable to open type hierarchy {}", path.display()))?;
    read_type_hierarchy(BufReader::new(file))
        .with_context(|| format!("Invalid type hierarchy {}", path.display()))
}
