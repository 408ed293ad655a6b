use crate::core::{Jeep, JeepModel, JeepQuery, Storage, Trim};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Parses a CSV catalog with a `modelPk,modelId,trimLevel,numDoors,wheelSize,basePrice` header.
pub fn parse_catalog(data: &[u8]) -> Result<Vec<Jeep>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(data);

    let mut jeeps = Vec::new();
    for row in reader.deserialize() {
        let jeep: Jeep = row?;
        jeeps.push(jeep);
    }
    Ok(jeeps)
}

fn matching(jeeps: &[Jeep], model: JeepModel, trim: &Trim) -> Vec<Jeep> {
    jeeps
        .iter()
        .filter(|jeep| jeep.model_id == model && jeep.trim_level == trim.as_str())
        .cloned()
        .collect()
}

/// Catalog held in memory. Row order is kept as loaded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJeepStore {
    jeeps: Vec<Jeep>,
}

impl InMemoryJeepStore {
    pub fn new(jeeps: Vec<Jeep>) -> Self {
        Self { jeeps }
    }

    pub fn from_csv(data: &[u8]) -> Result<Self> {
        Ok(Self::new(parse_catalog(data)?))
    }

    pub fn len(&self) -> usize {
        self.jeeps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jeeps.is_empty()
    }
}

#[async_trait]
impl JeepQuery for InMemoryJeepStore {
    async fn fetch_jeeps(&self, model: JeepModel, trim: &Trim) -> Result<Vec<Jeep>> {
        Ok(matching(&self.jeeps, model, trim))
    }
}

/// Catalog read from a CSV file through [`Storage`] on every query, so
/// edits to the file are visible without a restart.
pub struct CsvJeepStore<S: Storage> {
    storage: S,
    file: String,
}

impl<S: Storage> CsvJeepStore<S> {
    pub fn new(storage: S, file: impl Into<String>) -> Self {
        Self {
            storage,
            file: file.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> JeepQuery for CsvJeepStore<S> {
    async fn fetch_jeeps(&self, model: JeepModel, trim: &Trim) -> Result<Vec<Jeep>> {
        let data = self.storage.read_file(&self.file).await?;
        let jeeps = parse_catalog(&data)?;
        tracing::debug!("Loaded {} catalog rows from {}", jeeps.len(), self.file);
        Ok(matching(&jeeps, model, trim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
modelPk,modelId,trimLevel,numDoors,wheelSize,basePrice
1,WRANGLER,Sport,2,17,28475.00
2,WRANGLER,Sport,4,17,31975.00
3,WRANGLER,Rubicon,2,17,37025.00
4,GRAND_CHEROKEE,Laredo,4,17,34645.00
";

    #[test]
    fn test_parse_catalog() {
        let jeeps = parse_catalog(CATALOG.as_bytes()).unwrap();
        assert_eq!(jeeps.len(), 4);
        assert_eq!(jeeps[3].model_id, JeepModel::GrandCherokee);
        assert_eq!(jeeps[1].base_price.to_string(), "31975.00");
    }

    #[test]
    fn test_parse_catalog_rejects_unknown_model() {
        let data = "modelPk,modelId,trimLevel,numDoors,wheelSize,basePrice\n1,PINTO,Base,2,14,1999.00\n";
        assert!(parse_catalog(data.as_bytes()).is_err());
    }

    #[tokio::test]
    async fn test_in_memory_store_filters_on_model_and_trim() {
        let store = InMemoryJeepStore::from_csv(CATALOG.as_bytes()).unwrap();
        let trim = Trim::parse("Sport").unwrap();

        let jeeps = store.fetch_jeeps(JeepModel::Wrangler, &trim).await.unwrap();
        assert_eq!(jeeps.len(), 2);
        assert!(jeeps.iter().all(|j| j.trim_level == "Sport"));

        let none = store.fetch_jeeps(JeepModel::Gladiator, &trim).await.unwrap();
        assert!(none.is_empty());
    }
}
