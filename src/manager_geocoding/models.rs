use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Place {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Deserialize, Debug)]
pub struct PostalCodeLookup {
    #[serde(default)]
    pub places: Vec<Place>,
}
