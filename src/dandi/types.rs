use serde::Deserialize;

/// One entry in the archive's asset listing. The listing carries more
/// keys (size, timestamps); serde drops what the lookup does not need.
#[derive(Deserialize, Debug, Clone)]
pub struct AssetSummary {
    pub asset_id: String,
    pub path: String,
}

/// A page of the asset listing. `next` is an absolute URL when more
/// pages follow.
#[derive(Deserialize, Debug)]
pub struct AssetPage {
    pub next: Option<String>,
    pub results: Vec<AssetSummary>,
}
