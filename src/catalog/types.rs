use serde::Deserialize;

/// Top-level body of a `GET /volumes` response.
///
/// `items` is optional on the wire: the catalog omits it entirely when a query
/// matches nothing, and a proxy error page won't have it either. The source
/// turns `None` into `FetchError::MissingItems`.
#[derive(Deserialize, Debug, Default)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<RawVolume>>,
}

/// A single volume record as the catalog sends it. Only the fields the
/// normalizer reads are modelled; everything else is ignored by serde.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawVolume {
    pub id: String,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}
