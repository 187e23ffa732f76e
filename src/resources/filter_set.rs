use serde::Serialize;

/// Search constraints pulled out of a free-text query.
///
/// A `None` field means "no constraint". The whole set is echoed back to the
/// caller with `null` for absent fields, while [`FilterSet::query_params`]
/// drops them before anything is sent upstream.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSet {
    pub city: Option<String>,
    pub area: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub beds: Option<u64>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.query_params().is_empty()
    }

    /// Query parameters for the listings API, in a fixed order, present fields only.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("city", &self.city),
            ("area", &self.area),
            ("type", &self.property_type),
        ];
        let numbers = [
            ("beds", self.beds),
            ("min_price", self.min_price),
            ("max_price", self.max_price),
        ];

        text.into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
            .chain(
                numbers
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
            )
            .collect()
    }
}
