//! Data-only chart specifications
//!
//! Charts are plain values (mark + encoding + data table) that serialize to a
//! Vega-Lite shaped JSON document. Nothing in this module draws anything;
//! see [`render`] for the renderers.

pub mod render;

pub use render::*;

use serde::Serialize;
use serde_json::{Map, Value};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Inline data table: one JSON object per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Data {
    pub values: Vec<Map<String, Value>>,
}

impl Data {
    /// Build one row from `(field, value)` pairs.
    pub fn row<'a>(fields: impl IntoIterator<Item = (&'a str, Value)>) -> Map<String, Value> {
        fields
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Distinct field names across all rows.
    pub fn fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = Vec::new();
        for row in &self.values {
            for key in row.keys() {
                if !fields.contains(key) {
                    fields.push(key.clone());
                }
            }
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Bar,
    Rect,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl Mark {
    fn new(kind: MarkType) -> Self {
        Self {
            kind,
            width: None,
            baseline: None,
            font_size: None,
        }
    }

    pub fn bar() -> Self {
        Self::new(MarkType::Bar)
    }

    pub fn rect() -> Self {
        Self::new(MarkType::Rect)
    }

    pub fn text() -> Self {
        Self::new(MarkType::Text)
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_baseline(mut self, baseline: &str) -> Self {
        self.baseline = Some(baseline.to_string());
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }
}

/// Measurement type of an encoded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Nominal,
    Ordinal,
    Quantitative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BinParams {
    pub maxbins: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub label_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendDirection {
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub direction: LegendDirection,
}

/// A field-to-channel mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<BinParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl FieldDef {
    pub fn new(field: &str, field_type: FieldType) -> Self {
        Self {
            field: Some(field.to_string()),
            field_type,
            aggregate: None,
            bin: None,
            title: None,
            axis: None,
            legend: None,
            format: None,
        }
    }

    /// Row count aggregate (`count()`), no source field.
    pub fn count() -> Self {
        Self {
            field: None,
            aggregate: Some(Aggregate::Count),
            ..Self::new("", FieldType::Quantitative)
        }
    }

    pub fn with_bin(mut self, maxbins: usize) -> Self {
        self.bin = Some(BinParams { maxbins });
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_label_angle(mut self, angle: f64) -> Self {
        self.axis = Some(Axis { label_angle: angle });
        self
    }

    pub fn with_legend(mut self, direction: LegendDirection) -> Self {
        self.legend = Some(Legend { direction });
        self
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }
}

/// `test` is a Vega expression over `datum`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub test: String,
    pub value: String,
}

/// Constant value chosen by a predicate, with a fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalValue {
    pub condition: Condition,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorDef {
    Field(FieldDef),
    Conditional(ConditionalValue),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FieldDef>,
}

/// A single mark over one data table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitChart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    pub mark: Mark,
    pub encoding: Encoding,
}

/// Several marks drawn on top of each other over shared data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerChart {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub data: Data,
    pub layer: Vec<UnitChart>,
}

/// One panel of `spec` per distinct value of the `facet` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetChart {
    pub data: Data,
    pub facet: FieldDef,
    pub columns: usize,
    pub spec: UnitChart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HConcatChart {
    pub hconcat: Vec<Chart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VConcatChart {
    pub vconcat: Vec<Chart>,
}

/// A composed chart specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Chart {
    Unit(UnitChart),
    Layer(LayerChart),
    Facet(FacetChart),
    HConcat(HConcatChart),
    VConcat(VConcatChart),
}

impl Chart {
    /// A chart with nothing in it.
    pub fn empty() -> Self {
        Chart::VConcat(VConcatChart { vconcat: Vec::new() })
    }

    /// Place charts side by side. A single chart is returned as is.
    pub fn hconcat(mut charts: Vec<Chart>) -> Self {
        match charts.len() {
            0 => Self::empty(),
            1 => charts.remove(0),
            _ => Chart::HConcat(HConcatChart { hconcat: charts }),
        }
    }

    /// Stack charts vertically. A single chart is returned as is.
    pub fn vconcat(mut charts: Vec<Chart>) -> Self {
        match charts.len() {
            0 => Self::empty(),
            1 => charts.remove(0),
            _ => Chart::VConcat(VConcatChart { vconcat: charts }),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Chart::Unit(unit) => unit.title.as_deref(),
            Chart::Layer(layer) => Some(layer.title.as_str()),
            Chart::Facet(facet) => facet.spec.title.as_deref(),
            Chart::HConcat(_) | Chart::VConcat(_) => None,
        }
    }

    /// The leaf charts in drawing order, each with the data table it reads.
    pub fn panels(&self) -> Vec<(Option<&str>, &Data)> {
        match self {
            Chart::Unit(unit) => unit
                .data
                .as_ref()
                .map(|data| vec![(unit.title.as_deref(), data)])
                .unwrap_or_default(),
            Chart::Layer(layer) => vec![(Some(layer.title.as_str()), &layer.data)],
            Chart::Facet(facet) => vec![(facet.spec.title.as_deref(), &facet.data)],
            Chart::HConcat(HConcatChart { hconcat: charts })
            | Chart::VConcat(VConcatChart { vconcat: charts }) => {
                charts.iter().flat_map(Chart::panels).collect()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// JSON document with the Vega-Lite `$schema` key.
    pub fn to_vega_lite(&self) -> serde_json::Result<Value> {
        let mut value = self.to_json()?;
        if let Value::Object(map) = &mut value {
            map.insert("$schema".to_string(), Value::from(VEGA_LITE_SCHEMA));
        }
        Ok(value)
    }
}
