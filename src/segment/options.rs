// src/segment/options.rs
use crate::segment::SegmentField;
use crate::types::{AlgorithmType, CodedConcept};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Loosely populated construction input for a [`Segment`](crate::Segment).
///
/// Every attribute is optional here so that partially filled input, such as
/// deserialized data, can be handed to `Segment::new`, which reports the
/// first required attribute that is absent.
///
/// When parsing JSON, an explicit `null` is read as absent, the same as a
/// missing key. Value types are checked by the parser before any presence
/// check runs, so a payload such as `{"number": 70000}` fails with a JSON
/// error rather than a missing-field error.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentOptions {
    pub uid: Option<String>,
    pub number: Option<u16>,
    pub label: Option<String>,
    pub property_category: Option<CodedConcept>,
    pub property_type: Option<CodedConcept>,
    pub algorithm_name: Option<String>,
    pub algorithm_type: Option<AlgorithmType>,
    #[serde(rename = "studyInstanceUID")]
    pub study_instance_uid: Option<String>,
    #[serde(rename = "seriesInstanceUID")]
    pub series_instance_uid: Option<String>,
    #[serde(rename = "sopInstanceUIDs")]
    pub sop_instance_uids: Option<Vec<String>>,
    #[serde(rename = "paletteColorLookupTableUID")]
    pub palette_color_lookup_table_uid: Option<String>,
}

impl SegmentOptions {
    /// All absent required attributes, in check order
    pub fn missing_fields(&self) -> Vec<SegmentField> {
        SegmentField::REQUIRED
            .iter()
            .copied()
            .filter(|field| !self.has(*field))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        SegmentField::REQUIRED.iter().all(|field| self.has(*field))
    }

    fn has(&self, field: SegmentField) -> bool {
        match field {
            SegmentField::Uid => self.uid.is_some(),
            SegmentField::Number => self.number.is_some(),
            SegmentField::Label => self.label.is_some(),
            SegmentField::PropertyCategory => self.property_category.is_some(),
            SegmentField::PropertyType => self.property_type.is_some(),
            SegmentField::AlgorithmName => self.algorithm_name.is_some(),
            SegmentField::AlgorithmType => self.algorithm_type.is_some(),
            SegmentField::StudyInstanceUid => self.study_instance_uid.is_some(),
            SegmentField::SeriesInstanceUid => self.series_instance_uid.is_some(),
            SegmentField::SopInstanceUids => self.sop_instance_uids.is_some(),
            SegmentField::PaletteColorLookupTableUid => self.palette_color_lookup_table_uid.is_some(),
        }
    }

    /// Parse options from JSON without checking presence
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Fully populated construction input.
///
/// Required attributes are not optional, so conversion into a `Segment`
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentFields {
    pub uid: String,
    pub number: u16,
    pub label: String,
    pub property_category: CodedConcept,
    pub property_type: CodedConcept,
    pub algorithm_name: String,
    pub algorithm_type: AlgorithmType,
    pub study_instance_uid: String,
    pub series_instance_uid: String,
    pub sop_instance_uids: Vec<String>,
    pub palette_color_lookup_table_uid: Option<String>,
}

impl From<SegmentFields> for SegmentOptions {
    fn from(fields: SegmentFields) -> Self {
        SegmentOptions {
            uid: Some(fields.uid),
            number: Some(fields.number),
            label: Some(fields.label),
            property_category: Some(fields.property_category),
            property_type: Some(fields.property_type),
            algorithm_name: Some(fields.algorithm_name),
            algorithm_type: Some(fields.algorithm_type),
            study_instance_uid: Some(fields.study_instance_uid),
            series_instance_uid: Some(fields.series_instance_uid),
            sop_instance_uids: Some(fields.sop_instance_uids),
            palette_color_lookup_table_uid: fields.palette_color_lookup_table_uid,
        }
    }
}
