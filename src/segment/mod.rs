// src/segment/mod.rs
mod field;
mod options;

pub use field::SegmentField;
pub use options::{SegmentFields, SegmentOptions};

use crate::error::{Result, SegmentError};
use crate::types::{AlgorithmType, CodedConcept};
use serde::{Deserialize, Serialize};

/// Descriptor of one segment in a DICOM Segmentation object
///
/// A `Segment` is immutable once built: its fields are private and every
/// accessor hands out a shared borrow or a copy. It is `Send + Sync`, so an
/// encoder can share it across threads behind an `Arc` without locking.
///
/// Nothing here checks that segment numbers are unique or positive; that is
/// up to whoever assembles the segments into a set.
///
/// Fields cannot be reassigned from outside the crate:
///
/// ```compile_fail
/// use dcmseg_rs::{Segment, SegmentOptions};
///
/// fn relabel(segment: &mut Segment) {
///     segment.label = String::from("Edema");
/// }
/// ```
///
/// and the UID list is only ever lent out read-only:
///
/// ```compile_fail
/// use dcmseg_rs::Segment;
///
/// fn reorder(segment: &Segment) {
///     segment.sop_instance_uids().reverse();
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SegmentOptions", into = "SegmentOptions")]
pub struct Segment {
    uid: String,
    number: u16,
    label: String,
    property_category: CodedConcept,
    property_type: CodedConcept,
    algorithm_name: String,
    algorithm_type: AlgorithmType,
    study_instance_uid: String,
    series_instance_uid: String,
    sop_instance_uids: Box<[String]>,
    palette_color_lookup_table_uid: Option<String>,
}

fn require<T>(value: Option<T>, field: SegmentField) -> Result<T> {
    value.ok_or(SegmentError::MissingField(field))
}

impl Segment {
    /// Build a segment from loosely populated options.
    ///
    /// Required attributes are checked for presence only, in the order given
    /// by [`SegmentField::REQUIRED`]; the first absent one is reported.
    /// Values themselves are stored as given.
    ///
    /// # Example
    ///
    /// ```
    /// use dcmseg_rs::{Segment, SegmentField, SegmentOptions};
    ///
    /// let options = SegmentOptions {
    ///     uid: Some("t1".into()),
    ///     number: Some(1),
    ///     label: Some("Tumor".into()),
    ///     ..Default::default()
    /// };
    /// let err = Segment::new(options).unwrap_err();
    /// assert_eq!(err.missing_field(), Some(SegmentField::PropertyCategory));
    /// assert_eq!(err.to_string(), "Segmented Property Category Code is required.");
    /// ```
    pub fn new(options: SegmentOptions) -> Result<Self> {
        let SegmentOptions {
            uid,
            number,
            label,
            property_category,
            property_type,
            algorithm_name,
            algorithm_type,
            study_instance_uid,
            series_instance_uid,
            sop_instance_uids,
            palette_color_lookup_table_uid,
        } = options;

        Ok(Segment {
            uid: require(uid, SegmentField::Uid)?,
            number: require(number, SegmentField::Number)?,
            label: require(label, SegmentField::Label)?,
            property_category: require(property_category, SegmentField::PropertyCategory)?,
            property_type: require(property_type, SegmentField::PropertyType)?,
            algorithm_name: require(algorithm_name, SegmentField::AlgorithmName)?,
            algorithm_type: require(algorithm_type, SegmentField::AlgorithmType)?,
            study_instance_uid: require(study_instance_uid, SegmentField::StudyInstanceUid)?,
            series_instance_uid: require(series_instance_uid, SegmentField::SeriesInstanceUid)?,
            sop_instance_uids: require(sop_instance_uids, SegmentField::SopInstanceUids)?.into_boxed_slice(),
            palette_color_lookup_table_uid,
        })
    }

    /// Unique Tracking Identifier
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Segment Number (one-based)
    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Segmented Property Category Code
    pub fn property_category(&self) -> &CodedConcept {
        &self.property_category
    }

    /// Segmented Property Type Code
    pub fn property_type(&self) -> &CodedConcept {
        &self.property_type
    }

    pub fn algorithm_name(&self) -> &str {
        &self.algorithm_name
    }

    pub fn algorithm_type(&self) -> &AlgorithmType {
        &self.algorithm_type
    }

    /// Study Instance UID of the source images
    pub fn study_instance_uid(&self) -> &str {
        &self.study_instance_uid
    }

    /// Series Instance UID of the source images
    pub fn series_instance_uid(&self) -> &str {
        &self.series_instance_uid
    }

    /// SOP Instance UIDs of the source images, in the order they were given.
    /// Order maps frames to source images, so duplicates are kept.
    pub fn sop_instance_uids(&self) -> &[String] {
        &self.sop_instance_uids
    }

    pub fn palette_color_lookup_table_uid(&self) -> Option<&str> {
        self.palette_color_lookup_table_uid.as_deref()
    }

    /// Consume the segment and hand back its owned values
    pub fn into_fields(self) -> SegmentFields {
        SegmentFields {
            uid: self.uid,
            number: self.number,
            label: self.label,
            property_category: self.property_category,
            property_type: self.property_type,
            algorithm_name: self.algorithm_name,
            algorithm_type: self.algorithm_type,
            study_instance_uid: self.study_instance_uid,
            series_instance_uid: self.series_instance_uid,
            sop_instance_uids: self.sop_instance_uids.into_vec(),
            palette_color_lookup_table_uid: self.palette_color_lookup_table_uid,
        }
    }

    /// Copy the segment back into options, e.g. to derive a modified segment
    pub fn to_options(&self) -> SegmentOptions {
        SegmentOptions::from(self.clone())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Segment::new(SegmentOptions::from_json(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<SegmentFields> for Segment {
    fn from(fields: SegmentFields) -> Self {
        Segment {
            uid: fields.uid,
            number: fields.number,
            label: fields.label,
            property_category: fields.property_category,
            property_type: fields.property_type,
            algorithm_name: fields.algorithm_name,
            algorithm_type: fields.algorithm_type,
            study_instance_uid: fields.study_instance_uid,
            series_instance_uid: fields.series_instance_uid,
            sop_instance_uids: fields.sop_instance_uids.into_boxed_slice(),
            palette_color_lookup_table_uid: fields.palette_color_lookup_table_uid,
        }
    }
}

impl TryFrom<SegmentOptions> for Segment {
    type Error = SegmentError;

    fn try_from(options: SegmentOptions) -> Result<Self> {
        Segment::new(options)
    }
}

impl From<Segment> for SegmentOptions {
    fn from(segment: Segment) -> Self {
        SegmentOptions::from(segment.into_fields())
    }
}
