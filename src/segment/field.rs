// src/segment/field.rs
use std::fmt;

/// Identifies one attribute of a segment descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentField {
    Uid,
    Number,
    Label,
    PropertyCategory,
    PropertyType,
    AlgorithmName,
    AlgorithmType,
    StudyInstanceUid,
    SeriesInstanceUid,
    SopInstanceUids,
    PaletteColorLookupTableUid,
}

impl SegmentField {
    /// Required fields in the order presence is checked
    pub const REQUIRED: [SegmentField; 10] = [
        SegmentField::Uid,
        SegmentField::Number,
        SegmentField::Label,
        SegmentField::PropertyCategory,
        SegmentField::PropertyType,
        SegmentField::AlgorithmName,
        SegmentField::AlgorithmType,
        SegmentField::StudyInstanceUid,
        SegmentField::SeriesInstanceUid,
        SegmentField::SopInstanceUids,
    ];

    /// Attribute key used in serialized options
    pub fn key(&self) -> &'static str {
        match self {
            SegmentField::Uid => "uid",
            SegmentField::Number => "number",
            SegmentField::Label => "label",
            SegmentField::PropertyCategory => "propertyCategory",
            SegmentField::PropertyType => "propertyType",
            SegmentField::AlgorithmName => "algorithmName",
            SegmentField::AlgorithmType => "algorithmType",
            SegmentField::StudyInstanceUid => "studyInstanceUID",
            SegmentField::SeriesInstanceUid => "seriesInstanceUID",
            SegmentField::SopInstanceUids => "sopInstanceUIDs",
            SegmentField::PaletteColorLookupTableUid => "paletteColorLookupTableUID",
        }
    }

    /// Domain name of the attribute, as used in error messages
    pub fn description(&self) -> &'static str {
        match self {
            SegmentField::Uid => "Unique Tracking Identifier",
            SegmentField::Number => "Segment Number",
            SegmentField::Label => "Segment Label",
            SegmentField::PropertyCategory => "Segmented Property Category Code",
            SegmentField::PropertyType => "Segmented Property Type Code",
            SegmentField::AlgorithmName => "Segment Algorithm Name",
            SegmentField::AlgorithmType => "Segment Algorithm Type",
            SegmentField::StudyInstanceUid => "Study Instance UID",
            SegmentField::SeriesInstanceUid => "Series Instance UID",
            SegmentField::SopInstanceUids => "SOP Instance UIDs",
            SegmentField::PaletteColorLookupTableUid => "Palette Color Lookup Table UID",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, SegmentField::PaletteColorLookupTableUid)
    }

    pub(crate) fn requirement_message(&self) -> String {
        // plural attribute names take "are"
        let verb = match self {
            SegmentField::SopInstanceUids => "are",
            _ => "is",
        };
        format!("{} {} required.", self.description(), verb)
    }
}

impl fmt::Display for SegmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
