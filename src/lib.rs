// src/lib.rs
//! # dcmseg-rs
//!
//! Immutable, validated segment descriptors for writers of DICOM Segmentation
//! objects.
//!
//! A [`Segment`] records what one segment is (tracking UID, number, label,
//! coded property category and type, producing algorithm) and which source
//! images it was derived from. Encoders assemble many of them into a
//! Segmentation instance.
//!
//! ## Features
//!
//! - 🔒 **Immutable**: private fields and read-only accessors, safe to share across threads
//! - ✅ **Presence Checked**: a missing required attribute is reported by name, first one wins
//! - 🎯 **Type Safe**: a strict [`SegmentFields`] input that cannot be incomplete
//! - 📦 **Serde Support**: JSON in and out with DICOM-style attribute keys
//!
//! ## Quick Start
//!
//! ```rust
//! use dcmseg_rs::*;
//!
//! fn main() -> Result<()> {
//!     let segment = Segment::new(SegmentOptions {
//!         uid: Some("t1".into()),
//!         number: Some(1),
//!         label: Some("Tumor".into()),
//!         property_category: Some(CodedConcept::new("49755003", "SCT", "Morphologically Altered Structure")),
//!         property_type: Some(CodedConcept::new("108369006", "SCT", "Neoplasm")),
//!         algorithm_name: Some("seg-net".into()),
//!         algorithm_type: Some(AlgorithmType::Automatic),
//!         study_instance_uid: Some("1.2.840.S".into()),
//!         series_instance_uid: Some("1.2.840.Se".into()),
//!         sop_instance_uids: Some(vec!["1.2.840.I1".into(), "1.2.840.I2".into()]),
//!         palette_color_lookup_table_uid: None,
//!     })?;
//!
//!     assert_eq!(segment.number(), 1);
//!     assert_eq!(segment.palette_color_lookup_table_uid(), None);
//!     Ok(())
//! }
//! ```
//!
//! ### From JSON
//!
//! ```rust
//! use dcmseg_rs::*;
//!
//! let err = Segment::from_json(r#"{"uid": "t1", "number": 1}"#).unwrap_err();
//! assert_eq!(err.to_string(), "Segment Label is required.");
//! ```

// Modules
pub mod error;
pub mod types;
pub mod segment;

// Re-export commonly used types at the crate root for convenience
pub use error::{SegmentError, Result};

pub use types::{
    AlgorithmType,
    CodedConcept,
};

pub use segment::{
    Segment,
    SegmentField,
    SegmentFields,
    SegmentOptions,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use dcmseg_rs::prelude::*;
    //! ```

    pub use crate::error::{SegmentError, Result};
    pub use crate::types::{AlgorithmType, CodedConcept};
    pub use crate::segment::{Segment, SegmentOptions};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_error_names_missing_field() {
        let err = SegmentError::MissingField(SegmentField::SeriesInstanceUid);
        assert_eq!(err.to_string(), "Series Instance UID is required.");
        assert_eq!(err.missing_field(), Some(SegmentField::SeriesInstanceUid));
    }

    #[test]
    fn test_empty_options_fail_on_uid() {
        let err = Segment::new(SegmentOptions::default()).unwrap_err();
        assert!(matches!(err, SegmentError::MissingField(SegmentField::Uid)));
        assert_eq!(err.to_string(), "Unique Tracking Identifier is required.");
    }
}
