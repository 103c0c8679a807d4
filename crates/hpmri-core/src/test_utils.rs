//! Shared fixtures for on-disk acquisition store tests.

use std::path::Path;

use dicom::core::{DataElement, PrimitiveValue, VR};
use dicom::dictionary_std::tags;
use dicom::object::{FileMetaTableBuilder, InMemDicomObject};

use crate::config::{AcquisitionConfig, FilePattern, StoreLayout};

pub(crate) fn hupc_layout(root: &Path) -> StoreLayout {
    StoreLayout {
        root: root.to_path_buf(),
        images: FilePattern::new("slice", 3, "image001echo001.dcm"),
        spectra: FilePattern::new("epsi_", 5, ".csv"),
    }
}

/// Config whose HUPC store lives under `root`; other magnets keep their
/// default (nonexistent in tests) roots.
pub(crate) fn config_with_hupc_root(root: &Path) -> AcquisitionConfig {
    AcquisitionConfig {
        hupc: hupc_layout(root),
        ..AcquisitionConfig::default()
    }
}

/// Write a minimal single-frame MR DICOM file with 16-bit unsigned pixels.
pub(crate) fn write_test_dicom(path: &Path, width: u16, height: u16, pixels: &[u16]) {
    assert_eq!(pixels.len(), width as usize * height as usize);

    let mut obj = InMemDicomObject::new_empty();
    obj.put(DataElement::new(
        tags::ROWS,
        VR::US,
        PrimitiveValue::from(height),
    ));
    obj.put(DataElement::new(
        tags::COLUMNS,
        VR::US,
        PrimitiveValue::from(width),
    ));
    obj.put(DataElement::new(
        tags::SAMPLES_PER_PIXEL,
        VR::US,
        PrimitiveValue::from(1_u16),
    ));
    obj.put(DataElement::new(
        tags::BITS_ALLOCATED,
        VR::US,
        PrimitiveValue::from(16_u16),
    ));
    obj.put(DataElement::new(
        tags::BITS_STORED,
        VR::US,
        PrimitiveValue::from(16_u16),
    ));
    obj.put(DataElement::new(
        tags::HIGH_BIT,
        VR::US,
        PrimitiveValue::from(15_u16),
    ));
    obj.put(DataElement::new(
        tags::PIXEL_REPRESENTATION,
        VR::US,
        PrimitiveValue::from(0_u16),
    ));

    let bytes: Vec<u8> = pixels.iter().flat_map(|v| v.to_le_bytes()).collect();
    obj.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OW,
        PrimitiveValue::U8(bytes.into()),
    ));

    let obj = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.4")
                .media_storage_sop_instance_uid("2.25.79824789820000001")
                .transfer_syntax("1.2.840.10008.1.2.1"),
        )
        .expect("failed to build file meta table");
    obj.write_to_file(path).expect("failed to write test DICOM");
}
