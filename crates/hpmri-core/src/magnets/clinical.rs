//! Clinical magnet adapter
//!
//! The clinical magnet produces proton images but no HP-MRI datasets: the
//! frame count is zero and spectrum requests yield an empty series, so
//! callers can branch on capability without error handling. Explicitly
//! addressed image indices still decode.

use super::{resolve_frame, AcquisitionStore};
use crate::config::StoreLayout;
use crate::decoders;
use crate::decoders::SliceImage;
use crate::error::Result;

pub struct ClinicalStore {
    layout: StoreLayout,
}

impl ClinicalStore {
    pub fn new(layout: StoreLayout) -> Self {
        Self { layout }
    }
}

impl AcquisitionStore for ClinicalStore {
    fn decode_image(&self, index: usize) -> Result<SliceImage> {
        let path = resolve_frame(&self.layout.root, &self.layout.images, index)?;
        decoders::decode_slice(path)
    }

    fn decode_spectrum(&self, _index: usize) -> Result<Vec<f32>> {
        // No spectroscopic capability: defined empty result, not an error
        Ok(Vec::new())
    }

    fn count(&self) -> usize {
        0
    }
}
