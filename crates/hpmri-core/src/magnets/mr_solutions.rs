//! MR Solutions magnet adapter
//!
//! Image frames are `5091_{index:05}.dcm` under a fixed store root.
//! Spectroscopic processing is not available for this magnet; spectrum
//! requests yield an empty series.

use super::{count_frames, resolve_frame, AcquisitionStore};
use crate::config::StoreLayout;
use crate::decoders;
use crate::decoders::SliceImage;
use crate::error::Result;

pub struct MrSolutionsStore {
    layout: StoreLayout,
}

impl MrSolutionsStore {
    pub fn new(layout: StoreLayout) -> Self {
        Self { layout }
    }
}

impl AcquisitionStore for MrSolutionsStore {
    fn decode_image(&self, index: usize) -> Result<SliceImage> {
        let path = resolve_frame(&self.layout.root, &self.layout.images, index)?;
        decoders::decode_slice(path)
    }

    fn decode_spectrum(&self, _index: usize) -> Result<Vec<f32>> {
        // No spectroscopic capability: defined empty result, not an error
        Ok(Vec::new())
    }

    fn count(&self) -> usize {
        count_frames(&self.layout.root, &self.layout.images)
    }
}
