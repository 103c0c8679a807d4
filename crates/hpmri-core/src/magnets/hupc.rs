//! HUPC magnet adapter
//!
//! Image frames are `slice{index:03}image001echo001.dcm`; EPSI datasets are
//! CSV series under the same store root. HUPC is the only magnet with full
//! spectroscopic support, so a missing spectral dataset here is a real
//! NotFound rather than a capability gap.

use super::{count_frames, resolve_frame, AcquisitionStore};
use crate::config::StoreLayout;
use crate::decoders;
use crate::decoders::SliceImage;
use crate::error::Result;

pub struct HupcStore {
    layout: StoreLayout,
}

impl HupcStore {
    pub fn new(layout: StoreLayout) -> Self {
        Self { layout }
    }
}

impl AcquisitionStore for HupcStore {
    fn decode_image(&self, index: usize) -> Result<SliceImage> {
        let path = resolve_frame(&self.layout.root, &self.layout.images, index)?;
        decoders::decode_slice(path)
    }

    fn decode_spectrum(&self, index: usize) -> Result<Vec<f32>> {
        let path = resolve_frame(&self.layout.root, &self.layout.spectra, index)?;
        decoders::decode_spectrum(path)
    }

    fn count(&self) -> usize {
        count_frames(&self.layout.root, &self.layout.images)
    }
}
