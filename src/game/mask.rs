use crate::game::raster::Raster;

/// Per-pixel opacity map used for collision tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    pub fn new(width: usize, height: usize) -> Self {
        Mask {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    /// Every opaque pixel of the raster becomes a set bit.
    pub fn from_raster(raster: &Raster) -> Self {
        let mut mask = Mask::new(raster.width(), raster.height());
        for (x, y, _) in raster.opaque_pixels() {
            mask.set(x, y);
        }
        mask
    }

    pub fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.bits[y * self.width + x] = true;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// True if any set bit of `other`, placed at `(dx, dy)` relative to this
    /// mask's origin, lands on a set bit of this mask.
    pub fn overlaps(&self, other: &Mask, dx: i32, dy: i32) -> bool {
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (dx + other.width as i32).min(self.width as i32);
        let y1 = (dy + other.height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }
        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x as usize, y as usize)
                    && other.get((x - dx) as usize, (y - dy) as usize)
                {
                    return true;
                }
            }
        }
        false
    }
}
