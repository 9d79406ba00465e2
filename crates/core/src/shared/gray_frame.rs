/// Single-channel 8-bit image derived from a [`Frame`](super::frame::Frame).
///
/// Recomputed from scratch for every captured frame; nothing carries over
/// between iterations.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayFrame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl GrayFrame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize,
            "data length must equal width * height"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self::new(vec![value; width as usize * height as usize], width, height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width as usize + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_row_major() {
        let gray = GrayFrame::new(vec![1, 2, 3, 4, 5, 6], 3, 2);
        assert_eq!(gray.get(0, 0), 1);
        assert_eq!(gray.get(2, 0), 3);
        assert_eq!(gray.get(1, 1), 5);
        assert_eq!(gray.get(2, 1), 6);
    }

    #[test]
    fn test_filled() {
        let gray = GrayFrame::filled(4, 3, 7);
        assert_eq!(gray.data().len(), 12);
        assert!(gray.data().iter().all(|&v| v == 7));
    }
}
