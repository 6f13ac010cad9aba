use image::GenericImageView as _;

use crate::foundation::core::Rgba8;

/// Random-access colour lookup over a rectangular grid.
///
/// Images implement this directly. [`BoardSource`] lets any caller-defined grid (a simulation
/// board, a procedural pattern) be rendered through the same glyph pipeline.
pub trait ColorSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Colour at `(x, y)`. Only called with coordinates inside [`ColorSource::dimensions`].
    fn color_at(&self, x: u32, y: u32) -> Rgba8;
}

impl<T: ColorSource + ?Sized> ColorSource for &T {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn color_at(&self, x: u32, y: u32) -> Rgba8 {
        (**self).color_at(x, y)
    }
}

impl ColorSource for image::RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        image::RgbaImage::dimensions(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Rgba8 {
        Rgba8::from(*self.get_pixel(x, y))
    }
}

impl ColorSource for image::DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        image::GenericImageView::dimensions(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Rgba8 {
        Rgba8::from(self.get_pixel(x, y))
    }
}

/// Colour source backed by a callback over board coordinates.
#[derive(Clone, Debug)]
pub struct BoardSource<F> {
    width: u32,
    height: u32,
    color_fn: F,
}

impl<F> BoardSource<F>
where
    F: Fn(u32, u32) -> Rgba8,
{
    pub fn new(width: u32, height: u32, color_fn: F) -> Self {
        Self {
            width,
            height,
            color_fn,
        }
    }
}

impl<F> ColorSource for BoardSource<F>
where
    F: Fn(u32, u32) -> Rgba8,
{
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn color_at(&self, x: u32, y: u32) -> Rgba8 {
        (self.color_fn)(x, y)
    }
}
