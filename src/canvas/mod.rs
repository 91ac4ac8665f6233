mod store;

pub use store::{AppendOutcome, ShapeStore};

use crate::geometry::{CanvasPoint, Rgba};
use crate::palette::{Palette, PaletteResult};
use crate::shape::{ShapeKind, ShapeRecord, SpawnRng};

/// Spawn parameters for new shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasOptions {
    /// Fill color used while no palette is configured.
    pub default_color: Rgba,
    pub min_size: f32,
    pub max_size: f32,
    pub max_shapes: usize,
}

pub const DEFAULT_SHAPE_COLOR: Rgba = Rgba::opaque(0x00, 0xFF, 0x00);
pub const MIN_SHAPE_SIZE: f32 = 20.0;
pub const MAX_SHAPE_SIZE: f32 = 50.0;
pub const MAX_SHAPE_COUNT: usize = 10;

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_SHAPE_COLOR,
            min_size: MIN_SHAPE_SIZE,
            max_size: MAX_SHAPE_SIZE,
            max_shapes: MAX_SHAPE_COUNT,
        }
    }
}

/// The interactive board: turns presses into randomized shape records and
/// keeps them in the bounded store.
#[derive(Debug, Clone)]
pub struct ShapeCanvas {
    store: ShapeStore,
    palette: Palette,
    options: CanvasOptions,
    rng: SpawnRng,
}

impl ShapeCanvas {
    pub fn new(options: CanvasOptions, rng: SpawnRng) -> Self {
        Self {
            store: ShapeStore::with_capacity(options.max_shapes),
            palette: Palette::empty(),
            options,
            rng,
        }
    }

    pub fn with_palette(options: CanvasOptions, palette: Palette, rng: SpawnRng) -> Self {
        let mut canvas = Self::new(options, rng);
        canvas.palette = palette;
        canvas
    }

    /// Replace the palette with already-decoded colors.
    pub fn set_colors(&mut self, colors: Vec<Rgba>) {
        self.palette = Palette::from_colors(colors);
    }

    /// Replace the palette with packed 32-bit ARGB values.
    pub fn set_argb_colors(&mut self, values: &[u32]) {
        self.palette =
            Palette::from_colors(values.iter().copied().map(Rgba::from_argb).collect());
    }

    /// Replace the palette with parsed hex strings. Any invalid entry fails
    /// the whole call and keeps the current palette.
    pub fn set_hex_colors<S: AsRef<str>>(&mut self, values: &[S]) -> PaletteResult<()> {
        self.palette = Palette::from_hex_strings(values)?;
        Ok(())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn shapes(&self) -> &[ShapeRecord] {
        self.store.records()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Handle a pointer press: spawn one randomized record at the press
    /// location and append it. Infallible; the outcome tells the host whether
    /// this press reset the board.
    pub fn press(&mut self, x: f32, y: f32) -> AppendOutcome {
        let record = self.spawn_record(CanvasPoint::new(x, y));
        tracing::debug!(
            kind = ?record.kind,
            color = record.color.to_argb(),
            size = f64::from(record.size),
            x = f64::from(record.center.x),
            y = f64::from(record.center.y),
            "spawned shape"
        );
        self.store.append(record)
    }

    fn spawn_record(&mut self, center: CanvasPoint) -> ShapeRecord {
        // Kind and color are sampled independently.
        let kind = ShapeKind::ALL[self.rng.pick_index(ShapeKind::ALL.len())];
        let color = self
            .palette
            .pick(&mut self.rng)
            .unwrap_or(self.options.default_color);
        let size = self
            .rng
            .range_f32(self.options.min_size, self.options.max_size);
        ShapeRecord::new(kind, color, size, center)
    }
}
