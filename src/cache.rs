//! Contains a memo of generated images, keyed by the parameters that made them.

use std::collections::HashMap;

use alloc::sync::Arc;
use parking_lot::Mutex;

use crate::{
    NoiseKind,
    curves::FadeCurve,
    error::NoiseError,
    image::OutputImage,
    params::{Canvas, CellularParams, WhiteParams},
};

/// A hashable identity for a [`NoiseKind`].
/// Floats are keyed by their bit patterns, so only exactly equal parameters share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamsKey {
    /// Keys [`NoiseKind::Gradient`].
    Gradient {
        /// The canvas.
        canvas: Canvas,
        /// The grid size.
        grid_size: u32,
        /// The octave count.
        octaves: u32,
        /// The bits of the persistence.
        persistence_bits: u32,
        /// The seed.
        seed: u32,
        /// The fade curve.
        fade: FadeCurve,
        /// Whether tiling was requested.
        tileable: bool,
    },
    /// Keys [`NoiseKind::Cellular`].
    Cellular(CellularParams),
    /// Keys [`NoiseKind::White`].
    White(WhiteParams),
}

impl From<&NoiseKind> for ParamsKey {
    fn from(kind: &NoiseKind) -> Self {
        match kind {
            NoiseKind::Gradient(p) => Self::Gradient {
                canvas: p.canvas,
                grid_size: p.grid_size,
                octaves: p.octaves,
                persistence_bits: p.persistence.to_bits(),
                seed: p.seed,
                fade: p.fade,
                tileable: p.tileable,
            },
            NoiseKind::Cellular(p) => Self::Cellular(*p),
            NoiseKind::White(p) => Self::White(*p),
        }
    }
}

type Slot = Arc<Mutex<Option<Arc<OutputImage>>>>;

/// Remembers generated images so an unchanged request is answered without regenerating.
///
/// Each key has its own slot lock: concurrent requests for the same parameters wait for one generation,
/// while requests for different parameters proceed independently.
/// Failed generations are not remembered.
///
/// ```
/// # use texnoise::{GenerationCache, NoiseKind, params::GradientParams};
/// # use std::sync::Arc;
/// let cache = GenerationCache::default();
/// let kind = NoiseKind::Gradient(GradientParams::default().with_size(32).with_grid_size(4));
/// let first = cache.generate(&kind).unwrap();
/// let second = cache.generate(&kind).unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct GenerationCache {
    slots: Mutex<HashMap<ParamsKey, Slot>>,
}

impl GenerationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the image for `kind`, generating it only if it isn't remembered yet.
    pub fn generate(&self, kind: &NoiseKind) -> Result<Arc<OutputImage>, NoiseError> {
        let key = ParamsKey::from(kind);
        let slot = Arc::clone(self.slots.lock().entry(key).or_default());

        let mut entry = slot.lock();
        if let Some(image) = entry.as_ref() {
            tracing::debug!(?key, "noise already generated with these parameters");
            return Ok(Arc::clone(image));
        }

        tracing::debug!(?key, "generating noise for new parameters");
        let image = match kind.generate() {
            Ok(image) => Arc::new(image),
            Err(err) => {
                drop(entry);
                self.forget_empty(key, &slot);
                return Err(err);
            }
        };
        *entry = Some(Arc::clone(&image));
        Ok(image)
    }

    /// Drops the slot for `key` if it is still `slot`, empty, and nobody else is waiting on it.
    fn forget_empty(&self, key: ParamsKey, slot: &Slot) {
        let mut slots = self.slots.lock();
        let unshared = slots.get(&key).is_some_and(|current| Arc::ptr_eq(current, slot))
            && Arc::strong_count(slot) == 2;
        if unshared && slot.lock().is_none() {
            slots.remove(&key);
        }
    }

    /// Gets the remembered image for `kind` without generating anything.
    pub fn get(&self, kind: &NoiseKind) -> Option<Arc<OutputImage>> {
        let slot = self.slots.lock().get(&ParamsKey::from(kind)).cloned()?;
        let entry = slot.lock();
        entry.clone()
    }

    /// The number of remembered images.
    pub fn len(&self) -> usize {
        let slots: alloc::vec::Vec<Slot> = self.slots.lock().values().cloned().collect();
        slots.iter().filter(|slot| slot.lock().is_some()).count()
    }

    /// Returns true if no image is remembered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every remembered image.
    pub fn clear(&self) {
        self.slots.lock().clear();
    }
}
