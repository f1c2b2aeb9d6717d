use std::collections::HashMap;
use std::sync::Arc;

use itertools::Itertools;
use stopmap_transit::TransportMode;
use tracing::debug;

use crate::icon::{IconHandle, MarkerIcon};

/// Memoizes icons by the ordered mode list. Never evicts.
///
/// The key keeps the order the API reported, so `["bus", "rail"]` and
/// `["rail", "bus"]` build two icons. The map is keyed on the modes
/// themselves; the joined string is only the icon's display name.
#[derive(Debug, Default)]
pub struct IconCache {
    cache: HashMap<Vec<TransportMode>, IconHandle>,
    builds: usize,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_for(modes: &[TransportMode]) -> String {
        modes.iter().map(TransportMode::as_str).join(",")
    }

    pub fn get_or_create(&mut self, modes: &[TransportMode]) -> IconHandle {
        if let Some(icon) = self.cache.get(modes) {
            return Arc::clone(icon);
        }

        let key: Arc<str> = Self::key_for(modes).into();
        let icon = Arc::new(MarkerIcon::build(Arc::clone(&key), modes));
        self.builds += 1;
        debug!(key = %key, width = icon.geometry.width, "built marker icon");

        self.cache.insert(modes.to_vec(), Arc::clone(&icon));
        icon
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of icon constructions so far
    pub fn builds(&self) -> usize {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::ModeGlyph;

    fn modes(names: &[&str]) -> Vec<TransportMode> {
        names.iter().map(|m| TransportMode::new(m)).collect()
    }

    #[test]
    fn test_same_order_shares_handle() {
        let mut cache = IconCache::new();

        let first = cache.get_or_create(&modes(&["bus", "rail"]));
        let second = cache.get_or_create(&modes(&["bus", "rail"]));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.builds(), 1);
    }

    #[test]
    fn test_order_is_part_of_the_key() {
        let mut cache = IconCache::new();

        let bus_rail = cache.get_or_create(&modes(&["bus", "rail"]));
        let rail_bus = cache.get_or_create(&modes(&["rail", "bus"]));

        assert!(!Arc::ptr_eq(&bus_rail, &rail_bus));
        assert_eq!(&*bus_rail.key, "bus,rail");
        assert_eq!(&*rail_bus.key, "rail,bus");
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.builds(), 2);
    }

    #[test]
    fn test_comma_in_mode_name_does_not_collide() {
        let mut cache = IconCache::new();

        let joined = cache.get_or_create(&modes(&["bus,rail"]));
        let pair = cache.get_or_create(&modes(&["bus", "rail"]));

        assert!(!Arc::ptr_eq(&joined, &pair));
        assert_eq!(pair.glyphs, [ModeGlyph::Bus, ModeGlyph::Rail]);
        assert_eq!(joined.glyphs, [ModeGlyph::Unknown]);
        assert_eq!(cache.builds(), 2);
    }

    #[test]
    fn test_no_rebuild_after_many_lookups() {
        let mut cache = IconCache::new();
        for _ in 0..10 {
            cache.get_or_create(&modes(&["tram"]));
            cache.get_or_create(&modes(&[]));
        }

        assert_eq!(cache.builds(), 2);
        assert_eq!(cache.len(), 2);
    }
}
