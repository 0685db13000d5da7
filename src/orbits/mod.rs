//! # Orbit tracks: sampled sky-plane trajectories
//!
//! An [`OrbitTrack`] is the projected orbital path of one star, sampled at fixed time steps
//! and already expressed in sky-plane arcseconds. An [`OrbitTrackSet`] is the ordered list of
//! tracks produced from one orbit-element table.
//!
//! Modules
//! -----------------
//! * [`orbit_table_reader`](crate::orbits::orbit_table_reader) – Parses the whitespace orbit-element table
//!   into [`OrbitElements`](crate::orbits::orbit_table_reader::OrbitElements).
//! * [`propagation`](crate::orbits::propagation) – Sampling grid and the [`OrbitPropagator`](crate::orbits::propagation::OrbitPropagator)
//!   contract that turns elements into tracks.
//!
//! Notes
//! -----------------
//! * `star_name` *should* reference a catalog star but is not required to; unmatched tracks are
//!   still displayed (see [`crate::overlay`]).
//! * Tracks and sets are immutable once built; a reload produces a new set.
use crate::constants::SkyPoint;

pub mod orbit_table_reader;
pub mod propagation;

/// The sampled trajectory of one star.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitTrack {
    star_name: String,
    points: Vec<SkyPoint>,
}

impl OrbitTrack {
    /// Arguments
    /// -----------------
    /// * `star_name` – Name of the star this trajectory belongs to.
    /// * `points` – Time-ordered `(x, y)` samples in arcseconds.
    pub fn new(star_name: impl Into<String>, points: Vec<SkyPoint>) -> Self {
        Self {
            star_name: star_name.into(),
            points,
        }
    }

    pub fn star_name(&self) -> &str {
        &self.star_name
    }

    pub fn points(&self) -> &[SkyPoint] {
        &self.points
    }
}

/// Ordered collection of [`OrbitTrack`]s, in orbit-table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrbitTrackSet {
    tracks: Vec<OrbitTrack>,
}

impl OrbitTrackSet {
    pub fn new(tracks: Vec<OrbitTrack>) -> Self {
        Self { tracks }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[OrbitTrack] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrbitTrack> {
        self.tracks.iter()
    }
}

impl FromIterator<OrbitTrack> for OrbitTrackSet {
    fn from_iter<T: IntoIterator<Item = OrbitTrack>>(iter: T) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a OrbitTrackSet {
    type Item = &'a OrbitTrack;
    type IntoIter = std::slice::Iter<'a, OrbitTrack>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

#[cfg(test)]
mod orbits_test {
    use super::*;

    #[test]
    fn test_track_set_preserves_order() {
        let set: OrbitTrackSet = vec![
            OrbitTrack::new("S2", vec![(0.1, 0.0), (0.0, 0.1)]),
            OrbitTrack::new("S38", vec![(0.2, 0.0)]),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        let names: Vec<_> = set.iter().map(OrbitTrack::star_name).collect();
        assert_eq!(names, vec!["S2", "S38"]);
        assert_eq!(set.tracks()[0].points(), &[(0.1, 0.0), (0.0, 0.1)]);
    }

    #[test]
    fn test_empty_set() {
        assert!(OrbitTrackSet::empty().is_empty());
        assert_eq!(OrbitTrackSet::default(), OrbitTrackSet::new(vec![]));
    }
}
